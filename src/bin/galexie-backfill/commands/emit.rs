use std::io::Write;

use anyhow::{Context, Result};
use galexie_backfill::BackfillConfig;
use tracing::info;

pub fn run(config: &BackfillConfig) -> Result<()> {
    let template = config.template()?;
    let block =
        galexie_backfill::generate(config, &template).context("Failed to generate commands")?;
    info!("generated {} commands", config.batch_count);

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", block)?;
    Ok(())
}
