use anyhow::{Context, Result};
use galexie_backfill::BackfillConfig;

use crate::common::print_table;

pub fn run(config: &BackfillConfig) -> Result<()> {
    let template = config.template()?;
    let commands = galexie_backfill::generate_batch_commands(config, &template)
        .context("Failed to plan batches")?;

    let rows: Vec<[String; 5]> = commands
        .iter()
        .map(|c| {
            [
                c.batch.index.to_string(),
                c.instance_name.clone(),
                c.batch.start.to_string(),
                c.batch.end.to_string(),
                c.batch.ledger_count().to_string(),
            ]
        })
        .collect();

    print_table(&["Batch", "Instance", "Start", "End", "Ledgers"], &rows);
    Ok(())
}
