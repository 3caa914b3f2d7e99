use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::common::{Overrides, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "galexie-backfill",
    about = "Print gcloud commands that start one galexie backfill VM per ledger batch"
)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Print the command block (default)
    Commands,

    /// Print a table of the batches instead of the commands
    Plan,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.overrides.resolve()?;
    info!(
        "project={:?} zone={:?} batches={} size={} range=[{}, {}]",
        config.gcp_project,
        config.zone,
        config.batch_count,
        config.batch_size,
        config.start,
        config.last_ledger
    );

    match cli.cmd.unwrap_or(Commands::Commands) {
        Commands::Commands => commands::emit::run(&config),
        Commands::Plan => commands::plan::run(&config),
    }
}

mod commands;
mod common;
