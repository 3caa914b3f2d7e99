use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use galexie_backfill::BackfillConfig;
use tracing::Level;

/// Values that take precedence over the config file.
#[derive(Args, Debug)]
pub struct Overrides {
    /// TOML file with any of the settings below
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    project: Option<String>,
    #[arg(long, global = true)]
    zone: Option<String>,
    #[arg(long, global = true)]
    service_account: Option<String>,
    /// Ledgers per batch
    #[arg(long, global = true)]
    batch_size: Option<u64>,
    /// First ledger of the first batch
    #[arg(long, global = true)]
    start: Option<u64>,
    /// Last ledger of the final batch
    #[arg(long, global = true)]
    last_ledger: Option<u64>,
    /// Number of batches (and VMs)
    #[arg(long = "batches", global = true)]
    batch_count: Option<u64>,
    #[arg(long, global = true)]
    instance_prefix: Option<String>,
    /// Handlebars template file replacing the built-in gcloud command
    #[arg(long = "template", global = true)]
    template_file: Option<PathBuf>,
    /// Fail instead of warning when batches overrun the last ledger
    #[arg(long, global = true)]
    strict: bool,
}

impl Overrides {
    /// Built-in defaults, then the config file, then flags.
    pub fn resolve(self) -> Result<BackfillConfig> {
        let mut config = match &self.config {
            Some(path) => BackfillConfig::load(path)?,
            None => BackfillConfig::default(),
        };
        if let Some(v) = self.project {
            config.gcp_project = v;
        }
        if let Some(v) = self.zone {
            config.zone = v;
        }
        if let Some(v) = self.service_account {
            config.service_account = v;
        }
        if let Some(v) = self.batch_size {
            config.batch_size = v;
        }
        if let Some(v) = self.start {
            config.start = v;
        }
        if let Some(v) = self.last_ledger {
            config.last_ledger = v;
        }
        if let Some(v) = self.batch_count {
            config.batch_count = v;
        }
        if let Some(v) = self.instance_prefix {
            config.instance_prefix = v;
        }
        if let Some(v) = self.template_file {
            config.template_file = Some(v);
        }
        config.strict |= self.strict;
        Ok(config)
    }
}

pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

pub fn print_table(headers: &[&str; 5], rows: &[[String; 5]]) {
    let mut widths = [0usize; 5];
    for (i, h) in headers.iter().enumerate() {
        widths[i] = widths[i].max(h.chars().count());
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for (i, h) in headers.iter().enumerate() {
        if i > 0 {
            print!("  ");
        }
        print!("{:width$}", h, width = widths[i]);
    }
    println!();

    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            print!("  ");
        }
        print!("{}", "-".repeat(*w));
    }
    println!();

    // Numbers are right-aligned, names left-aligned.
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                print!("  ");
            }
            if i == 1 {
                print!("{:<width$}", cell, width = widths[i]);
            } else {
                print!("{:>width$}", cell, width = widths[i]);
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        overrides: Overrides,
    }

    #[test]
    fn no_flags_is_default() {
        let cli = TestCli::parse_from(["galexie-backfill"]);
        assert_eq!(cli.overrides.resolve().unwrap(), BackfillConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::parse_from([
            "galexie-backfill",
            "--project",
            "p",
            "--batches",
            "4",
            "--last-ledger",
            "99",
            "--strict",
        ]);
        let config = cli.overrides.resolve().unwrap();
        assert_eq!(config.gcp_project, "p");
        assert_eq!(config.batch_count, 4);
        assert_eq!(config.last_ledger, 99);
        assert!(config.strict);
        assert_eq!(config.batch_size, 2_500_000);
    }
}
