//! # Backfill Configuration
//!
//! Tunables for a generation run. Every field has a default equal to the
//! values the pubnet backfill was first run with, so an empty config file (or
//! none at all) reproduces that run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::batch::BatchPlan;
use crate::gcp::gce::{DEFAULT_INSTANCE_PREFIX, DEFAULT_TEMPLATE};
use crate::template::CommandTemplate;

pub const DEFAULT_BATCH_SIZE: u64 = 2_500_000;
pub const DEFAULT_START: u64 = 0;
pub const DEFAULT_LAST_LEDGER: u64 = 52_124_262;
pub const DEFAULT_BATCH_COUNT: u64 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackfillConfig {
    pub gcp_project: String,
    pub zone: String,
    pub service_account: String,
    /// Ledgers per batch, except for the last batch.
    pub batch_size: u64,
    /// First ledger of batch 1.
    pub start: u64,
    /// Last ledger of the final batch.
    pub last_ledger: u64,
    pub batch_count: u64,
    pub instance_prefix: String,
    /// Replaces the built-in `gcloud` template when set.
    pub template_file: Option<PathBuf>,
    /// Refuse plans that overrun `last_ledger` instead of only warning.
    pub strict: bool,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        BackfillConfig {
            gcp_project: String::new(),
            zone: String::new(),
            service_account: String::new(),
            batch_size: DEFAULT_BATCH_SIZE,
            start: DEFAULT_START,
            last_ledger: DEFAULT_LAST_LEDGER,
            batch_count: DEFAULT_BATCH_COUNT,
            instance_prefix: DEFAULT_INSTANCE_PREFIX.to_string(),
            template_file: None,
            strict: false,
        }
    }
}

impl BackfillConfig {
    /// Reads a TOML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn plan(&self) -> BatchPlan {
        BatchPlan::new(
            self.batch_size,
            self.start,
            self.last_ledger,
            self.batch_count,
        )
    }

    /// The template text: the file named by `template_file`, or the built-in one.
    pub fn template_text(&self) -> Result<String> {
        match &self.template_file {
            Some(path) => std::fs::read_to_string(path)
                .map(|s| s.trim_end_matches(['\n', '\r']).to_string())
                .with_context(|| format!("Failed to read template file {}", path.display())),
            None => Ok(DEFAULT_TEMPLATE.to_string()),
        }
    }

    pub fn template(&self) -> Result<CommandTemplate> {
        let text = self.template_text()?;
        Ok(CommandTemplate::parse(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            BackfillConfig::from_toml("").unwrap(),
            BackfillConfig::default()
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = BackfillConfig::from_toml(
            r#"
            gcp_project = "my-project"
            zone = "us-central1-a"
            batch_count = 3
            strict = true
            "#,
        )
        .unwrap();
        assert_eq!(config.gcp_project, "my-project");
        assert_eq!(config.zone, "us-central1-a");
        assert_eq!(config.batch_count, 3);
        assert!(config.strict);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.last_ledger, DEFAULT_LAST_LEDGER);
        assert_eq!(config.instance_prefix, DEFAULT_INSTANCE_PREFIX);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(BackfillConfig::from_toml("batchsize = 3").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "service_account = \"sa@example.com\"").unwrap();
        writeln!(file, "last_ledger = 1000").unwrap();
        let config = BackfillConfig::load(file.path()).unwrap();
        assert_eq!(config.service_account, "sa@example.com");
        assert_eq!(config.plan().last_ledger, 1000);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = BackfillConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }

    #[test]
    fn template_file_overrides_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "echo {{{{start}}}} {{{{end}}}}").unwrap();
        let config = BackfillConfig {
            template_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.template_text().unwrap(), "echo {{start}} {{end}}");
        assert_eq!(
            BackfillConfig::default().template_text().unwrap(),
            DEFAULT_TEMPLATE
        );
    }
}
