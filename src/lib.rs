// # galexie-backfill
//
// Generates the `gcloud` commands that start one galexie VM per ledger batch
// for a history backfill. The crate only produces text: an operator reviews
// the output and pipes it into a shell.

/// Ledger range partitioning and plan checks.
pub mod batch;

/// Tunables, loaded from TOML or defaulted.
pub mod config;

pub mod error;

/// Rendering the per-batch commands.
pub mod generator;

/// Google Cloud command defaults.
pub mod gcp;

/// Handlebars wrapper used for the command template.
pub mod template;

pub use batch::{Batch, BatchPlan, PlanIssue};
pub use config::BackfillConfig;
pub use error::GenerateError;
pub use generator::{BatchCommand, generate, generate_batch_commands, generate_commands};
pub use template::{CommandContext, CommandTemplate};
