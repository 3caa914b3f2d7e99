//! # Google Compute Engine (GCE) Commands
//!
//! Defaults for the `gcloud compute instances create-with-container` command
//! that starts one galexie backfill VM per ledger batch.
//!
//! ## Submodules
//! - `defaults`: the built-in command template and naming conventions.

/// Built-in command template and instance naming.
pub mod defaults;

pub use crate::gcp::gce::defaults::{
    COMMAND_SEPARATOR, DEFAULT_INSTANCE_PREFIX, DEFAULT_TEMPLATE, instance_name,
};
