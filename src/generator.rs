//! # Batch Command Generator
//!
//! Turns a [`BackfillConfig`] into one rendered command per batch. Everything
//! is rendered up front; callers either get the whole list or an error.

use tracing::{debug, warn};

use crate::batch::Batch;
use crate::config::BackfillConfig;
use crate::error::{GenerateError, Result};
use crate::gcp::gce::{COMMAND_SEPARATOR, instance_name};
use crate::template::{CommandContext, CommandTemplate};

/// A batch together with its rendered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCommand {
    pub batch: Batch,
    pub instance_name: String,
    pub command: String,
}

/// Renders the commands for every batch of `config`'s plan, in order.
///
/// Plan issues are logged as warnings, or returned as
/// [`GenerateError::RejectedPlan`] when `config.strict` is set.
pub fn generate_batch_commands(
    config: &BackfillConfig,
    template: &CommandTemplate,
) -> Result<Vec<BatchCommand>> {
    let plan = config.plan();
    let issues = plan.check()?;
    if !issues.is_empty() {
        if config.strict {
            return Err(GenerateError::RejectedPlan(issues));
        }
        for issue in &issues {
            warn!("{}", issue);
        }
    }

    plan.batches()?
        .into_iter()
        .map(|batch| -> Result<BatchCommand> {
            let name = instance_name(&config.instance_prefix, batch.index);
            debug!(
                "batch {}: {} [{}, {}]",
                batch.index, name, batch.start, batch.end
            );
            let command = template.render(&CommandContext {
                instance_name: name.clone(),
                gcp_project: &config.gcp_project,
                zone: &config.zone,
                service_account: &config.service_account,
                start: batch.start,
                end: batch.end,
                batch_num: batch.index,
            })?;
            Ok(BatchCommand {
                batch,
                instance_name: name,
                command,
            })
        })
        .collect()
}

/// The command strings alone, one per batch.
pub fn generate_commands(
    config: &BackfillConfig,
    template: &CommandTemplate,
) -> Result<Vec<String>> {
    Ok(generate_batch_commands(config, template)?
        .into_iter()
        .map(|c| c.command)
        .collect())
}

/// The full output block: all commands joined by `";\n\n"`.
pub fn generate(config: &BackfillConfig, template: &CommandTemplate) -> Result<String> {
    Ok(generate_commands(config, template)?.join(COMMAND_SEPARATOR))
}
