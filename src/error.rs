//! Errors raised while planning batches and rendering commands.

use thiserror::Error;

use crate::batch::PlanIssue;

/// Failure of a generation run. Nothing is printed when one of these occurs.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The command template could not be parsed.
    #[error("invalid command template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// A placeholder referenced by the template was not supplied, or rendering
    /// failed for another reason.
    #[error("failed to render batch {batch_num}: {source}")]
    Render {
        batch_num: u64,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("batch size must be positive")]
    ZeroBatchSize,

    /// A batch bound does not fit in a `u64`.
    #[error("ledger bound overflows at batch {batch_num}")]
    Overflow { batch_num: u64 },

    /// Strict checking is enabled and the plan has issues.
    #[error("batch plan rejected: {}", format_issues(.0))]
    RejectedPlan(Vec<PlanIssue>),
}

fn format_issues(issues: &[PlanIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, GenerateError>;
