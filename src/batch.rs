//! # Ledger Range Partitioning
//!
//! Splits an inclusive ledger range into consecutive fixed-size batches. The
//! last batch always ends at the configured upper bound, so it absorbs any
//! remainder (or is shortened) when the range is not an exact multiple of the
//! batch size.
//!
//! A batch count that is too large for the range is not corrected: earlier
//! batches run past the upper bound and the last one may end up with
//! `start > end`. [`BatchPlan::check`] reports these cases without touching
//! the plan.

use std::fmt;

use crate::error::{GenerateError, Result};

/// One contiguous sub-range of the ledger range. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// 1-based position in the plan.
    pub index: u64,
    pub start: u64,
    pub end: u64,
}

impl Batch {
    /// Number of ledgers covered, or 0 for an inverted batch.
    pub fn ledger_count(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

/// Parameters of a partitioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    pub batch_size: u64,
    pub start: u64,
    pub last_ledger: u64,
    pub batch_count: u64,
}

/// Something about a plan that an operator probably did not intend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanIssue {
    /// The range itself is empty.
    StartAfterLastLedger { start: u64, last_ledger: u64 },
    /// A non-final batch reaches past the upper bound.
    Overrun {
        index: u64,
        end: u64,
        last_ledger: u64,
    },
    /// A batch whose start lies beyond its end.
    StartAfterEnd { index: u64, start: u64, end: u64 },
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanIssue::StartAfterLastLedger { start, last_ledger } => write!(
                f,
                "start ledger {} is after last ledger {}",
                start, last_ledger
            ),
            PlanIssue::Overrun {
                index,
                end,
                last_ledger,
            } => write!(
                f,
                "batch {} ends at {} past last ledger {}",
                index, end, last_ledger
            ),
            PlanIssue::StartAfterEnd { index, start, end } => {
                write!(f, "batch {} starts at {} after its end {}", index, start, end)
            }
        }
    }
}

impl BatchPlan {
    pub fn new(batch_size: u64, start: u64, last_ledger: u64, batch_count: u64) -> Self {
        BatchPlan {
            batch_size,
            start,
            last_ledger,
            batch_count,
        }
    }

    /// Computes the batches in order.
    ///
    /// Batch `i` ends at `start_i + batch_size - 1`, except the last one which
    /// ends at `last_ledger`. Each following batch starts right after the
    /// previous end.
    pub fn batches(&self) -> Result<Vec<Batch>> {
        if self.batch_size == 0 {
            return Err(GenerateError::ZeroBatchSize);
        }

        let mut batches = Vec::new();
        let mut start = self.start;
        for index in 1..=self.batch_count {
            let is_last = index == self.batch_count;
            let end = if is_last {
                self.last_ledger
            } else {
                start
                    .checked_add(self.batch_size - 1)
                    .ok_or(GenerateError::Overflow { batch_num: index })?
            };
            batches.push(Batch { index, start, end });
            if !is_last {
                start = end
                    .checked_add(1)
                    .ok_or(GenerateError::Overflow { batch_num: index + 1 })?;
            }
        }
        Ok(batches)
    }

    /// Lists what looks misconfigured in the plan. An empty list means the
    /// batches cover `[start, last_ledger]` exactly.
    pub fn check(&self) -> Result<Vec<PlanIssue>> {
        let mut issues = Vec::new();
        if self.start > self.last_ledger {
            issues.push(PlanIssue::StartAfterLastLedger {
                start: self.start,
                last_ledger: self.last_ledger,
            });
        }
        for batch in self.batches()? {
            if batch.start > batch.end {
                issues.push(PlanIssue::StartAfterEnd {
                    index: batch.index,
                    start: batch.start,
                    end: batch.end,
                });
            } else if batch.index < self.batch_count && batch.end > self.last_ledger {
                issues.push(PlanIssue::Overrun {
                    index: batch.index,
                    end: batch.end,
                    last_ledger: self.last_ledger,
                });
            }
        }
        Ok(issues)
    }
}
