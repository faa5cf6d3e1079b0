//! Built-in sequencing rules.
//!
//! # Score Convention
//! All rules return lower scores for jobs that should be sequenced first.

use super::{RuleScore, SequencingRule};
use crate::models::Job;

/// Priority rank.
///
/// Maps High/Medium/Low to 1/2/3 so higher-priority jobs sort first.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRank;

impl SequencingRule for PriorityRank {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.priority.rank() as f64
    }
}

/// Earliest Deadline (EDD).
///
/// Scores by the deadline as milliseconds since the Unix epoch, so jobs
/// due sooner sort first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadline;

impl SequencingRule for EarliestDeadline {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.deadline.and_utc().timestamp_millis() as f64
    }
}
