//! Job sequencing rules and the job sequencer.
//!
//! Determines the order in which jobs enter the planning loop. Rules are
//! composable: the sequencer compares jobs rule by rule and falls through
//! to the next rule on ties.
//!
//! # Usage
//!
//! ```
//! use shopfloor::sequencing::{JobSequencer, rules};
//!
//! let sequencer = JobSequencer::new()
//!     .with_rule(rules::PriorityRank)
//!     .with_rule(rules::EarliestDeadline);
//! // let order = sequencer.sort_indices(&jobs);
//! ```
//!
//! # Score Convention
//! **Lower score = sequenced first.** `PriorityRank` maps High/Medium/Low
//! to 1/2/3, so high-priority jobs come out in front.

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::Arc;

use crate::models::Job;

/// Score returned by a sequencing rule. Lower = sequenced first.
pub type RuleScore = f64;

/// A rule that scores a job for sequencing.
///
/// Rules are job-intrinsic: both built-in rules read only catalog fields,
/// so no scheduling context is threaded through.
pub trait SequencingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY", "EDD").
    fn name(&self) -> &'static str;

    /// Scores a job. Lower score = sequenced first.
    fn evaluate(&self, job: &Job) -> RuleScore;
}

/// An ordered rule chain that sequences jobs.
///
/// Jobs are compared rule by rule; the first rule whose scores differ by
/// more than epsilon decides. When every rule ties, the stable sort keeps
/// the catalog input order.
#[derive(Clone)]
pub struct JobSequencer {
    rules: Vec<Arc<dyn SequencingRule>>,
    epsilon: f64,
}

impl JobSequencer {
    /// Creates an empty sequencer (all jobs tie → input order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// The default dispatch policy: priority rank, then earliest deadline.
    pub fn priority_then_deadline() -> Self {
        Self::new()
            .with_rule(rules::PriorityRank)
            .with_rule(rules::EarliestDeadline)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: SequencingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Returns indices into the job slice, in dispatch order.
    ///
    /// The sort is stable: jobs tied on every rule keep their input order,
    /// so sequencing is a pure reordering of the catalog.
    pub fn sort_indices(&self, jobs: &[Job]) -> Vec<usize> {
        if jobs.is_empty() {
            return Vec::new();
        }

        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));
        indices
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        Ordering::Equal
    }
}

impl Default for JobSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JobSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobSequencer")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
