//! Schedule (output) model.
//!
//! A schedule is the ordered sequence of scheduled operations emitted by
//! one run. It is append-only: records keep their emission order (job
//! sequence order × operation-within-job order), with no deduplication
//! and no reordering.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single machine booking for one operation of one job.
///
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledOperation {
    /// Owning job ID.
    pub job_id: String,
    /// Machine the operation runs on.
    pub machine_id: String,
    /// Operation name.
    pub operation: String,
    /// Units processed.
    pub units: i64,
    /// Start time.
    pub start: NaiveDateTime,
    /// End time.
    pub end: NaiveDateTime,
    /// Operation cost (`units * cost_per_unit`).
    pub cost: f64,
}

impl ScheduledOperation {
    /// Total duration (end - start).
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Append-only collection of scheduled operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    operations: Vec<ScheduledOperation>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scheduled operation.
    pub fn push(&mut self, op: ScheduledOperation) {
        self.operations.push(op);
    }

    /// All operations, in emission order.
    pub fn operations(&self) -> &[ScheduledOperation] {
        &self.operations
    }

    /// Number of scheduled operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Latest end time across all operations.
    pub fn makespan_end(&self) -> Option<NaiveDateTime> {
        self.operations.iter().map(|op| op.end).max()
    }

    /// Sum of operation costs.
    pub fn total_cost(&self) -> f64 {
        self.operations.iter().map(|op| op.cost).sum()
    }

    /// Operations belonging to a job, in emission order.
    pub fn operations_for_job(&self, job_id: &str) -> Vec<&ScheduledOperation> {
        self.operations
            .iter()
            .filter(|op| op.job_id == job_id)
            .collect()
    }

    /// Operations booked on a machine, in emission order.
    pub fn operations_for_machine(&self, machine_id: &str) -> Vec<&ScheduledOperation> {
        self.operations
            .iter()
            .filter(|op| op.machine_id == machine_id)
            .collect()
    }

    /// Completion time of a job: latest end among its operations.
    pub fn job_completion_time(&self, job_id: &str) -> Option<NaiveDateTime> {
        self.operations_for_job(job_id)
            .iter()
            .map(|op| op.end)
            .max()
    }

    /// Total busy time booked on a machine.
    pub fn busy_time_for_machine(&self, machine_id: &str) -> Duration {
        self.operations_for_machine(machine_id)
            .iter()
            .fold(Duration::zero(), |acc, op| acc + op.duration())
    }
}
