//! Job (order) model.
//!
//! A job carries a priority, an earliest start, a soft deadline, an
//! ordered sequence of required operations, a single declared material,
//! and a unit count. Deadlines are a sort key only — a schedule may
//! legally run past them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Dispatch priority. Declaration order is the dispatch order:
/// `High` jobs are sequenced before `Medium` before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Sequenced first (rank 1).
    High,
    /// Rank 2.
    Medium,
    /// Sequenced last (rank 3).
    Low,
}

impl Priority {
    /// Numeric rank used as the primary sort key (High=1, Medium=2, Low=3).
    pub fn rank(self) -> i32 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl FromStr for Priority {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(ScheduleError::UnknownPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(label)
    }
}

/// A manufacturing job to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Dispatch priority.
    pub priority: Priority,
    /// Earliest start time.
    pub start: NaiveDateTime,
    /// Deadline. Secondary sort key only; never enforced.
    pub deadline: NaiveDateTime,
    /// Required operations, in execution order.
    pub operations: Vec<String>,
    /// The single material this job consumes.
    pub material_id: String,
    /// Unit count.
    pub units: i64,
}

impl Job {
    /// Creates a new job with medium priority and epoch timestamps.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            priority: Priority::Medium,
            start: NaiveDateTime::default(),
            deadline: NaiveDateTime::default(),
            operations: Vec::new(),
            material_id: String::new(),
            units: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the earliest start time.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: NaiveDateTime) -> Self {
        self.deadline = deadline;
        self
    }

    /// Appends a required operation.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operations.push(operation.into());
        self
    }

    /// Sets the required material.
    pub fn with_material(mut self, material_id: impl Into<String>) -> Self {
        self.material_id = material_id.into();
        self
    }

    /// Sets the unit count.
    pub fn with_units(mut self, units: i64) -> Self {
        self.units = units;
        self
    }

    /// Number of required operations.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}
