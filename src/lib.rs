//! Greedy shop-floor production scheduler.
//!
//! Assigns manufacturing jobs to machines over time, respecting job
//! priority, deadlines, material lead times and stock, machine
//! maintenance cycles, and per-operation throughput. Produces a
//! time-ordered, cost-annotated schedule.
//!
//! # Modules
//!
//! - **`models`**: Catalog types — `Machine`, `Material`, `Job` — plus the
//!   `Schedule`/`ScheduledOperation` output side
//! - **`sequencing`**: Job ordering rules (`PriorityRank`, `EarliestDeadline`)
//!   and the composable `JobSequencer`
//! - **`ledger`**: The `ResourceLedger` — machine free time and
//!   runtime-since-maintenance, material ready times and stock
//! - **`scheduler`**: The `GreedyScheduler` planning loop and `ScheduleKpi`
//!   quality metrics
//! - **`validation`**: Pre-flight catalog integrity checks
//! - **`error`**: Run-aborting error types
//!
//! # Design
//!
//! Single-pass, single-threaded, no feedback loops. A run sequences the
//! jobs, then plans each job's operations in listed order against a
//! ledger constructed fresh for that run. The first error (material
//! shortage, unknown machine or material) aborts the whole pass; the
//! scheduler is a greedy heuristic, not a solver.
//!
//! Catalog loading and schedule rendering are the caller's concern: all
//! model types carry serde derives as the seam for external loaders and
//! presenters.

pub mod error;
pub mod ledger;
pub mod models;
pub mod scheduler;
pub mod sequencing;
pub mod validation;

pub use error::ScheduleError;
pub use ledger::{MachineSlot, ResourceLedger};
pub use models::{Job, Machine, Material, Priority, Schedule, ScheduledOperation};
pub use scheduler::{GreedyScheduler, ScheduleKpi, ScheduleRequest};
