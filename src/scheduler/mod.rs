//! The greedy scheduler and KPI evaluation.
//!
//! `GreedyScheduler` plans jobs in sequencer order against a fresh
//! `ResourceLedger` per run: a fast, priority-driven heuristic, not an
//! optimizer. `ScheduleKpi` computes quality metrics over the result.

mod greedy;
mod kpi;

pub use greedy::{GreedyScheduler, ScheduleRequest};
pub use kpi::ScheduleKpi;
