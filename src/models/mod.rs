//! Shop-floor domain models.
//!
//! Catalog types (`Machine`, `Material`, `Job`) are immutable input
//! records; mutable scheduling state lives in the `ResourceLedger`.
//! `Schedule` / `ScheduledOperation` form the output side, and
//! `TimeframePreference` is inert loader configuration.

mod job;
mod machine;
mod material;
mod schedule;
mod timeframe;

pub use job::{Job, Priority};
pub use machine::Machine;
pub use material::Material;
pub use schedule::{Schedule, ScheduledOperation};
pub use timeframe::TimeframePreference;
