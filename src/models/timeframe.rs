//! Timeframe weighting preferences.
//!
//! A calendar window with time/cost weights. Loaders carry these records
//! alongside the catalogs, but no scheduler component consumes them — the
//! greedy algorithm ignores weighting entirely.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A time/cost weighting preference for a calendar window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeframePreference {
    /// Window start (inclusive).
    pub start: NaiveDateTime,
    /// Window end (exclusive).
    pub end: NaiveDateTime,
    /// Relative weight on completion time.
    pub time_weight: f64,
    /// Relative weight on cost.
    pub cost_weight: f64,
}

impl TimeframePreference {
    /// Creates a new preference window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, time_weight: f64, cost_weight: f64) -> Self {
        Self {
            start,
            end,
            time_weight,
            cost_weight,
        }
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.start && time < self.end
    }
}
