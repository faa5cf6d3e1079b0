//! Machine catalog model.
//!
//! A machine performs exactly one operation at a fixed hourly input speed
//! and cost per unit, and requires a maintenance pause after a cumulative
//! runtime threshold. Catalog entries are immutable; scheduling state
//! (free time, accumulated runtime) lives in the `ResourceLedger`.

use chrono::Duration;
use serde::{Deserialize, Serialize};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// A machine that performs a single manufacturing operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    /// Unique machine identifier.
    pub id: String,
    /// The operation this machine performs.
    pub operation: String,
    /// Production minutes per unit. Informational only; timing derives
    /// from `input_speed`.
    pub time_per_unit: f64,
    /// Economic cost per unit processed.
    pub cost_per_unit: f64,
    /// Units processed per hour.
    pub input_speed: f64,
    /// Cumulative busy-runtime (hours) before a maintenance pause of the
    /// same length is inserted.
    pub maintenance_interval_hours: f64,
    /// Failure rate (percent). Carried for loaders, unused by the algorithm.
    pub failure_rate: f64,
}

impl Machine {
    /// Creates a new machine for the given operation.
    pub fn new(id: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            operation: operation.into(),
            time_per_unit: 0.0,
            cost_per_unit: 0.0,
            input_speed: 1.0,
            maintenance_interval_hours: 0.0,
            failure_rate: 0.0,
        }
    }

    /// Sets the informational minutes-per-unit figure.
    pub fn with_time_per_unit(mut self, minutes: f64) -> Self {
        self.time_per_unit = minutes;
        self
    }

    /// Sets the cost per unit.
    pub fn with_cost_per_unit(mut self, cost: f64) -> Self {
        self.cost_per_unit = cost;
        self
    }

    /// Sets the input speed (units per hour).
    pub fn with_input_speed(mut self, units_per_hour: f64) -> Self {
        self.input_speed = units_per_hour;
        self
    }

    /// Sets the maintenance interval (hours of cumulative runtime).
    pub fn with_maintenance_interval(mut self, hours: f64) -> Self {
        self.maintenance_interval_hours = hours;
        self
    }

    /// Sets the failure rate (percent).
    pub fn with_failure_rate(mut self, percent: f64) -> Self {
        self.failure_rate = percent;
        self
    }

    /// Processing duration for a unit count: `units / input_speed` hours,
    /// rounded to the nearest millisecond.
    pub fn processing_time(&self, units: i64) -> Duration {
        let hours = units as f64 / self.input_speed;
        Duration::milliseconds((hours * MS_PER_HOUR).round() as i64)
    }

    /// Cost of processing a unit count: `units * cost_per_unit`.
    pub fn operation_cost(&self, units: i64) -> f64 {
        units as f64 * self.cost_per_unit
    }

    /// Maintenance interval as a duration. Used both as the runtime
    /// threshold and as the pause length.
    pub fn maintenance_interval(&self) -> Duration {
        Duration::milliseconds((self.maintenance_interval_hours * MS_PER_HOUR).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_builder() {
        let m = Machine::new("M1", "Op1")
            .with_time_per_unit(10.0)
            .with_cost_per_unit(50.0)
            .with_input_speed(5.0)
            .with_maintenance_interval(2.0)
            .with_failure_rate(5.0);

        assert_eq!(m.id, "M1");
        assert_eq!(m.operation, "Op1");
        assert!((m.time_per_unit - 10.0).abs() < 1e-10);
        assert!((m.cost_per_unit - 50.0).abs() < 1e-10);
        assert!((m.input_speed - 5.0).abs() < 1e-10);
        assert!((m.maintenance_interval_hours - 2.0).abs() < 1e-10);
        assert!((m.failure_rate - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_processing_time() {
        let m = Machine::new("M1", "Op1").with_input_speed(5.0);
        // 10 units at 5/h = 2 hours
        assert_eq!(m.processing_time(10), Duration::minutes(120));
    }

    #[test]
    fn test_processing_time_fractional() {
        let m = Machine::new("M3", "Op3").with_input_speed(7.0);
        // 15 units at 7/h = 15/7 hours ≈ 7_714_286 ms
        assert_eq!(m.processing_time(15), Duration::milliseconds(7_714_286));
    }

    #[test]
    fn test_zero_units() {
        let m = Machine::new("M1", "Op1")
            .with_input_speed(5.0)
            .with_cost_per_unit(50.0);
        assert_eq!(m.processing_time(0), Duration::zero());
        assert!((m.operation_cost(0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_operation_cost() {
        let m = Machine::new("M1", "Op1").with_cost_per_unit(50.0);
        assert!((m.operation_cost(10) - 500.0).abs() < 1e-10);
    }

    #[test]
    fn test_maintenance_interval() {
        let m = Machine::new("M3", "Op3").with_maintenance_interval(1.5);
        assert_eq!(m.maintenance_interval(), Duration::minutes(90));
    }
}
