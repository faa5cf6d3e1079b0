//! Scheduling run errors.
//!
//! Every error aborts the entire scheduling run: there is no local
//! recovery, no partial schedule, no retry. Messages identify the
//! offending job, operation, or material.

use thiserror::Error;

/// An error that aborts a scheduling run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A job references a material with no catalog entry.
    #[error("no material '{material}' found for job '{job}'")]
    UnknownMaterial {
        /// Job whose material lookup failed.
        job: String,
        /// The unresolved material ID.
        material: String,
    },

    /// A job requires an operation no machine performs.
    #[error("no machine found for operation '{operation}' (job '{job}')")]
    NoMachineForOperation {
        /// Job whose operation lookup failed.
        job: String,
        /// The unresolved operation name.
        operation: String,
    },

    /// A material draw drove remaining stock negative.
    ///
    /// The ledger decrements before checking, so `remaining` is the
    /// post-decrement (negative) stock left behind by the failed draw.
    #[error("not enough material '{material}' for job '{job}': requested {requested}, remaining {remaining}")]
    MaterialShortage {
        /// Job whose draw failed.
        job: String,
        /// The depleted material ID.
        material: String,
        /// Units requested by the failed draw.
        requested: i64,
        /// Stock after the decrement (negative).
        remaining: i64,
    },

    /// A priority label outside {High, Medium, Low}.
    #[error("unknown priority label '{0}' (expected High, Medium, or Low)")]
    UnknownPriority(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortage_message_names_offenders() {
        let err = ScheduleError::MaterialShortage {
            job: "J1".into(),
            material: "Steel".into(),
            requested: 10,
            remaining: -5,
        };
        let msg = err.to_string();
        assert!(msg.contains("Steel"));
        assert!(msg.contains("J1"));
        assert!(msg.contains("-5"));
    }

    #[test]
    fn test_unknown_material_message() {
        let err = ScheduleError::UnknownMaterial {
            job: "J2".into(),
            material: "Titanium".into(),
        };
        assert_eq!(
            err.to_string(),
            "no material 'Titanium' found for job 'J2'"
        );
    }
}
