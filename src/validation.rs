//! Input validation for the catalogs.
//!
//! Checks structural integrity of jobs, machines, and materials before
//! scheduling. Detects:
//! - Duplicate IDs
//! - Dangling material references
//! - Operations no machine performs
//! - Nonsensical numeric parameters (negative units, non-positive
//!   input speed, negative lead days or maintenance hours)
//!
//! These are pre-flight diagnostics; the scheduling run performs its own
//! lookups and raises `ScheduleError` on the first failure regardless.

use std::collections::HashSet;

use crate::models::{Job, Machine, Material};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two catalog entries share the same ID.
    DuplicateId,
    /// A job references a material with no catalog entry.
    UnknownMaterialReference,
    /// A job requires an operation no machine performs.
    UnassignableOperation,
    /// A job has a negative unit count.
    NegativeUnits,
    /// A machine's input speed is zero or negative.
    NonPositiveInputSpeed,
    /// A day or hour parameter is negative.
    NegativeTimeParameter,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input catalogs for a scheduling run.
///
/// Checks:
/// 1. No duplicate job, machine, or material IDs
/// 2. Every job's material exists in the catalog
/// 3. Every required operation is performed by some machine
/// 4. No negative unit counts
/// 5. Every machine has a positive input speed
/// 6. No negative maintenance, delivery, or storage parameters
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], machines: &[Machine], materials: &[Material]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut machine_ids = HashSet::new();
    let mut operations = HashSet::new();
    for m in machines {
        if !machine_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate machine ID: {}", m.id),
            ));
        }
        operations.insert(m.operation.as_str());

        if m.input_speed <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveInputSpeed,
                format!(
                    "Machine '{}' has non-positive input speed {}",
                    m.id, m.input_speed
                ),
            ));
        }
        if m.maintenance_interval_hours < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTimeParameter,
                format!(
                    "Machine '{}' has negative maintenance interval {}",
                    m.id, m.maintenance_interval_hours
                ),
            ));
        }
    }

    let mut material_ids = HashSet::new();
    for m in materials {
        if !material_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate material ID: {}", m.id),
            ));
        }
        if m.delivery_days < 0 || m.min_storage_days < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTimeParameter,
                format!(
                    "Material '{}' has negative lead parameters (delivery {}, storage {})",
                    m.id, m.delivery_days, m.min_storage_days
                ),
            ));
        }
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if !material_ids.contains(job.material_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownMaterialReference,
                format!(
                    "Job '{}' references unknown material '{}'",
                    job.id, job.material_id
                ),
            ));
        }

        for operation in &job.operations {
            if !operations.contains(operation.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnassignableOperation,
                    format!(
                        "Job '{}' requires operation '{}' that no machine performs",
                        job.id, operation
                    ),
                ));
            }
        }

        // A negative count would inflate stock through the draw path
        if job.units < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeUnits,
                format!("Job '{}' has negative unit count {}", job.id, job.units),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
