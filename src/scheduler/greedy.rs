//! Greedy priority-driven scheduler.
//!
//! # Algorithm
//!
//! 1. Sequence jobs by priority rank, then deadline.
//! 2. For each job, resolve its material and compute a job-level ready
//!    time: `max(material ready time, job start)`.
//! 3. For each operation in listed order, resolve the machine that
//!    performs it, ask the ledger for the earliest usable slot, draw the
//!    job's unit count from the material stock, emit the record, and
//!    book the machine.
//!
//! The job ready time is held constant across that job's operations —
//! only machine availability pushes individual starts later, so a job's
//! operations may overlap on different machines. There is no
//! backtracking: the first error aborts the run and everything already
//! committed stays committed.
//!
//! # Complexity
//! O(j * o * m) where j=jobs, o=operations/job, m=machines.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::ScheduleError;
use crate::ledger::ResourceLedger;
use crate::models::{Job, Machine, Material, Schedule, ScheduledOperation};
use crate::sequencing::JobSequencer;

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Jobs to schedule.
    pub jobs: Vec<Job>,
    /// Machine catalog.
    pub machines: Vec<Machine>,
    /// Material catalog.
    pub materials: Vec<Material>,
    /// Schedule horizon start: baseline for machine free time and
    /// material ready time.
    pub horizon_start: NaiveDateTime,
}

impl ScheduleRequest {
    /// Creates a new schedule request starting at the Unix epoch.
    pub fn new(jobs: Vec<Job>, machines: Vec<Machine>, materials: Vec<Material>) -> Self {
        Self {
            jobs,
            machines,
            materials,
            horizon_start: NaiveDateTime::default(),
        }
    }

    /// Sets the horizon start.
    pub fn with_horizon_start(mut self, horizon_start: NaiveDateTime) -> Self {
        self.horizon_start = horizon_start;
        self
    }
}

/// Greedy priority-driven scheduler.
///
/// Plans jobs strictly sequentially in sequencer order, one operation at
/// a time, against a fresh [`ResourceLedger`] per run. Greedy heuristic,
/// not a solver: no lookahead, no re-planning on infeasibility.
///
/// # Example
///
/// ```
/// use shopfloor::scheduler::{GreedyScheduler, ScheduleRequest};
/// use shopfloor::models::{Job, Machine, Material, Priority};
///
/// let machines = vec![Machine::new("M1", "Op1").with_input_speed(5.0).with_cost_per_unit(50.0)];
/// let materials = vec![Material::new("Steel").with_available_quantity(100)];
/// let jobs = vec![
///     Job::new("J1")
///         .with_priority(Priority::High)
///         .with_operation("Op1")
///         .with_material("Steel")
///         .with_units(10),
/// ];
/// let request = ScheduleRequest::new(jobs, machines, materials);
///
/// let schedule = GreedyScheduler::new().schedule_request(&request).unwrap();
/// assert_eq!(schedule.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    sequencer: JobSequencer,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default priority-then-deadline
    /// sequencing policy.
    pub fn new() -> Self {
        Self {
            sequencer: JobSequencer::priority_then_deadline(),
        }
    }

    /// Replaces the sequencing policy.
    pub fn with_sequencer(mut self, sequencer: JobSequencer) -> Self {
        self.sequencer = sequencer;
        self
    }

    /// Schedules jobs on machines, consuming materials.
    ///
    /// Constructs a fresh ledger seeded at `horizon_start`, sequences the
    /// jobs, and plans them in order. Returns the complete schedule or
    /// the first error; there is no partial result on failure.
    pub fn schedule(
        &self,
        jobs: &[Job],
        machines: &[Machine],
        materials: &[Material],
        horizon_start: NaiveDateTime,
    ) -> Result<Schedule, ScheduleError> {
        let mut ledger = ResourceLedger::new(horizon_start, machines, materials);
        let mut schedule = Schedule::new();

        for &job_idx in &self.sequencer.sort_indices(jobs) {
            self.plan_job(&jobs[job_idx], machines, materials, &mut ledger, &mut schedule)?;
        }

        Ok(schedule)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<Schedule, ScheduleError> {
        self.schedule(
            &request.jobs,
            &request.machines,
            &request.materials,
            request.horizon_start,
        )
    }

    /// Plans one job's operations in listed order.
    fn plan_job(
        &self,
        job: &Job,
        machines: &[Machine],
        materials: &[Material],
        ledger: &mut ResourceLedger,
        schedule: &mut Schedule,
    ) -> Result<(), ScheduleError> {
        let material = materials
            .iter()
            .find(|m| m.id == job.material_id)
            .ok_or_else(|| ScheduleError::UnknownMaterial {
                job: job.id.clone(),
                material: job.material_id.clone(),
            })?;

        // Fixed for the whole job: prior operations' end times do not
        // advance it, only machine availability can push starts later.
        let job_ready = ledger.material_ready_time(material).max(job.start);

        for operation in &job.operations {
            // First machine declaring the operation wins
            let machine = machines
                .iter()
                .find(|m| m.operation == *operation)
                .ok_or_else(|| ScheduleError::NoMachineForOperation {
                    job: job.id.clone(),
                    operation: operation.clone(),
                })?;

            let run = machine.processing_time(job.units);
            let slot = ledger.earliest_machine_start(machine, job_ready);
            let end = slot.start + run;

            // Stock is drawn per operation with the job-level unit count
            ledger.draw_material(material, job.units, &job.id)?;

            debug!(
                job = %job.id,
                operation = %operation,
                machine = %machine.id,
                start = %slot.start,
                end = %end,
                "operation planned"
            );

            schedule.push(ScheduledOperation {
                job_id: job.id.clone(),
                machine_id: machine.id.clone(),
                operation: operation.clone(),
                units: job.units,
                start: slot.start,
                end,
                cost: machine.operation_cost(job.units),
            });

            ledger.commit_machine_usage(machine, slot.start, run, slot.resets_runtime);
        }

        Ok(())
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new()
    }
}
