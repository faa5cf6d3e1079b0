//! Resource bookkeeping for one scheduling run.
//!
//! The ledger owns all mutable scheduling state: per-machine free time
//! and runtime-since-maintenance, per-material ready-time baseline and
//! remaining stock. It is constructed fresh per run and passed by
//! mutable reference to the planner — catalog entries are never mutated.
//!
//! All mutations are plain single-threaded state changes; a run owns its
//! ledger exclusively.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Machine, Material};

/// The earliest usable slot on a machine, as answered by
/// [`ResourceLedger::earliest_machine_start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineSlot {
    /// Earliest start, after any maintenance pause.
    pub start: NaiveDateTime,
    /// Whether the runtime counter was reset by a maintenance pause.
    /// Must be passed through to [`ResourceLedger::commit_machine_usage`].
    pub resets_runtime: bool,
}

/// Mutable resource state for one scheduling run.
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    horizon_start: NaiveDateTime,
    machine_free: HashMap<String, NaiveDateTime>,
    machine_runtime: HashMap<String, Duration>,
    material_baseline: HashMap<String, NaiveDateTime>,
    material_stock: HashMap<String, i64>,
}

impl ResourceLedger {
    /// Seeds ledger state from the catalogs.
    ///
    /// Every machine starts free at the horizon start with zero runtime;
    /// every material gets its ready-time baseline fixed to the horizon
    /// start and its stock copied from the catalog.
    pub fn new(
        horizon_start: NaiveDateTime,
        machines: &[Machine],
        materials: &[Material],
    ) -> Self {
        let machine_free = machines
            .iter()
            .map(|m| (m.id.clone(), horizon_start))
            .collect();
        let machine_runtime = machines
            .iter()
            .map(|m| (m.id.clone(), Duration::zero()))
            .collect();
        let material_baseline = materials
            .iter()
            .map(|m| (m.id.clone(), horizon_start))
            .collect();
        let material_stock = materials
            .iter()
            .map(|m| (m.id.clone(), m.available_quantity))
            .collect();

        Self {
            horizon_start,
            machine_free,
            machine_runtime,
            material_baseline,
            material_stock,
        }
    }

    /// The schedule horizon start this ledger was seeded with.
    pub fn horizon_start(&self) -> NaiveDateTime {
        self.horizon_start
    }

    /// Earliest time newly ordered stock of a material is usable:
    /// baseline plus replenishment lead.
    ///
    /// The baseline is fixed at construction and never advanced, so this
    /// returns the same instant on every call.
    pub fn material_ready_time(&self, material: &Material) -> NaiveDateTime {
        let baseline = self
            .material_baseline
            .get(&material.id)
            .copied()
            .unwrap_or(self.horizon_start);
        baseline + material.replenishment_lead()
    }

    /// Draws `units` of a material, returning the remaining stock.
    ///
    /// Two-step contract: the stock is decremented first, then checked.
    /// A failed draw leaves the ledger with the negative stock it
    /// reports in the error.
    pub fn draw_material(
        &mut self,
        material: &Material,
        units: i64,
        job_id: &str,
    ) -> Result<i64, ScheduleError> {
        let stock = self
            .material_stock
            .entry(material.id.clone())
            .or_insert(material.available_quantity);
        *stock -= units;
        let remaining = *stock;

        if remaining < 0 {
            return Err(ScheduleError::MaterialShortage {
                job: job_id.to_string(),
                material: material.id.clone(),
                requested: units,
                remaining,
            });
        }

        debug!(
            material = %material.id,
            job = %job_id,
            units,
            remaining,
            "material drawn"
        );
        Ok(remaining)
    }

    /// Earliest usable start on a machine for a candidate start time.
    ///
    /// When accumulated runtime has reached the machine's maintenance
    /// interval, a pause of that length is inserted after the machine's
    /// free time and the runtime counter resets to zero. The check and
    /// the reset happen in the same call.
    pub fn earliest_machine_start(
        &mut self,
        machine: &Machine,
        candidate: NaiveDateTime,
    ) -> MachineSlot {
        let free = self
            .machine_free
            .get(&machine.id)
            .copied()
            .unwrap_or(self.horizon_start);
        let runtime = self
            .machine_runtime
            .get(&machine.id)
            .copied()
            .unwrap_or_else(Duration::zero);

        if runtime >= machine.maintenance_interval() {
            debug!(
                machine = %machine.id,
                runtime_min = runtime.num_minutes(),
                "maintenance pause inserted, runtime reset"
            );
            self.machine_runtime
                .insert(machine.id.clone(), Duration::zero());
            MachineSlot {
                start: candidate.max(free + machine.maintenance_interval()),
                resets_runtime: true,
            }
        } else {
            MachineSlot {
                start: candidate.max(free),
                resets_runtime: false,
            }
        }
    }

    /// Books an operation on a machine.
    ///
    /// Advances the machine's free time to `start + run` and accumulates
    /// the runtime counter (restarting from the run length when the slot
    /// carried a maintenance reset).
    pub fn commit_machine_usage(
        &mut self,
        machine: &Machine,
        start: NaiveDateTime,
        run: Duration,
        resets_runtime: bool,
    ) {
        self.machine_free.insert(machine.id.clone(), start + run);
        let runtime = self
            .machine_runtime
            .entry(machine.id.clone())
            .or_insert_with(Duration::zero);
        *runtime = if resets_runtime { run } else { *runtime + run };
    }

    /// Earliest time a machine can start new work.
    pub fn machine_free_time(&self, machine_id: &str) -> Option<NaiveDateTime> {
        self.machine_free.get(machine_id).copied()
    }

    /// Accumulated busy runtime since the machine's last maintenance reset.
    pub fn runtime_since_maintenance(&self, machine_id: &str) -> Option<Duration> {
        self.machine_runtime.get(machine_id).copied()
    }

    /// Remaining stock of a material.
    pub fn remaining_stock(&self, material_id: &str) -> Option<i64> {
        self.material_stock.get(material_id).copied()
    }
}
