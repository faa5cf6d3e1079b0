//! Schedule quality metrics (KPIs).
//!
//! Computes standard performance indicators from a completed schedule
//! and its input jobs. Reporting only — deadlines stay soft; a tardy
//! schedule is measured, never rejected.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Horizon start → latest completion |
//! | Total Cost | Sum of operation costs |
//! | Total Tardiness | Sum of max(0, completion - deadline) |
//! | Maximum Tardiness | Largest single delay |
//! | On-Time Rate | Fraction of jobs meeting deadlines |
//! | Avg Utilization | Mean machine busyness over the makespan |
//! | Avg Flow Time | Mean time from job start to completion |

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};

use crate::models::{Job, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Makespan: horizon start to latest completion.
    pub makespan: Duration,
    /// Sum of operation costs.
    pub total_cost: f64,
    /// Cost booked per machine.
    pub cost_by_machine: HashMap<String, f64>,
    /// Sum of tardiness across all jobs.
    pub total_tardiness: Duration,
    /// Maximum tardiness of any single job.
    pub max_tardiness: Duration,
    /// Fraction of jobs completing by their deadline (0.0..1.0).
    pub on_time_rate: f64,
    /// Per-machine utilization over the makespan.
    pub utilization_by_machine: HashMap<String, f64>,
    /// Average machine utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Average flow time: mean(completion - job start).
    pub avg_flow_time: Duration,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input jobs.
    ///
    /// Jobs with no scheduled operations are skipped; an empty schedule
    /// reports zero makespan and a 1.0 on-time rate.
    pub fn calculate(schedule: &Schedule, jobs: &[Job], horizon_start: NaiveDateTime) -> Self {
        let makespan = schedule
            .makespan_end()
            .map(|end| end - horizon_start)
            .unwrap_or_else(Duration::zero);

        let mut total_tardiness = Duration::zero();
        let mut max_tardiness = Duration::zero();
        let mut on_time_count: usize = 0;
        let mut total_flow_ms: i64 = 0;
        let mut counted_jobs: usize = 0;

        for job in jobs {
            if let Some(completion) = schedule.job_completion_time(&job.id) {
                counted_jobs += 1;
                total_flow_ms += (completion - job.start).num_milliseconds();

                if completion > job.deadline {
                    let tardiness = completion - job.deadline;
                    total_tardiness = total_tardiness + tardiness;
                    max_tardiness = max_tardiness.max(tardiness);
                } else {
                    on_time_count += 1;
                }
            }
        }

        let mut cost_by_machine: HashMap<String, f64> = HashMap::new();
        let mut busy_by_machine: HashMap<String, i64> = HashMap::new();
        for op in schedule.operations() {
            *cost_by_machine.entry(op.machine_id.clone()).or_insert(0.0) += op.cost;
            *busy_by_machine.entry(op.machine_id.clone()).or_insert(0) +=
                op.duration().num_milliseconds();
        }

        let makespan_ms = makespan.num_milliseconds();
        let utilization_by_machine: HashMap<String, f64> = if makespan_ms > 0 {
            busy_by_machine
                .into_iter()
                .map(|(id, busy)| (id, busy as f64 / makespan_ms as f64))
                .collect()
        } else {
            HashMap::new()
        };

        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_machine.values().sum();
            sum / utilization_by_machine.len() as f64
        };

        let on_time_rate = if counted_jobs == 0 {
            1.0
        } else {
            on_time_count as f64 / counted_jobs as f64
        };

        let avg_flow_time = if counted_jobs == 0 {
            Duration::zero()
        } else {
            Duration::milliseconds(total_flow_ms / counted_jobs as i64)
        };

        Self {
            makespan,
            total_cost: schedule.total_cost(),
            cost_by_machine,
            total_tardiness,
            max_tardiness,
            on_time_rate,
            utilization_by_machine,
            avg_utilization,
            avg_flow_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, ScheduledOperation};

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn horizon() -> NaiveDateTime {
        dt("2024-12-10 08:00")
    }

    fn op(job_id: &str, machine_id: &str, start: &str, end: &str, cost: f64) -> ScheduledOperation {
        ScheduledOperation {
            job_id: job_id.into(),
            machine_id: machine_id.into(),
            operation: "Op1".into(),
            units: 10,
            start: dt(start),
            end: dt(end),
            cost,
        }
    }

    fn make_job(id: &str, start: &str, deadline: &str) -> Job {
        Job::new(id)
            .with_priority(Priority::Medium)
            .with_start(dt(start))
            .with_deadline(dt(deadline))
    }

    #[test]
    fn test_kpi_basic() {
        let jobs = vec![
            make_job("J1", "2024-12-10 08:00", "2024-12-20 17:00"),
            make_job("J2", "2024-12-10 08:00", "2024-12-20 17:00"),
        ];
        let mut schedule = Schedule::new();
        schedule.push(op("J1", "M1", "2024-12-10 08:00", "2024-12-10 10:00", 500.0));
        schedule.push(op("J2", "M1", "2024-12-10 10:00", "2024-12-10 12:00", 700.0));

        let kpi = ScheduleKpi::calculate(&schedule, &jobs, horizon());
        assert_eq!(kpi.makespan, Duration::hours(4));
        assert!((kpi.total_cost - 1200.0).abs() < 1e-10);
        assert_eq!(kpi.total_tardiness, Duration::zero());
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        // J1 flow 2h, J2 flow 4h → mean 3h
        assert_eq!(kpi.avg_flow_time, Duration::hours(3));
    }

    #[test]
    fn test_kpi_tardiness() {
        let jobs = vec![
            make_job("J1", "2024-12-10 08:00", "2024-12-10 09:00"), // due 09:00, done 10:00
            make_job("J2", "2024-12-10 08:00", "2024-12-20 17:00"), // on time
        ];
        let mut schedule = Schedule::new();
        schedule.push(op("J1", "M1", "2024-12-10 08:00", "2024-12-10 10:00", 500.0));
        schedule.push(op("J2", "M1", "2024-12-10 10:00", "2024-12-10 11:00", 700.0));

        let kpi = ScheduleKpi::calculate(&schedule, &jobs, horizon());
        assert_eq!(kpi.total_tardiness, Duration::hours(1));
        assert_eq!(kpi.max_tardiness, Duration::hours(1));
        assert!((kpi.on_time_rate - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_cost_and_utilization_by_machine() {
        let jobs = vec![
            make_job("J1", "2024-12-10 08:00", "2024-12-20 17:00"),
            make_job("J2", "2024-12-10 08:00", "2024-12-20 17:00"),
        ];
        let mut schedule = Schedule::new();
        schedule.push(op("J1", "M1", "2024-12-10 08:00", "2024-12-10 12:00", 500.0));
        schedule.push(op("J2", "M2", "2024-12-10 08:00", "2024-12-10 10:00", 700.0));

        let kpi = ScheduleKpi::calculate(&schedule, &jobs, horizon());
        // Makespan 4h: M1 busy 4h → 1.0, M2 busy 2h → 0.5
        assert!((kpi.utilization_by_machine["M1"] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_machine["M2"] - 0.5).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.75).abs() < 1e-10);
        assert!((kpi.cost_by_machine["M1"] - 500.0).abs() < 1e-10);
        assert!((kpi.cost_by_machine["M2"] - 700.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &[], horizon());
        assert_eq!(kpi.makespan, Duration::zero());
        assert!((kpi.total_cost - 0.0).abs() < 1e-10);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
        assert_eq!(kpi.avg_flow_time, Duration::zero());
    }

    #[test]
    fn test_kpi_unscheduled_job_skipped() {
        let jobs = vec![
            make_job("J1", "2024-12-10 08:00", "2024-12-20 17:00"),
            make_job("J9", "2024-12-10 08:00", "2024-12-10 08:01"), // never scheduled
        ];
        let mut schedule = Schedule::new();
        schedule.push(op("J1", "M1", "2024-12-10 08:00", "2024-12-10 10:00", 500.0));

        let kpi = ScheduleKpi::calculate(&schedule, &jobs, horizon());
        // J9 contributes neither tardiness nor flow time
        assert_eq!(kpi.total_tardiness, Duration::zero());
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
    }
}
