//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy / Idle Time | CPU time running processes / not running |
//! | CPU Utilization | 100 × busy / makespan |
//! | Context Switches | Changes of running process between slices |
//! | Throughput | Processes completed per tick of makespan |
//! | Avg Waiting / Turnaround / Response | Means over all processes |

use serde::{Deserialize, Serialize};

use crate::models::{mean, ScheduleResult};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    pub makespan: i64,
    pub busy_time: i64,
    pub idle_time: i64,
    /// Percentage (0.0..=100.0). Zero for an empty schedule.
    pub cpu_utilization: f64,
    pub context_switches: usize,
    /// Processes per tick. `None` for an empty schedule.
    pub throughput: Option<f64>,
    pub average_waiting_time: Option<f64>,
    pub average_turnaround_time: Option<f64>,
    pub average_response_time: Option<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();
        let count = result.metrics.len();

        let cpu_utilization = if makespan > 0 {
            100.0 * busy_time as f64 / makespan as f64
        } else {
            0.0
        };

        let throughput = if makespan > 0 && count > 0 {
            Some(count as f64 / makespan as f64)
        } else {
            None
        };

        let average_response_time = mean(result.metrics.iter().map(|m| m.response_time));

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            context_switches: result.context_switches(),
            throughput,
            average_waiting_time: result.average_waiting_time,
            average_turnaround_time: result.average_turnaround_time,
            average_response_time,
        }
    }
}
