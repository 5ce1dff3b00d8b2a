//! Schedule (result) model.
//!
//! A schedule result is the timeline produced by one discipline over one
//! input, together with the per-process metrics derived from it.
//!
//! # Idle time
//! Idle CPU time is implicit: slices only exist for processes, and gaps
//! between consecutive slices (or between t=0 and the first slice) are idle.
//! [`ScheduleResult::idle_gaps`] recovers them.

use serde::{Deserialize, Serialize};

use super::{Discipline, SchedulingInput};
use crate::error::{Result, ScheduleError};

/// One contiguous span of CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub process_id: usize,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

/// Timing metrics for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub process_id: usize,
    /// End of the process's last slice.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// Start of the process's first slice minus its arrival.
    pub response_time: i64,
}

/// The outcome of running one discipline over one input.
///
/// Built once by the scheduler and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub discipline: Discipline,
    /// Time-ordered execution slices.
    pub timeline: Vec<ExecutionSlice>,
    /// Per-process metrics in input order.
    pub metrics: Vec<ProcessMetrics>,
    /// Mean waiting time; `None` when there are no processes.
    pub average_waiting_time: Option<f64>,
    /// Mean turnaround time; `None` when there are no processes.
    pub average_turnaround_time: Option<f64>,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(process_id: usize, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl ScheduleResult {
    /// Derives metrics from a finished timeline.
    ///
    /// Fails with [`ScheduleError::InvariantViolation`] if some process never
    /// ran. Deeper timeline checks live in
    /// [`verify_schedule`](crate::validation::verify_schedule).
    pub fn from_timeline(
        discipline: Discipline,
        input: &SchedulingInput,
        timeline: Vec<ExecutionSlice>,
    ) -> Result<Self> {
        let mut metrics = Vec::with_capacity(input.len());

        for process in &input.processes {
            let mut own = timeline.iter().filter(|s| s.process_id == process.id);
            let first = own.next().ok_or_else(|| {
                ScheduleError::invariant(discipline, format!("{} never ran", process.label()))
            })?;
            let completion = own.last().unwrap_or(first).end_time;
            let turnaround = completion - process.arrival_time;

            metrics.push(ProcessMetrics {
                process_id: process.id,
                completion_time: completion,
                turnaround_time: turnaround,
                waiting_time: turnaround - process.burst_time,
                response_time: first.start_time - process.arrival_time,
            });
        }

        let average_waiting_time = mean(metrics.iter().map(|m| m.waiting_time));
        let average_turnaround_time = mean(metrics.iter().map(|m| m.turnaround_time));

        Ok(Self {
            discipline,
            timeline,
            metrics,
            average_waiting_time,
            average_turnaround_time,
        })
    }

    /// Makespan: latest slice end (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Total CPU time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(|s| s.duration()).sum()
    }

    /// Slices owned by a process, in time order.
    pub fn slices_for(&self, process_id: usize) -> Vec<&ExecutionSlice> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Metrics for a process.
    pub fn metrics_for(&self, process_id: usize) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.process_id == process_id)
    }

    /// Completion time for a process.
    pub fn completion_time(&self, process_id: usize) -> Option<i64> {
        self.metrics_for(process_id).map(|m| m.completion_time)
    }

    /// Idle `[start, end)` spans between t=0 and the makespan.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for slice in &self.timeline {
            if slice.start_time > cursor {
                gaps.push((cursor, slice.start_time));
            }
            cursor = cursor.max(slice.end_time);
        }
        gaps
    }

    /// Number of times the CPU switched from one process to a different one.
    pub fn context_switches(&self) -> usize {
        self.timeline
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

/// Mean of tick counts; `None` when empty.
///
/// Sums in `i128`: each value fits the validated horizon but their sum
/// over many processes need not fit `i64`.
pub(crate) fn mean(values: impl Iterator<Item = i64>) -> Option<f64> {
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| (s + i128::from(v), c + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
