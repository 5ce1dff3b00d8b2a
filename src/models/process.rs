//! Process model.
//!
//! A process is a unit of CPU work submitted to the simulator: it becomes
//! runnable at its arrival time and needs `burst_time` ticks of CPU.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The report labels them as milliseconds.

use serde::{Deserialize, Serialize};

/// A process descriptor.
///
/// Immutable for the duration of a simulation run. Per-run mutable state
/// (remaining burst) lives inside the scheduler, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 1-based position in input order. Used for output ordering and
    /// as the final tie-breaker.
    pub id: usize,
    /// Instant at which the process becomes runnable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority. Direction is fixed by
    /// [`PriorityOrder`](crate::dispatching::PriorityOrder).
    pub priority: i32,
}

impl Process {
    /// Creates a process with the given id, arrival and burst times.
    pub fn new(id: usize, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Display label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}

/// A process set plus the Round-Robin quantum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingInput {
    /// Processes in input order (`processes[i].id == i + 1`).
    pub processes: Vec<Process>,
    /// Maximum contiguous CPU time per Round-Robin turn.
    pub quantum_time: i64,
}

impl SchedulingInput {
    /// Creates an input with no processes.
    pub fn new(quantum_time: i64) -> Self {
        Self {
            processes: Vec::new(),
            quantum_time,
        }
    }

    /// Appends a process built from `(arrival, burst, priority)`,
    /// assigning the next id in input order.
    pub fn with_process(mut self, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        let id = self.processes.len() + 1;
        self.processes
            .push(Process::new(id, arrival_time, burst_time).with_priority(priority));
        self
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether there are no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Looks up a process by id.
    pub fn process(&self, id: usize) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_builder_assigns_ids() {
        let input = SchedulingInput::new(2)
            .with_process(0, 5, 2)
            .with_process(1, 3, 1);

        assert_eq!(input.len(), 2);
        assert_eq!(input.processes[0].id, 1);
        assert_eq!(input.processes[1].id, 2);
        assert_eq!(input.processes[1].priority, 1);
        assert_eq!(input.total_burst(), 8);
        assert_eq!(input.process(2).map(|p| p.arrival_time), Some(1));
        assert!(input.process(3).is_none());
    }

    #[test]
    fn test_empty_input() {
        let input = SchedulingInput::new(4);
        assert!(input.is_empty());
        assert_eq!(input.total_burst(), 0);
    }

    #[test]
    fn test_label() {
        assert_eq!(Process::new(7, 0, 1).label(), "P7");
    }
}
