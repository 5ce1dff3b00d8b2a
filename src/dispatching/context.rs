//! Scheduling context for dispatching rule evaluation.

use std::collections::HashMap;

/// Runtime simulation state passed to dispatching rules.
///
/// Holds the simulation clock and the remaining burst of every process
/// that has been admitted to the run. Reset per discipline run.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
    /// Remaining CPU work per process (process_id → ticks).
    pub remaining_burst: HashMap<usize, i64>,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets remaining work for a process.
    pub fn with_remaining_burst(mut self, process_id: usize, ticks: i64) -> Self {
        self.remaining_burst.insert(process_id, ticks);
        self
    }

    /// Remaining work for a process, if tracked.
    pub fn remaining(&self, process_id: usize) -> Option<i64> {
        self.remaining_burst.get(&process_id).copied()
    }

    /// Charges `ticks` of CPU to a process and returns what is left.
    pub fn consume(&mut self, process_id: usize, ticks: i64) -> i64 {
        let left = self.remaining_burst.entry(process_id).or_insert(0);
        *left -= ticks;
        *left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume() {
        let mut ctx = SchedulingContext::at_time(0).with_remaining_burst(1, 5);
        assert_eq!(ctx.consume(1, 2), 3);
        assert_eq!(ctx.remaining(1), Some(3));
        assert_eq!(ctx.remaining(2), None);
    }
}
