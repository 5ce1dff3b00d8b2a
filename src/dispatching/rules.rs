//! Built-in pick rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{RuleScore, SchedulingContext};
use crate::models::Process;

/// Direction of the bare integer priority carried by each process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrder {
    /// Smaller value runs first (e.g. 1 beats 3).
    #[default]
    LowerFirst,
    /// Larger value runs first.
    HigherFirst,
}

impl fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityOrder::LowerFirst => f.write_str("lower value first"),
            PriorityOrder::HigherFirst => f.write_str("higher value first"),
        }
    }
}

impl FromStr for PriorityOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "lower_first" | "low" => Ok(PriorityOrder::LowerFirst),
            "higher" | "higher_first" | "high" => Ok(PriorityOrder::HigherFirst),
            other => Err(format!("unknown priority order '{other}'")),
        }
    }
}

/// A dispatching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Earliest arrival first.
    ArrivalTime,
    /// Smallest remaining burst first. Falls back to the full burst
    /// when the context does not track the process.
    RemainingBurst,
    /// Best priority value first, per the given convention.
    Priority(PriorityOrder),
}

impl Rule {
    /// Scores a process; lower runs first.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
        match self {
            Rule::ArrivalTime => process.arrival_time,
            Rule::RemainingBurst => context
                .remaining(process.id)
                .unwrap_or(process.burst_time),
            Rule::Priority(PriorityOrder::LowerFirst) => i64::from(process.priority),
            Rule::Priority(PriorityOrder::HigherFirst) => -i64::from(process.priority),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival() {
        let ctx = SchedulingContext::at_time(10);
        let early = Process::new(2, 1, 5);
        let late = Process::new(1, 4, 5);
        assert!(
            Rule::ArrivalTime.evaluate(&early, &ctx) < Rule::ArrivalTime.evaluate(&late, &ctx)
        );
    }

    #[test]
    fn test_remaining_burst_with_context() {
        let ctx = SchedulingContext::at_time(0)
            .with_remaining_burst(1, 1)
            .with_remaining_burst(2, 4);
        let almost_done = Process::new(1, 0, 10);
        let lots_left = Process::new(2, 0, 10);
        assert!(
            Rule::RemainingBurst.evaluate(&almost_done, &ctx)
                < Rule::RemainingBurst.evaluate(&lots_left, &ctx)
        );
    }

    #[test]
    fn test_remaining_burst_fallback() {
        let ctx = SchedulingContext::at_time(0);
        assert_eq!(Rule::RemainingBurst.evaluate(&Process::new(1, 0, 7), &ctx), 7);
    }

    #[test]
    fn test_priority_directions() {
        let ctx = SchedulingContext::at_time(0);
        let one = Process::new(1, 0, 1).with_priority(1);
        let three = Process::new(2, 0, 1).with_priority(3);

        let lower = Rule::Priority(PriorityOrder::LowerFirst);
        assert!(lower.evaluate(&one, &ctx) < lower.evaluate(&three, &ctx));

        let higher = Rule::Priority(PriorityOrder::HigherFirst);
        assert!(higher.evaluate(&three, &ctx) < higher.evaluate(&one, &ctx));
    }

    #[test]
    fn test_priority_order_parse() {
        assert_eq!("higher".parse::<PriorityOrder>(), Ok(PriorityOrder::HigherFirst));
        assert_eq!("LOWER_FIRST".parse::<PriorityOrder>(), Ok(PriorityOrder::LowerFirst));
        assert!("sideways".parse::<PriorityOrder>().is_err());
    }
}
