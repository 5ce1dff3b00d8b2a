//! Scheduling disciplines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CPU scheduling discipline.
///
/// Closed set; the scheduler dispatches on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Priority (non-preemptive).
    Priority,
    /// Round-Robin with the input quantum.
    #[serde(rename = "rr")]
    RoundRobin,
    /// One Round-Robin turn per process, then shortest remaining first.
    #[serde(rename = "irr")]
    ImprovedRoundRobin,
}

impl Discipline {
    /// All disciplines in report order.
    pub const ALL: [Discipline; 5] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::Priority,
        Discipline::RoundRobin,
        Discipline::ImprovedRoundRobin,
    ];

    /// Full display name used as the report section title.
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First-Come, First-Served (FCFS)",
            Discipline::Sjf => "Shortest Job First (SJF)",
            Discipline::Priority => "Priority Scheduling",
            Discipline::RoundRobin => "Round Robin (RR)",
            Discipline::ImprovedRoundRobin => "Improved Round Robin (IRR)",
        }
    }

    /// Short tag accepted on the command line and in config files.
    pub fn tag(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "fcfs",
            Discipline::Sjf => "sjf",
            Discipline::Priority => "priority",
            Discipline::RoundRobin => "rr",
            Discipline::ImprovedRoundRobin => "irr",
        }
    }

    /// Whether a running process can be preempted.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Discipline::RoundRobin | Discipline::ImprovedRoundRobin
        )
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Discipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Discipline::ALL
            .iter()
            .copied()
            .find(|d| d.tag() == tag)
            .or(match tag.as_str() {
                "round-robin" | "roundrobin" => Some(Discipline::RoundRobin),
                "improved-round-robin" => Some(Discipline::ImprovedRoundRobin),
                _ => None,
            })
            .ok_or_else(|| format!("unknown discipline '{s}'"))
    }
}
