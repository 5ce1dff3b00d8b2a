//! Engine configuration.
//!
//! Configuration comes from defaults, optionally replaced field by field
//! by a JSON file. The binary layers `CPUSCHED_*` environment variables
//! and command-line flags on top.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dispatching::PriorityOrder;
use crate::error::{Result, ScheduleError};
use crate::models::Discipline;

/// Which disciplines to run and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Disciplines to run, in report order.
    pub disciplines: Vec<Discipline>,
    /// Direction of the process priority value.
    pub priority_order: PriorityOrder,
    /// Run disciplines concurrently. Results keep the configured order.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            disciplines: Discipline::ALL.to_vec(),
            priority_order: PriorityOrder::LowerFirst,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Default configuration: every discipline, lower priority value first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only Round-Robin, the reading where the quantum selects the discipline.
    pub fn round_robin_only() -> Self {
        Self::default().with_disciplines(vec![Discipline::RoundRobin])
    }

    /// Sets the disciplines to run.
    pub fn with_disciplines(mut self, disciplines: Vec<Discipline>) -> Self {
        self.disciplines = disciplines;
        self
    }

    /// Sets the priority direction.
    pub fn with_priority_order(mut self, order: PriorityOrder) -> Self {
        self.priority_order = order;
        self
    }

    /// Enables or disables concurrent discipline runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parses a JSON configuration. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks that at least one discipline is selected and none repeats.
    pub fn validate(&self) -> Result<()> {
        if self.disciplines.is_empty() {
            return Err(ScheduleError::Config("no disciplines selected".into()));
        }
        for (i, d) in self.disciplines.iter().enumerate() {
            if self.disciplines[..i].contains(d) {
                return Err(ScheduleError::Config(format!(
                    "discipline '{}' listed twice",
                    d.tag()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.disciplines, Discipline::ALL.to_vec());
        assert_eq!(config.priority_order, PriorityOrder::LowerFirst);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_partial() {
        let json = r#"{"disciplines":["rr","fcfs"],"priority_order":"higher_first"}"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert_eq!(
            config.disciplines,
            vec![Discipline::RoundRobin, Discipline::Fcfs]
        );
        assert_eq!(config.priority_order, PriorityOrder::HigherFirst);
        assert!(!config.parallel);
    }

    #[test]
    fn test_json_rejects_empty_list() {
        let err = EngineConfig::from_json_str(r#"{"disciplines":[]}"#).unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_json_rejects_unknown_discipline() {
        let err = EngineConfig::from_json_str(r#"{"disciplines":["lottery"]}"#).unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn test_duplicate_discipline_rejected() {
        let config =
            EngineConfig::new().with_disciplines(vec![Discipline::Fcfs, Discipline::Fcfs]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'fcfs' listed twice"));
    }

    #[test]
    fn test_round_robin_only() {
        assert_eq!(
            EngineConfig::round_robin_only().disciplines,
            vec![Discipline::RoundRobin]
        );
    }
}
