//! Single-CPU process scheduling simulator.
//!
//! Takes a set of processes (arrival, burst, priority) and a time quantum,
//! runs one or more scheduling disciplines over them, and reports the
//! execution timeline and timing metrics of each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `SchedulingInput`, `Discipline`,
//!   `ExecutionSlice`, `ProcessMetrics`, `ScheduleResult`
//! - **`dispatching`**: Pick rules and the rule engine that orders ready processes
//! - **`scheduler`**: The simulator, KPIs, and cross-discipline comparison
//! - **`validation`**: Input checks and schedule invariant verification
//! - **`parser`** / **`report`**: Line-oriented text in, text or JSON out
//! - **`config`**: Discipline selection and priority convention
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::{parser, report::Report, scheduler::Simulator};
//! use cpu_schedule::dispatching::PriorityOrder;
//!
//! let input = parser::parse_input("3\n0 5 2\n1 3 1\n2 8 3\n2\n").unwrap();
//! let results = Simulator::new().run_all(&input).unwrap();
//! let report = Report::new(&input, results, PriorityOrder::LowerFirst);
//! assert!(report.to_text().contains("P3: 8 - 16"));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
