//! Scheduling simulation and KPI evaluation.
//!
//! Provides the single-CPU simulator, schedule quality metrics, and the
//! cross-discipline comparison.
//!
//! # Disciplines
//!
//! | Discipline | Pick rule | Preemptive |
//! |------------|-----------|------------|
//! | FCFS | earliest arrival, then id | no |
//! | SJF | smallest remaining burst, then arrival, then id | no |
//! | Priority | best priority value, then arrival, then id | no |
//! | RR | FIFO rotation, one quantum per turn | yes |
//! | IRR | one RR turn each, then shortest remaining | first turn only |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod compare;
mod kpi;
mod simulator;

pub use compare::best_discipline;
pub use kpi::ScheduleKpi;
pub use simulator::Simulator;
