//! Dispatching rules and rule engine.
//!
//! Every discipline shares one selection loop: the CPU picks the next
//! process from the arrived, unfinished set. Disciplines differ only in
//! the rule chain used for that pick.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{PriorityOrder, RuleEngine, SchedulingContext};
//! use cpu_schedule::models::Discipline;
//!
//! let engine = RuleEngine::for_discipline(Discipline::Sjf, PriorityOrder::LowerFirst);
//! let context = SchedulingContext::at_time(0);
//! // let next = engine.select_best(ready.iter(), &context);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;
pub use rules::{PriorityOrder, Rule};

/// Score returned by a rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;
