//! Scheduling domain models.
//!
//! Plain value records describing a single-CPU scheduling problem and
//! its solution.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Unit of CPU work (arrival, burst, priority) |
//! | `SchedulingInput` | Process set plus Round-Robin quantum |
//! | `Discipline` | Which scheduling policy to simulate |
//! | `ExecutionSlice` | One contiguous span on the CPU |
//! | `ProcessMetrics` | Completion, turnaround, waiting, response |
//! | `ScheduleResult` | Timeline and metrics for one discipline |

mod discipline;
mod process;
mod schedule;

pub use discipline::Discipline;
pub use process::{Process, SchedulingInput};
pub use schedule::{ExecutionSlice, ProcessMetrics, ScheduleResult};

pub(crate) use schedule::mean;
