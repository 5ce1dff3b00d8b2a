//! Input validation and schedule verification.
//!
//! [`validate_input`] checks a process set before simulation and reports
//! every problem found. [`verify_schedule`] checks a produced timeline
//! against the single-CPU invariants and fails on the first violation:
//! - Slices have positive length, are time ordered, and never overlap
//! - No slice starts before its process arrives
//! - Each process receives exactly its burst time
//! - Non-preemptive disciplines run each process in one slice
//! - Round-Robin slices never exceed the quantum
//! - Waiting time is never negative

use crate::error::{Result, ScheduleError};
use crate::models::{Discipline, ScheduleResult, SchedulingInput};
use std::collections::HashMap;

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process id (`None` for input-wide problems).
    pub process_id: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Process ids are not 1..=n in input order.
    IdMismatch,
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time of zero or less.
    NonPositiveBurst,
    /// Quantum of zero or less.
    NonPositiveQuantum,
    /// Latest arrival plus total burst does not fit the clock type.
    HorizonOverflow,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        process_id: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id,
            message: message.into(),
        }
    }
}

/// Validates a scheduling input.
///
/// Checks:
/// 1. Process ids are 1..=n in input order
/// 2. Arrival times are non-negative
/// 3. Burst times are strictly positive
/// 4. The simulation horizon fits in an `i64`
/// 5. The quantum is strictly positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &SchedulingInput) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, p) in input.processes.iter().enumerate() {
        if p.id != i + 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdMismatch,
                Some(p.id),
                format!("process at position {} has id {}", i + 1, p.id),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                Some(p.id),
                format!("arrival time must be non-negative, got {}", p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                Some(p.id),
                format!("burst time must be positive, got {}", p.burst_time),
            ));
        }
    }

    let latest_arrival = input.processes.iter().map(|p| p.arrival_time.max(0)).max();
    let horizon = input
        .processes
        .iter()
        .try_fold(latest_arrival.unwrap_or(0), |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            None,
            "arrival and burst times overflow the simulation clock",
        ));
    }

    if input.quantum_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            None,
            format!("quantum must be positive, got {}", input.quantum_time),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies a produced schedule against its input.
///
/// Any failure is an engine bug and maps to
/// [`ScheduleError::InvariantViolation`].
pub fn verify_schedule(input: &SchedulingInput, result: &ScheduleResult) -> Result<()> {
    let discipline = result.discipline;
    let fail = |detail: String| Err(ScheduleError::invariant(discipline, detail));

    let arrivals: HashMap<usize, i64> = input
        .processes
        .iter()
        .map(|p| (p.id, p.arrival_time))
        .collect();
    let mut busy: HashMap<usize, i64> = HashMap::new();
    let mut slice_count: HashMap<usize, usize> = HashMap::new();
    let mut cursor = 0;

    for slice in &result.timeline {
        let Some(&arrival) = arrivals.get(&slice.process_id) else {
            return fail(format!("slice for unknown process P{}", slice.process_id));
        };
        if slice.end_time <= slice.start_time {
            return fail(format!(
                "empty slice P{}: {} - {}",
                slice.process_id, slice.start_time, slice.end_time
            ));
        }
        if slice.start_time < cursor {
            return fail(format!(
                "slice P{} at {} overlaps previous slice ending at {}",
                slice.process_id, slice.start_time, cursor
            ));
        }
        if slice.start_time < arrival {
            return fail(format!(
                "P{} runs at {} before arriving at {}",
                slice.process_id, slice.start_time, arrival
            ));
        }
        if discipline == Discipline::RoundRobin && slice.duration() > input.quantum_time {
            return fail(format!(
                "P{} slice of {} exceeds quantum {}",
                slice.process_id,
                slice.duration(),
                input.quantum_time
            ));
        }
        cursor = slice.end_time;
        *busy.entry(slice.process_id).or_insert(0) += slice.duration();
        *slice_count.entry(slice.process_id).or_insert(0) += 1;
    }

    for p in &input.processes {
        let got = busy.get(&p.id).copied().unwrap_or(0);
        if got != p.burst_time {
            return fail(format!(
                "{} received {} ticks of CPU, needs {}",
                p.label(),
                got,
                p.burst_time
            ));
        }
        if !discipline.is_preemptive() && slice_count.get(&p.id).copied().unwrap_or(0) != 1 {
            return fail(format!("{} was preempted", p.label()));
        }
    }

    for m in &result.metrics {
        if m.waiting_time < 0 {
            return fail(format!(
                "P{} has negative waiting time {}",
                m.process_id, m.waiting_time
            ));
        }
    }

    Ok(())
}
