//! Single-CPU scheduling simulator.
//!
//! # Algorithm
//!
//! All disciplines share one loop over a simulation clock:
//! 1. Collect the ready set (arrived, unfinished processes).
//! 2. If it is empty, jump the clock to the next arrival (idle gap).
//! 3. Pick a process with the discipline's rule chain.
//! 4. Non-preemptive disciplines run the pick to completion; Round-Robin
//!    runs it for at most one quantum and requeues it.
//! 5. Repeat until every process has received its full burst.
//!
//! Round-Robin admits processes that arrive during (or exactly at the end
//! of) a slice before the preempted process is requeued.
//!
//! # Complexity
//! O(n²) for the non-preemptive disciplines, O(n + B/q) queue operations
//! for Round-Robin where B is the total burst.

use log::{debug, info, warn};
use std::collections::VecDeque;
use std::iter::Peekable;
use std::thread;

use crate::config::EngineConfig;
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::error::{Result, ScheduleError};
use crate::models::{Discipline, ExecutionSlice, Process, ScheduleResult, SchedulingInput};
use crate::validation::verify_schedule;

/// Runs scheduling disciplines over a process set.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{Discipline, SchedulingInput};
/// use cpu_schedule::scheduler::Simulator;
///
/// let input = SchedulingInput::new(2)
///     .with_process(0, 5, 2)
///     .with_process(1, 3, 1)
///     .with_process(2, 8, 3);
///
/// let result = Simulator::new().run(&input, Discipline::Fcfs).unwrap();
/// let waits: Vec<i64> = result.metrics.iter().map(|m| m.waiting_time).collect();
/// assert_eq!(waits, vec![0, 4, 6]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: EngineConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one discipline.
    ///
    /// The input is assumed valid (see
    /// [`validate_input`](crate::validation::validate_input)). The result is
    /// verified before it is returned; a failed check yields
    /// [`ScheduleError::InvariantViolation`] and no result.
    pub fn run(&self, input: &SchedulingInput, discipline: Discipline) -> Result<ScheduleResult> {
        let engine = RuleEngine::for_discipline(discipline, self.config.priority_order);

        let timeline = match discipline {
            Discipline::Fcfs | Discipline::Sjf | Discipline::Priority => {
                run_to_completion(input, &engine)
            }
            Discipline::RoundRobin => round_robin(input, &engine),
            Discipline::ImprovedRoundRobin => {
                let seasoned =
                    RuleEngine::for_discipline(Discipline::Sjf, self.config.priority_order);
                improved_round_robin(input, &engine, &seasoned)
            }
        };

        let result = ScheduleResult::from_timeline(discipline, input, timeline)
            .and_then(|r| verify_schedule(input, &r).map(|_| r));

        match &result {
            Ok(r) => info!(
                "{}: {} slices, makespan {}",
                discipline.tag(),
                r.timeline.len(),
                r.makespan()
            ),
            Err(e) => warn!("{}: discarding result: {e}", discipline.tag()),
        }
        result
    }

    /// Runs every configured discipline, keeping each outcome separate.
    ///
    /// Results follow the configured order whether or not the runs are
    /// parallel.
    pub fn run_each(&self, input: &SchedulingInput) -> Vec<(Discipline, Result<ScheduleResult>)> {
        let disciplines = &self.config.disciplines;
        if !self.config.parallel || disciplines.len() < 2 {
            return disciplines
                .iter()
                .map(|&d| (d, self.run(input, d)))
                .collect();
        }

        thread::scope(|scope| {
            let handles: Vec<_> = disciplines
                .iter()
                .map(|&d| (d, scope.spawn(move || self.run(input, d))))
                .collect();

            handles
                .into_iter()
                .map(|(d, handle)| {
                    let outcome = handle.join().unwrap_or_else(|_| {
                        Err(ScheduleError::invariant(d, "simulation panicked"))
                    });
                    (d, outcome)
                })
                .collect()
        })
    }

    /// Runs every configured discipline; fails if any run fails.
    pub fn run_all(&self, input: &SchedulingInput) -> Result<Vec<ScheduleResult>> {
        self.run_each(input)
            .into_iter()
            .map(|(_, outcome)| outcome)
            .collect()
    }
}

fn fresh_context(input: &SchedulingInput) -> SchedulingContext {
    input
        .processes
        .iter()
        .fold(SchedulingContext::at_time(0), |ctx, p| {
            ctx.with_remaining_burst(p.id, p.burst_time)
        })
}

/// Non-preemptive loop shared by FCFS, SJF and Priority.
fn run_to_completion(input: &SchedulingInput, engine: &RuleEngine) -> Vec<ExecutionSlice> {
    let mut ctx = fresh_context(input);
    let mut pending: Vec<&Process> = input.processes.iter().collect();
    let mut timeline = Vec::with_capacity(input.len());

    while !pending.is_empty() {
        let now = ctx.current_time;
        let ready = pending.iter().copied().filter(|p| p.arrival_time <= now);

        let Some(next) = engine.select_best(ready, &ctx) else {
            // CPU idle until the next arrival
            ctx.current_time = pending
                .iter()
                .map(|p| p.arrival_time)
                .min()
                .unwrap_or(now);
            continue;
        };

        let run = ctx.remaining(next.id).unwrap_or(next.burst_time);
        debug!("t={now} dispatch {} for {run}", next.label());
        timeline.push(ExecutionSlice::new(next.id, now, now + run));
        ctx.consume(next.id, run);
        ctx.current_time = now + run;
        pending.retain(|p| p.id != next.id);
    }

    timeline
}

/// Arrival-ordered process stream feeding a rotation queue.
fn arrival_stream<'a>(
    input: &'a SchedulingInput,
    admission: &RuleEngine,
) -> Peekable<std::vec::IntoIter<&'a Process>> {
    admission
        .sort_indices(&input.processes, &SchedulingContext::at_time(0))
        .into_iter()
        .map(|i| &input.processes[i])
        .collect::<Vec<_>>()
        .into_iter()
        .peekable()
}

/// Moves every process that has arrived by `now` to the back of `queue`.
fn admit<'a, I>(arrivals: &mut Peekable<I>, queue: &mut VecDeque<&'a Process>, now: i64)
where
    I: Iterator<Item = &'a Process>,
{
    while let Some(p) = arrivals.next_if(|p| p.arrival_time <= now) {
        queue.push_back(p);
    }
}

/// Runs `process` for up to `limit` ticks and returns its remaining burst.
fn run_slice(
    ctx: &mut SchedulingContext,
    timeline: &mut Vec<ExecutionSlice>,
    process: &Process,
    limit: i64,
) -> i64 {
    let now = ctx.current_time;
    let left = ctx.remaining(process.id).unwrap_or(process.burst_time);
    let run = left.min(limit);
    debug!("t={now} dispatch {} for {run} (remaining {left})", process.label());
    timeline.push(ExecutionSlice::new(process.id, now, now + run));
    ctx.current_time = now + run;
    ctx.consume(process.id, run)
}

fn round_robin(input: &SchedulingInput, admission: &RuleEngine) -> Vec<ExecutionSlice> {
    let quantum = input.quantum_time;
    let mut ctx = fresh_context(input);
    let mut arrivals = arrival_stream(input, admission);
    let mut queue: VecDeque<&Process> = VecDeque::with_capacity(input.len());
    let mut timeline = Vec::new();

    loop {
        admit(&mut arrivals, &mut queue, ctx.current_time);

        let Some(current) = queue.pop_front() else {
            match arrivals.peek() {
                Some(p) => {
                    ctx.current_time = p.arrival_time;
                    continue;
                }
                None => break,
            }
        };

        let left = run_slice(&mut ctx, &mut timeline, current, quantum);
        // Arrivals during the slice go ahead of the preempted process
        admit(&mut arrivals, &mut queue, ctx.current_time);
        if left > 0 {
            queue.push_back(current);
        }
    }

    timeline
}

/// One Round-Robin turn per process, then shortest remaining burst first.
///
/// Fresh processes (never dispatched) always take precedence and receive at
/// most one quantum. Processes left unfinished after their turn are
/// "seasoned" and, when no fresh process is ready, the best seasoned
/// process runs to completion.
fn improved_round_robin(
    input: &SchedulingInput,
    admission: &RuleEngine,
    seasoned_rule: &RuleEngine,
) -> Vec<ExecutionSlice> {
    let quantum = input.quantum_time;
    let mut ctx = fresh_context(input);
    let mut arrivals = arrival_stream(input, admission);
    let mut fresh: VecDeque<&Process> = VecDeque::with_capacity(input.len());
    let mut seasoned: Vec<&Process> = Vec::new();
    let mut timeline = Vec::new();

    loop {
        admit(&mut arrivals, &mut fresh, ctx.current_time);

        if let Some(current) = fresh.pop_front() {
            if run_slice(&mut ctx, &mut timeline, current, quantum) > 0 {
                seasoned.push(current);
            }
            continue;
        }

        if let Some(next) = seasoned_rule.select_best(seasoned.iter().copied(), &ctx) {
            run_slice(&mut ctx, &mut timeline, next, i64::MAX);
            seasoned.retain(|p| p.id != next.id);
            continue;
        }

        match arrivals.peek() {
            Some(p) => ctx.current_time = p.arrival_time,
            None => break,
        }
    }

    timeline
}
