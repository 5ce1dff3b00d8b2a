//! Rule engine for sequential multi-criteria dispatching.
//!
//! Applies a primary rule, then tie-breaking rules in order. Processes
//! that tie on every rule are ordered by id, i.e. input order.

use std::cmp::Ordering;

use super::{PriorityOrder, Rule, SchedulingContext};
use crate::models::{Discipline, Process};

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{Rule, RuleEngine, SchedulingContext};
/// use cpu_schedule::models::Process;
///
/// let engine = RuleEngine::new()
///     .with_rule(Rule::RemainingBurst)
///     .with_tie_breaker(Rule::ArrivalTime);
///
/// let ready = vec![Process::new(1, 0, 8), Process::new(2, 1, 3)];
/// let ctx = SchedulingContext::at_time(1);
/// let best = engine.select_best(ready.iter(), &ctx).unwrap();
/// assert_eq!(best.id, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Creates an empty rule engine (ties resolved by id).
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule chain a discipline uses to pick among ready processes.
    ///
    /// Round-Robin variants use the FCFS chain to order arrivals into
    /// their rotation queue.
    pub fn for_discipline(discipline: Discipline, priority_order: PriorityOrder) -> Self {
        match discipline {
            Discipline::Fcfs | Discipline::RoundRobin | Discipline::ImprovedRoundRobin => {
                Self::new().with_rule(Rule::ArrivalTime)
            }
            Discipline::Sjf => Self::new()
                .with_rule(Rule::RemainingBurst)
                .with_tie_breaker(Rule::ArrivalTime),
            Discipline::Priority => Self::new()
                .with_rule(Rule::Priority(priority_order))
                .with_tie_breaker(Rule::ArrivalTime),
        }
    }

    /// Adds the primary rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sorts processes by dispatch order (first to run first).
    ///
    /// Returns indices into the given slice.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the process that should run next.
    pub fn select_best<'a, I>(
        &self,
        candidates: I,
        context: &SchedulingContext,
    ) -> Option<&'a Process>
    where
        I: IntoIterator<Item = &'a Process>,
    {
        // min_by keeps the first of equal elements, matching the stable sort
        candidates
            .into_iter()
            .min_by(|a, b| self.compare(a, b, context))
    }

    /// Orders two processes by the rule chain.
    pub fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // All rules tied
        a.id.cmp(&b.id)
    }
}
