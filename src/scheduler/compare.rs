//! Cross-discipline comparison.

use std::cmp::Ordering;

use crate::models::ScheduleResult;

/// Picks the discipline with the lowest average waiting time.
///
/// Ties fall to the lower average turnaround time, then to the earlier
/// result. Returns `None` when there are no results or no processes.
pub fn best_discipline(results: &[ScheduleResult]) -> Option<&ScheduleResult> {
    results
        .iter()
        .filter_map(|r| {
            let wait = r.average_waiting_time?;
            let turnaround = r.average_turnaround_time?;
            Some((r, wait, turnaround))
        })
        .reduce(|best, candidate| match compare(candidate, best) {
            Ordering::Less => candidate,
            _ => best,
        })
        .map(|(r, _, _)| r)
}

fn compare(a: (&ScheduleResult, f64, f64), b: (&ScheduleResult, f64, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.2.total_cmp(&b.2))
}
