//! Reproducible random workloads.
//!
//! Generates process sets from a Bernoulli arrival process: at every tick a
//! process arrives with probability `p_arrival`, and is short with
//! probability `p_short`. Seeded, so the same arguments always produce the
//! same input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::SchedulingInput;

/// Builds a random scheduling input.
///
/// # Arguments
/// * `ticks` - Length of the arrival window.
/// * `p_arrival` - Per-tick arrival probability.
/// * `p_short` - Probability an arrival is a short job.
/// * `short_burst` / `long_burst` - Burst times of short and long jobs.
/// * `priority_levels` - Priorities are drawn from `1..=priority_levels`.
/// * `quantum_time` - Round-Robin quantum of the generated input.
/// * `seed` - RNG seed.
#[allow(clippy::too_many_arguments)]
pub fn bernoulli_workload(
    ticks: i64,
    p_arrival: f64,
    p_short: f64,
    short_burst: i64,
    long_burst: i64,
    priority_levels: i32,
    quantum_time: i64,
    seed: u64,
) -> SchedulingInput {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut input = SchedulingInput::new(quantum_time);
    let levels = priority_levels.max(1);

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };
            let priority = rng.random_range(1..=levels);
            input = input.with_process(t, burst, priority);
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    #[test]
    fn test_reproducible() {
        let a = bernoulli_workload(100, 0.3, 0.5, 2, 6, 4, 3, 42);
        let b = bernoulli_workload(100, 0.3, 0.5, 2, 6, 4, 3, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_input_is_valid() {
        let input = bernoulli_workload(200, 0.5, 0.3, 1, 8, 3, 2, 7);
        assert!(!input.is_empty());
        assert!(validate_input(&input).is_ok());
        assert!(input
            .processes
            .iter()
            .all(|p| (1..=3).contains(&p.priority) && (p.burst_time == 1 || p.burst_time == 8)));
        assert!(input
            .processes
            .windows(2)
            .all(|w| w[0].arrival_time < w[1].arrival_time));
    }

    #[test]
    fn test_zero_probability() {
        assert!(bernoulli_workload(50, 0.0, 0.5, 1, 2, 1, 1, 0).is_empty());
    }
}
