//! # Sweep — Exhaustive Domain Enumeration
//!
//! Evaluates the predicate over the entire bounded input domain for a given
//! width and slot count. Each tuple is independent of every other, so the
//! sweep fans out over the target coordinate with rayon and walks the
//! remaining coordinates with a per-worker odometer, reusing one instance
//! buffer per worker instead of allocating per tuple.
//!
//! The domain has `(2^W)^(3 + 2N + N^2)` tuples; [`domain_size`] reports it
//! and [`exhaustive`] refuses anything past a hard cap rather than starting
//! a sweep that cannot finish. The expected outcome of every sweep is zero
//! satisfied tuples; a counterexample, if one ever appeared, is captured
//! whole so it can be reported and minimized.

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::arith::MAX_WIDTH;
use crate::evaluate::evaluate;
use crate::instance::Instance;

/// Refuse sweeps larger than this many tuples.
pub const MAX_SWEEP_TUPLES: u128 = 1 << 40;

/// Outcome of an exhaustive sweep.
#[derive(Clone, Debug, Serialize)]
pub struct SweepReport {
    pub width: u32,
    pub slots: usize,
    /// Total tuples evaluated.
    pub evaluated: u128,
    /// Tuples for which the predicate held. Always 0.
    pub satisfied: u64,
    /// First satisfying tuple found, if any. Always `None`.
    pub counterexample: Option<Instance>,
}

/// Number of free coordinates in one tuple: target, fact1, fact2, N primes,
/// N generators, N×N exponents.
fn coordinate_count(slots: usize) -> usize {
    3 + 2 * slots + slots * slots
}

/// Total domain size `(2^width)^(3 + 2*slots + slots^2)`, or `None` when it
/// exceeds u128.
pub fn domain_size(width: u32, slots: usize) -> Option<u128> {
    let bits = width as u128 * coordinate_count(slots) as u128;
    if bits >= 128 {
        return None;
    }
    Some(1u128 << bits)
}

/// Write one odometer state into the instance. Digit order: fact1, fact2,
/// primes, generators, powers row-major. The target is fixed per worker.
fn write_coordinates(instance: &mut Instance, digits: &[u64]) {
    let n = instance.primes.len();
    instance.fact1 = digits[0];
    instance.fact2 = digits[1];
    let mut k = 2;
    for i in 0..n {
        instance.primes[i] = digits[k];
        k += 1;
    }
    for i in 0..n {
        instance.generators[i] = digits[k];
        k += 1;
    }
    for i in 0..n {
        for j in 0..n {
            instance.powers[i][j] = digits[k];
            k += 1;
        }
    }
}

/// Advance the odometer by one in base `2^width`. Returns false on wrap.
fn advance(digits: &mut [u64], per_coordinate: u64) -> bool {
    for d in digits.iter_mut() {
        *d += 1;
        if *d < per_coordinate {
            return true;
        }
        *d = 0;
    }
    false
}

/// Evaluate every tuple in the `(width, slots)` domain.
///
/// Parallel over the target coordinate; within a worker, the remaining
/// coordinates advance odometer-style. Returns the tuple count, the number
/// of satisfied tuples (zero, by the tautology property) and the first
/// counterexample if the impossible happened.
pub fn exhaustive(width: u32, slots: usize) -> Result<SweepReport> {
    if width < 1 || width > MAX_WIDTH {
        return Err(anyhow!("width must be in 1..={}, got {}", MAX_WIDTH, width));
    }
    if slots == 0 {
        return Err(anyhow!("at least one candidate-prime slot is required"));
    }
    let total = domain_size(width, slots)
        .filter(|&t| t <= MAX_SWEEP_TUPLES)
        .ok_or_else(|| {
            anyhow!(
                "domain for width {} with {} slots exceeds the sweep cap of 2^40 tuples",
                width,
                slots
            )
        })?;

    info!(width, slots, tuples = %total, "starting exhaustive sweep");

    let per_coordinate = 1u64 << width;
    let free_coordinates = coordinate_count(slots) - 1; // target fixed per worker

    let (satisfied, counterexample) = (0..per_coordinate)
        .into_par_iter()
        .map(|target| {
            let mut instance = Instance {
                width,
                target,
                fact1: 0,
                fact2: 0,
                primes: vec![0; slots],
                generators: vec![0; slots],
                powers: vec![vec![0; slots]; slots],
            };
            let mut digits = vec![0u64; free_coordinates];
            let mut satisfied = 0u64;
            let mut counterexample = None;
            loop {
                write_coordinates(&mut instance, &digits);
                if evaluate(&instance) {
                    satisfied += 1;
                    if counterexample.is_none() {
                        counterexample = Some(instance.clone());
                    }
                }
                if !advance(&mut digits, per_coordinate) {
                    break;
                }
            }
            (satisfied, counterexample)
        })
        .reduce(
            || (0u64, None),
            |(sa, ca), (sb, cb)| (sa + sb, ca.or(cb)),
        );

    info!(width, slots, satisfied, "sweep complete");

    Ok(SweepReport {
        width,
        slots,
        evaluated: total,
        satisfied,
        counterexample,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_size_known_values() {
        // N=1: 6 coordinates. W=1 → 2^6, W=2 → 4^6.
        assert_eq!(domain_size(1, 1), Some(64));
        assert_eq!(domain_size(2, 1), Some(1 << 12));
        // N=2: 11 coordinates. W=2 → 2^22.
        assert_eq!(domain_size(2, 2), Some(1 << 22));
        // Past u128: W=63, N=3 → 63 * 18 bits.
        assert_eq!(domain_size(63, 3), None);
    }

    #[test]
    fn exhaustive_rejects_oversized_domain() {
        assert!(exhaustive(8, 3).is_err());
        assert!(exhaustive(63, 3).is_err());
    }

    #[test]
    fn exhaustive_rejects_degenerate_parameters() {
        assert!(exhaustive(0, 1).is_err());
        assert!(exhaustive(4, 0).is_err());
    }

    #[test]
    fn exhaustive_smallest_domain_is_unsatisfied() {
        // W=1, N=1: 64 tuples, every value in {0, 1}.
        let report = exhaustive(1, 1).unwrap();
        assert_eq!(report.evaluated, 64);
        assert_eq!(report.satisfied, 0);
        assert!(report.counterexample.is_none());
    }

    #[test]
    fn odometer_covers_whole_base() {
        let mut digits = vec![0u64; 3];
        let mut count = 1u64;
        while advance(&mut digits, 3) {
            count += 1;
        }
        assert_eq!(count, 27);
        assert_eq!(digits, vec![0, 0, 0]);
    }

    #[test]
    fn write_coordinates_layout() {
        let mut instance = Instance {
            width: 2,
            target: 0,
            fact1: 0,
            fact2: 0,
            primes: vec![0; 2],
            generators: vec![0; 2],
            powers: vec![vec![0; 2]; 2],
        };
        write_coordinates(&mut instance, &[1, 2, 3, 0, 1, 2, 3, 0, 1, 2]);
        assert_eq!(instance.fact1, 1);
        assert_eq!(instance.fact2, 2);
        assert_eq!(instance.primes, vec![3, 0]);
        assert_eq!(instance.generators, vec![1, 2]);
        assert_eq!(instance.powers, vec![vec![3, 0], vec![1, 2]]);
    }
}
