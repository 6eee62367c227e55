//! # Certificate — One-Level Pratt Certificate Verification
//!
//! A slot `i` of an [`Instance`](crate::instance::Instance) claims that
//! `primes[i]` is prime, witnessed by `generators[i]` and by the exponent
//! row `powers[i]`, which expresses `primes[i] − 1` as a product of powers
//! of entries of the same flat prime list. Verification per slot:
//!
//! - **Base case**: `primes[i] == 2` is certified axiomatically.
//! - **Condition A** (factorization): the product over j of
//!   `primes[j]^powers[i][j]`, computed with bounded width-checked
//!   exponentiation, equals `primes[i] − 1` exactly. Any overflow, zero
//!   factor, or width-exceeding running product invalidates the slot.
//! - **Condition B** (non-residue witness): for every j with a nonzero
//!   exponent, `g^((p−1)/q) ≢ 1 (mod p)` where `q = primes[j]`. The
//!   division must be exact: a `q` that does not divide `p − 1` fails the
//!   slot outright instead of silently truncating the exponent.
//! - **Condition C** (Fermat compliance): `g^(p−1) ≡ 1 (mod p)`.
//!
//! A certificate also needs at least one nontrivial factor: a row whose
//! exponents sum to 0 or 1 is degenerate and fails.
//!
//! [`all_certified`] applies the global guard — no claimed prime may be 0 or
//! 1 — *before* any slot is examined. That ordering is what keeps the zero
//! modulus out of every `pow_mod` call; the guard must short-circuit, never
//! run as one conjunct among many.
//!
//! ## References
//!
//! - V. Pratt, "Every Prime Has a Succinct Certificate", SIAM J. Comput.,
//!   4(3):214–220, 1975.

use crate::arith::{bounded_pow, pow_mod, width_limit, Power};
use crate::instance::Instance;

/// Verify the Pratt certificate for one slot.
///
/// Assumes `all_certified`'s guard has passed (every claimed prime ≥ 2);
/// when called directly with sub-2 primes in the referenced positions, the
/// slot is reported uncertified rather than faulting.
pub fn slot_certified(instance: &Instance, slot: usize) -> bool {
    let p = instance.primes[slot];
    if p == 2 {
        return true; // axiomatic smallest prime
    }
    if p < 2 {
        return false;
    }

    let row = &instance.powers[slot];

    // A certificate needs at least one nontrivial factor of p - 1.
    let sum_powers: u128 = row.iter().map(|&e| e as u128).sum();
    if sum_powers <= 1 {
        return false;
    }

    // Condition A: the claimed factorization reproduces p - 1 exactly.
    let limit = width_limit(instance.width);
    let mut product: u128 = 1;
    for (j, &exponent) in row.iter().enumerate() {
        let factor = match bounded_pow(instance.primes[j], exponent, instance.width) {
            Power::Exact(v) => v,
            Power::Overflow => return false,
        };
        if factor == 0 {
            return false;
        }
        product *= factor as u128;
        if product >= limit {
            return false;
        }
    }
    if product + 1 != p as u128 {
        return false;
    }

    let g = instance.generators[slot];
    let p_minus_1 = p - 1;

    // Condition B: g is a non-residue witness for every claimed factor q.
    for (j, &exponent) in row.iter().enumerate() {
        if exponent == 0 {
            continue;
        }
        let q = instance.primes[j];
        if q < 2 {
            return false;
        }
        // q must divide p - 1 exactly for the witness exponent to be
        // meaningful. Once condition A holds, q^exponent divides the
        // product, so this cannot trip; it pins down the behavior for any
        // weaker caller instead of truncating silently.
        if p_minus_1 % q != 0 {
            return false;
        }
        if pow_mod(g, p_minus_1 / q, p, instance.width) == 1 {
            return false;
        }
    }

    // Condition C: Fermat compliance.
    pow_mod(g, p_minus_1, p, instance.width) == 1
}

/// Verify every slot, with the global 0/1 guard evaluated first.
///
/// Returns false immediately if any claimed prime is 0 or 1; no per-slot
/// modular arithmetic runs in that case.
pub fn all_certified(instance: &Instance) -> bool {
    if instance.primes.iter().any(|&p| p < 2) {
        return false;
    }
    (0..instance.slots()).all(|i| slot_certified(instance, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(
        width: u32,
        primes: Vec<u64>,
        generators: Vec<u64>,
        powers: Vec<Vec<u64>>,
    ) -> Instance {
        Instance::new(width, 0, 0, 0, primes, generators, powers).unwrap()
    }

    // ---- worked example: 5 certified against [2, 5] ----

    #[test]
    fn certifies_five_with_generator_two() {
        // p = 5, g = 2, 5 - 1 = 2^2:
        //   A: 2^2 = 4, 4 + 1 = 5
        //   B: 2^(4/2) = 4 ≢ 1 (mod 5)
        //   C: 2^4 = 16 ≡ 1 (mod 5)
        let inst = instance(4, vec![2, 5], vec![1, 2], vec![vec![0, 0], vec![2, 0]]);
        assert!(slot_certified(&inst, 1));
        assert!(all_certified(&inst));
    }

    #[test]
    fn two_is_axiomatically_certified() {
        let inst = instance(4, vec![2], vec![0], vec![vec![0]]);
        assert!(slot_certified(&inst, 0));
        assert!(all_certified(&inst));
    }

    #[test]
    fn certifies_seven_via_two_times_three() {
        // 7 - 1 = 2 * 3, witness g = 3:
        //   3^(6/2) = 27 ≡ 6 ≢ 1 (mod 7)
        //   3^(6/3) = 9 ≡ 2 ≢ 1 (mod 7)
        //   3^6 ≡ 1 (mod 7)
        let inst = instance(
            4,
            vec![2, 3, 7],
            vec![1, 2, 3],
            vec![vec![0, 0, 0], vec![1, 0, 0], vec![1, 1, 0]],
        );
        assert!(slot_certified(&inst, 2));
    }

    #[test]
    fn certifies_full_list_with_forty_one() {
        // 5 - 1 = 2^2 with witness 2; 41 - 1 = 2^3 * 5 with witness 6
        // (6 is a primitive root mod 41): 6^20 ≡ 40, 6^8 ≡ 10, 6^40 ≡ 1.
        let inst = instance(
            6,
            vec![2, 5, 41],
            vec![1, 2, 6],
            vec![vec![0, 0, 0], vec![2, 0, 0], vec![3, 1, 0]],
        );
        assert!(all_certified(&inst));
    }

    // ---- invalidation paths ----

    #[test]
    fn rejects_wrong_product() {
        // Claim 5 - 1 = 2^3 = 8: product + 1 = 9 != 5.
        let inst = instance(4, vec![2, 5], vec![1, 2], vec![vec![0, 0], vec![3, 0]]);
        assert!(!slot_certified(&inst, 1));
    }

    #[test]
    fn rejects_degenerate_exponent_sum() {
        // Exponent sums of 0 and 1 are both degenerate.
        let inst = instance(4, vec![2, 5], vec![1, 2], vec![vec![0, 0], vec![0, 0]]);
        assert!(!slot_certified(&inst, 1));
        // 3 - 1 = 2^1 sums to exactly 1 — a one-level certificate for 3
        // would need this, and the well-formedness rule rejects it.
        let inst = instance(4, vec![2, 3], vec![1, 2], vec![vec![0, 0], vec![1, 0]]);
        assert!(!slot_certified(&inst, 1));
    }

    #[test]
    fn rejects_overflowing_factorization() {
        // 2^15 overflows width 4 before any comparison happens.
        let inst = instance(4, vec![2, 5], vec![1, 2], vec![vec![0, 0], vec![15, 0]]);
        assert!(!slot_certified(&inst, 1));
    }

    #[test]
    fn rejects_running_product_overflow() {
        // Each 3^2 = 9 fits width 4 but the running product 81 does not.
        let inst = instance(
            4,
            vec![3, 3, 13],
            vec![2, 2, 2],
            vec![vec![2, 2, 0], vec![2, 2, 0], vec![2, 2, 0]],
        );
        assert!(!slot_certified(&inst, 2));
    }

    #[test]
    fn rejects_quadratic_residue_witness() {
        // p = 5 with g = 4: 4^(4/2) = 16 ≡ 1 (mod 5) — condition B fails.
        let inst = instance(4, vec![2, 5], vec![1, 4], vec![vec![0, 0], vec![2, 0]]);
        assert!(!slot_certified(&inst, 1));
    }

    #[test]
    fn rejects_composite_candidate() {
        // p = 9, claimed 9 - 1 = 2^3, g = 2: 2^8 ≡ 4 ≢ 1 (mod 9) —
        // condition C fails, as it must for this composite.
        let inst = instance(4, vec![2, 9], vec![1, 2], vec![vec![0, 0], vec![3, 0]]);
        assert!(!slot_certified(&inst, 1));
    }

    #[test]
    fn rejects_zero_generator() {
        // g = 0: 0^4 ≡ 0 ≢ 1 (mod 5), condition C fails.
        let inst = instance(4, vec![2, 5], vec![1, 0], vec![vec![0, 0], vec![2, 0]]);
        assert!(!slot_certified(&inst, 1));
    }

    // ---- global guard ----

    #[test]
    fn guard_rejects_zero_prime_before_slot_checks() {
        // Slot 1 would certify on its own; primes[0] = 0 fails the list.
        let inst = instance(4, vec![0, 5], vec![1, 2], vec![vec![0, 0], vec![2, 0]]);
        assert!(!all_certified(&inst));
    }

    #[test]
    fn guard_rejects_one_prime() {
        let inst = instance(4, vec![1, 5], vec![1, 2], vec![vec![0, 0], vec![2, 0]]);
        assert!(!all_certified(&inst));
    }

    #[test]
    fn slot_certified_is_total_for_sub_two_primes() {
        // Direct per-slot calls with degenerate primes must not fault.
        let inst = instance(4, vec![0, 1], vec![0, 0], vec![vec![0, 0], vec![0, 0]]);
        assert!(!slot_certified(&inst, 0));
        assert!(!slot_certified(&inst, 1));
    }

    #[test]
    fn all_certified_requires_every_slot() {
        // 5 certifies but the row for 15 sums to 1 — degenerate.
        let inst = instance(
            5,
            vec![2, 5, 15],
            vec![1, 2, 2],
            vec![vec![0, 0, 0], vec![2, 0, 0], vec![1, 0, 0]],
        );
        assert!(slot_certified(&inst, 1));
        assert!(!all_certified(&inst));
    }
}
