//! # Evaluate — Predicate Orchestration
//!
//! Conjoins the three component checks into the final Boolean verdict:
//! the target is certified prime by the slot table *and* has an explicit
//! nontrivial factor pair *and* appears in the candidate list. No
//! well-formed input can satisfy all three — a number with a valid Pratt
//! certificate has no exact factor pair with both factors different from
//! itself — which is precisely the property the downstream CNF consumer
//! exploits: the lowered formula is unsatisfiable by mathematics, not by
//! construction of any particular clause set.
//!
//! Evaluation order matters only for the guard inside
//! [`all_certified`](crate::certificate::all_certified), which must run
//! before any per-slot modular arithmetic; the other two components are
//! division-free and safe in any order.

use serde::Serialize;

use crate::certificate::all_certified;
use crate::instance::Instance;

/// Component-level outcome of one evaluation.
///
/// `result` is the conjunction of the three components and is false for
/// every well-formed instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Every slot carries a valid one-level Pratt certificate and no
    /// claimed prime is 0 or 1.
    pub all_certified: bool,
    /// The factor pair is exact and nontrivial.
    pub composite: bool,
    /// The target appears in the candidate-prime list.
    pub member: bool,
    /// Conjunction of the three components.
    pub result: bool,
}

/// True iff `(fact1, fact2)` is an exact nontrivial factorization of
/// `target`.
///
/// The product is taken at full 2W-bit precision and compared exactly; no
/// truncation happens before the comparison. Only factors literally equal
/// to the target are excluded — `(1, target)` fails because of the
/// `fact != target` guard, not because factor 1 is special.
pub fn compositeness(target: u64, fact1: u64, fact2: u64) -> bool {
    fact1 != target && fact2 != target && fact1 as u128 * fact2 as u128 == target as u128
}

/// True iff the target equals some entry of the candidate-prime list.
pub fn membership(instance: &Instance) -> bool {
    instance.primes.contains(&instance.target)
}

/// Evaluate the predicate, reporting each component.
pub fn evaluate_detailed(instance: &Instance) -> Verdict {
    let all_certified = all_certified(instance);
    let composite = compositeness(instance.target, instance.fact1, instance.fact2);
    let member = membership(instance);
    Verdict {
        all_certified,
        composite,
        member,
        result: all_certified && composite && member,
    }
}

/// Evaluate the predicate. False for every well-formed instance.
pub fn evaluate(instance: &Instance) -> bool {
    evaluate_detailed(instance).result
}
