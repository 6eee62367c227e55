//! # falsum — an always-false arithmetic predicate for SAT benchmarks
//!
//! Evaluates one deterministic Boolean predicate over fixed-width unsigned
//! integers: *"the target is simultaneously provably prime (one-level Pratt
//! certificate) and provably composite (explicit factor pair)"*. The
//! statement is false for every input; the value of the crate is that its
//! arithmetic is bit-exact, total and deterministic, so an external
//! synthesis stage can lower the function into gate-level Boolean structure
//! whose CNF is unsatisfiable — a stress instance for SAT-solver proof
//! systems whose unsatisfiability rests on number theory rather than on any
//! clause-level construction.
//!
//! Clause generation, logic optimization and SAT solving are external
//! consumers; this crate owns only the predicate, its validated input tuple
//! and an exhaustive sweep over small domains.
//!
//! ```
//! use falsum::instance::Instance;
//! use falsum::evaluate::evaluate;
//!
//! let inst = Instance::new(
//!     4,              // bit width W
//!     5, 1, 5,        // target and claimed factor pair
//!     vec![2, 5],     // candidate primes
//!     vec![1, 2],     // Fermat witnesses
//!     vec![vec![0, 0], vec![2, 0]], // exponents of primes[j] in primes[i]-1
//! )
//! .unwrap();
//! assert!(!evaluate(&inst)); // false, as for every input
//! ```

pub mod arith;
pub mod certificate;
pub mod evaluate;
pub mod instance;
pub mod sweep;

pub use arith::{bounded_pow, pow_mod, Power, MAX_WIDTH};
pub use evaluate::{evaluate, evaluate_detailed, Verdict};
pub use instance::Instance;
