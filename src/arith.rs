//! # Arith — Fixed-Width Exponentiation Primitives
//!
//! The two arithmetic kernels everything else is built from:
//!
//! 1. **Bounded exponentiation** (`bounded_pow`) — unmodular square-and-multiply
//!    over a fixed bit width, returning a tagged [`Power`] that distinguishes
//!    an exact W-bit result from overflow. The hardware formulation of this
//!    operation collapses overflow to a reserved 0 sentinel; the tagged result
//!    makes the invalidation explicit and independently testable, while
//!    producing bit-identical downstream decisions.
//! 2. **Modular exponentiation** (`pow_mod`) — classic square-and-multiply
//!    with u128 intermediates, result always reduced below the modulus.
//!
//! Both run a fixed `width` iterations over the exponent bits so the loop
//! structure mirrors the unrolled circuit a synthesis stage lowers to gates:
//! one conditional multiply plus one squaring per exponent bit, widths and
//! truncation points fixed. Keeping that shape bit-exact is a hard
//! requirement for the CNF extraction consumer; speed per call is not.

/// Largest supported width: 2W-bit intermediates must fit in u128, and
/// `1u128 << width` must not shift out.
pub const MAX_WIDTH: u32 = 63;

/// Exclusive upper bound of the W-bit value range, as a u128.
#[inline]
pub fn width_limit(width: u32) -> u128 {
    debug_assert!(width >= 1 && width <= MAX_WIDTH);
    1u128 << width
}

/// Result of bounded (unmodular) exponentiation.
///
/// `Overflow` means the true value of `base^exp` is not representable in the
/// given width. There is no ambiguity with a true zero result: `0^e` for
/// `e > 0` is exactly representable and yields `Exact(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Power {
    Exact(u64),
    Overflow,
}

impl Power {
    /// The exact value, or `None` on overflow.
    pub fn exact(self) -> Option<u64> {
        match self {
            Power::Exact(v) => Some(v),
            Power::Overflow => None,
        }
    }

    pub fn is_overflow(self) -> bool {
        matches!(self, Power::Overflow)
    }
}

/// Compute `base^exp` over a `width`-bit domain.
///
/// Square-and-multiply, LSB first, `width` iterations, u128 accumulator.
/// Returns `Power::Exact(v)` iff the true value of `base^exp` fits in
/// `width` bits, `Power::Overflow` otherwise.
///
/// Overflow tracking follows the circuit semantics: once a squaring of the
/// running base exceeds the width, that base is permanently invalid, and the
/// invalidation reaches the accumulator only when a later set exponent bit
/// consumes it. A squaring that no remaining exponent bit consumes cannot
/// spoil an already-complete exact result (`bounded_pow(2, 2)` at width 4
/// is `Exact(4)` even though the loop's final squaring hits 16).
///
/// Preconditions: `1 <= width <= MAX_WIDTH`, `base < 2^width`,
/// `exp < 2^width`. Out-of-range bases are reported as `Overflow`; exponent
/// bits at or above `width` are never inspected.
pub fn bounded_pow(base: u64, exp: u64, width: u32) -> Power {
    let limit = width_limit(width);
    let mut acc: u128 = 1;
    let mut acc_over = false;
    let mut sq: u128 = base as u128;
    let mut sq_over = sq >= limit;

    for bit in 0..width {
        if exp >> bit & 1 == 1 {
            if sq_over {
                acc_over = true;
            }
            if !acc_over {
                acc *= sq;
                if acc >= limit {
                    acc_over = true;
                }
            }
        }
        if !sq_over {
            sq *= sq;
            if sq >= limit {
                sq_over = true;
            }
        }
    }

    if acc_over {
        Power::Overflow
    } else {
        Power::Exact(acc as u64)
    }
}

/// Compute `base^exp mod modulus` over a `width`-bit exponent domain.
///
/// Square-and-multiply with u128 intermediates; the result is always in
/// `[0, modulus)`. `pow_mod(b, 0, m, w) == 1` for every `m > 1`.
///
/// Precondition: `modulus > 0`. Callers inside the certificate check reach
/// this only behind the "no claimed prime is 0 or 1" guard, so the
/// precondition is excluded by construction rather than signalled at
/// runtime.
pub fn pow_mod(base: u64, exp: u64, modulus: u64, width: u32) -> u64 {
    debug_assert!(modulus > 0, "pow_mod: zero modulus excluded by precondition");
    debug_assert!(width >= 1 && width <= MAX_WIDTH);
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut acc: u128 = 1;
    let mut sq = base as u128 % m;
    for bit in 0..width {
        if exp >> bit & 1 == 1 {
            acc = acc * sq % m;
        }
        sq = sq * sq % m;
    }
    acc as u64
}
