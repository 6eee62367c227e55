//! # Instance — Validated Evaluation Input
//!
//! One [`Instance`] is the complete input tuple for a single predicate
//! evaluation: the target under test, its claimed factor pair, the
//! candidate-prime list, the aligned Fermat-witness list, and the N×N
//! exponent matrix describing each candidate's `p−1` factorization in terms
//! of the same flat list (one level of Pratt induction — a fixed table, not
//! a recursive certificate tree).
//!
//! Instances are immutable once constructed and carry no state across
//! evaluations. Validation happens exactly once, at construction or load:
//! every stored value must fit the declared bit width, and the three
//! sequences must agree on the slot count. Evaluation code assumes a
//! validated instance and never re-checks ranges.
//!
//! ## File format
//!
//! Instances serialize with serde; the on-disk interchange format is TOML:
//!
//! ```toml
//! width = 4
//! target = 5
//! fact1 = 1
//! fact2 = 5
//! primes = [2, 5]
//! generators = [1, 2]
//! powers = [[0, 0], [2, 0]]
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::arith::{width_limit, MAX_WIDTH};

/// Input tuple for one evaluation of the predicate.
///
/// All integer fields range over `[0, 2^width)`; `primes`, `generators` and
/// the rows of `powers` share one slot count. `powers[i][j]` is the exponent
/// of `primes[j]` in the claimed factorization of `primes[i] - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Bit width W of every stored value, 1..=63. Fixed per deployment.
    pub width: u32,
    /// Number under test.
    pub target: u64,
    /// First claimed factor of `target`.
    pub fact1: u64,
    /// Second claimed factor of `target`.
    pub fact2: u64,
    /// Claimed primes, one per slot.
    pub primes: Vec<u64>,
    /// Fermat witness for each slot, aligned with `primes`.
    pub generators: Vec<u64>,
    /// N×N exponent matrix: `powers[i][j]` is the exponent of `primes[j]`
    /// in the factorization of `primes[i] - 1`.
    pub powers: Vec<Vec<u64>>,
}

impl Instance {
    /// Construct and validate an instance.
    pub fn new(
        width: u32,
        target: u64,
        fact1: u64,
        fact2: u64,
        primes: Vec<u64>,
        generators: Vec<u64>,
        powers: Vec<Vec<u64>>,
    ) -> Result<Self> {
        let instance = Instance {
            width,
            target,
            fact1,
            fact2,
            primes,
            generators,
            powers,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// Number of candidate-prime slots (N).
    pub fn slots(&self) -> usize {
        self.primes.len()
    }

    /// Check every structural and range invariant.
    ///
    /// Width in 1..=63, at least one slot, `generators` aligned with
    /// `primes`, `powers` square, every value below `2^width`.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.width > MAX_WIDTH {
            return Err(anyhow!(
                "width must be in 1..={}, got {}",
                MAX_WIDTH,
                self.width
            ));
        }
        let n = self.primes.len();
        if n == 0 {
            return Err(anyhow!("at least one candidate-prime slot is required"));
        }
        if self.generators.len() != n {
            return Err(anyhow!(
                "generators length {} does not match {} prime slots",
                self.generators.len(),
                n
            ));
        }
        if self.powers.len() != n {
            return Err(anyhow!(
                "powers has {} rows but there are {} prime slots",
                self.powers.len(),
                n
            ));
        }
        for (i, row) in self.powers.iter().enumerate() {
            if row.len() != n {
                return Err(anyhow!(
                    "powers row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                ));
            }
        }

        let limit = width_limit(self.width);
        let check = |name: &str, value: u64| -> Result<()> {
            if (value as u128) >= limit {
                return Err(anyhow!(
                    "{} = {} does not fit in {} bits",
                    name,
                    value,
                    self.width
                ));
            }
            Ok(())
        };
        check("target", self.target)?;
        check("fact1", self.fact1)?;
        check("fact2", self.fact2)?;
        for (i, &p) in self.primes.iter().enumerate() {
            check(&format!("primes[{}]", i), p)?;
        }
        for (i, &g) in self.generators.iter().enumerate() {
            check(&format!("generators[{}]", i), g)?;
        }
        for (i, row) in self.powers.iter().enumerate() {
            for (j, &e) in row.iter().enumerate() {
                check(&format!("powers[{}][{}]", i, j), e)?;
            }
        }
        Ok(())
    }

    /// Parse and validate an instance from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let instance: Instance = toml::from_str(content)?;
        instance.validate()?;
        Ok(instance)
    }

    /// Load and validate an instance from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read instance file {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
    }
}
