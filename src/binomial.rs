//! Pascal's triangle of binomial coefficients modulo the prime.

use crate::error::EngineError;
use crate::MODULUS;
use std::time::Instant;
use tracing::debug;

/// C(n, k) mod P for every 0 <= n, k <= bound.
///
/// Only the lower triangle (k <= n) is stored; reads mirror across the diagonal,
/// so `get(n, k) == get(k, n)`. Residues are below 2^32 and kept as u32.
#[derive(Debug, Clone)]
pub struct BinomialTable {
    bound: usize,
    entries: Vec<u32>,
}

impl BinomialTable {
    /// Fill the table row by row with Pascal's recurrence.
    ///
    /// Fails with `TableTooLarge` when the triangle cannot be sized or allocated.
    pub fn new(bound: usize) -> Result<Self, EngineError> {
        let start = Instant::now();
        let too_large = || EngineError::TableTooLarge { bound };
        let len = bound
            .checked_add(1)
            .and_then(|rows| rows.checked_mul(rows.checked_add(1)?))
            .map(|cells| cells / 2)
            .ok_or_else(too_large)?;
        let mut entries: Vec<u32> = Vec::new();
        entries.try_reserve_exact(len).map_err(|_| too_large())?;
        entries.resize(len, 0);

        for n in 0..=bound {
            let row = Self::row_offset(n);
            entries[row] = 1;
            entries[row + n] = 1;
            if n >= 2 {
                let prev = Self::row_offset(n - 1);
                for k in 1..n {
                    let sum = entries[prev + k - 1] as u64 + entries[prev + k] as u64;
                    entries[row + k] = (sum % MODULUS) as u32;
                }
            }
        }

        debug!(
            "built binomial table: bound {}, {} entries in {:?}",
            bound,
            entries.len(),
            start.elapsed()
        );
        Ok(BinomialTable { bound, entries })
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Mirrored read: `C(max(n, k), min(n, k)) mod P`
    pub fn get(&self, n: usize, k: usize) -> Result<u64, EngineError> {
        let requested = n.max(k);
        if requested > self.bound {
            return Err(EngineError::OutOfRange {
                requested,
                bound: self.bound,
            });
        }
        let (row, col) = (requested, n.min(k));
        Ok(self.entries[Self::row_offset(row) + col] as u64)
    }

    /// Binomial coefficient proper: zero when k > n
    pub fn choose(&self, n: usize, k: usize) -> Result<u64, EngineError> {
        if k > n {
            if k > self.bound {
                return Err(EngineError::OutOfRange {
                    requested: k,
                    bound: self.bound,
                });
            }
            return Ok(0);
        }
        self.get(n, k)
    }

    #[inline]
    fn row_offset(n: usize) -> usize {
        n * (n + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::binomial_mod;

    #[test]
    fn matches_factorial_formula() {
        let table = BinomialTable::new(60).unwrap();
        for n in 0..=60 {
            for k in 0..=n {
                assert_eq!(table.get(n, k).unwrap(), binomial_mod(n, k), "C({n}, {k})");
            }
        }
    }

    #[test]
    fn symmetry_and_boundaries() {
        let table = BinomialTable::new(200).unwrap();
        for n in 0..=200 {
            assert_eq!(table.get(n, 0).unwrap(), 1);
            assert_eq!(table.get(0, n).unwrap(), 1);
            assert_eq!(table.get(n, n).unwrap(), 1);
            for k in 0..=n {
                assert_eq!(table.get(n, k).unwrap(), table.get(n, n - k).unwrap());
                assert_eq!(table.get(n, k).unwrap(), table.get(k, n).unwrap());
            }
        }
    }

    #[test]
    fn reduces_modulo_prime() {
        let table = BinomialTable::new(1000).unwrap();
        for (n, k) in [(100, 50), (1000, 500), (999, 3)] {
            let value = table.get(n, k).unwrap();
            assert!(value < MODULUS);
            assert_eq!(value, binomial_mod(n, k));
        }
    }

    #[test]
    fn out_of_range() {
        let table = BinomialTable::new(10).unwrap();
        assert_eq!(
            table.get(11, 2),
            Err(EngineError::OutOfRange {
                requested: 11,
                bound: 10
            })
        );
        assert!(table.get(2, 11).is_err());
        assert_eq!(table.choose(3, 5), Ok(0));
        assert!(table.choose(3, 12).is_err());
    }

    #[test]
    fn empty_bound() {
        let table = BinomialTable::new(0).unwrap();
        assert_eq!(table.get(0, 0), Ok(1));
        assert!(table.get(1, 0).is_err());
    }

    #[test]
    fn oversized_bound_is_an_error() {
        assert_eq!(
            BinomialTable::new(usize::MAX).unwrap_err(),
            EngineError::TableTooLarge { bound: usize::MAX }
        );
        // The cell count fits in usize, but its byte size exceeds isize::MAX.
        assert_eq!(
            BinomialTable::new(3_000_000_000).unwrap_err(),
            EngineError::TableTooLarge {
                bound: 3_000_000_000
            }
        );
    }
}
