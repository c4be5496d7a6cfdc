use crate::binomial::BinomialTable;
use crate::error::EngineError;
use crate::utils::{mod_add, mod_mul};
use crate::MODULUS;
use itertools::Itertools;

/// Answers max-weighted selection queries against a precomputed binomial table
#[derive(Debug, Clone)]
pub struct CombinatoricsEngine {
    table: BinomialTable,
}

impl CombinatoricsEngine {
    /// Build the table once; every query afterwards only reads it
    pub fn precompute(bound: usize) -> Result<Self, EngineError> {
        Ok(CombinatoricsEngine {
            table: BinomialTable::new(bound)?,
        })
    }

    pub fn bound(&self) -> usize {
        self.table.bound()
    }

    /// Sum, over every k-subset of `weights`, of the subset's largest value, modulo P.
    ///
    /// After sorting, the value at position j from the top is the maximum of exactly
    /// C(n-j-1, k-1) subsets: the remaining k-1 picks come from the n-j-1 smaller items.
    pub fn solve_max_weighted_selection(
        &self,
        weights: &[u64],
        k: usize,
    ) -> Result<u64, EngineError> {
        let n = weights.len();
        if k > n {
            return Err(EngineError::InvalidArgument(format!(
                "subset size {} exceeds item count {}",
                k, n
            )));
        }
        if n > self.table.bound() {
            return Err(EngineError::OutOfRange {
                requested: n,
                bound: self.table.bound(),
            });
        }
        if k == 0 {
            return Ok(0);
        }

        let mut sorted = weights.to_vec();
        sorted.sort_unstable();

        let mut sum = 0;
        for (j, &value) in sorted.iter().rev().take(n - k + 1).enumerate() {
            let heads = self.table.get(n - j - 1, k - 1)?;
            sum = mod_add(sum, mod_mul(value, heads));
        }
        Ok(sum)
    }
}

/// Reference answer by enumerating all C(n, k) subsets; only viable for small inputs
pub fn enumerate_max_sum(weights: &[u64], k: usize) -> Result<u64, EngineError> {
    if k > weights.len() {
        return Err(EngineError::InvalidArgument(format!(
            "subset size {} exceeds item count {}",
            k,
            weights.len()
        )));
    }
    if k == 0 {
        return Ok(0);
    }
    Ok(weights
        .iter()
        .combinations(k)
        .filter_map(|subset| subset.into_iter().max())
        .fold(0, |sum, &max| mod_add(sum, max % MODULUS)))
}
