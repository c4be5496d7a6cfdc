use crate::error::EngineError;
use std::collections::BTreeSet;

/// Largest `(sum of a contiguous non-empty run) mod m` over the whole slice.
///
/// A run ending at `i` has sum `prefix[i] - prefix[j]`; its residue is best when
/// `prefix[j]` is the smallest earlier prefix strictly greater than `prefix[i]`.
pub fn max_subarray_sum_mod(values: &[u64], m: u64) -> Result<u64, EngineError> {
    if m == 0 {
        return Err(EngineError::InvalidArgument("modulus must be positive".into()));
    }

    let mut prefixes = BTreeSet::new();
    let mut prefix = 0u64;
    let mut best = 0u64;
    for &value in values {
        prefix = add_mod(prefix, value % m, m);
        best = best.max(prefix);
        if let Some(&next) = prefixes.range(prefix + 1..).next() {
            best = best.max(prefix + (m - next));
        }
        prefixes.insert(prefix);
    }
    Ok(best)
}

/// `(a + b) mod m` for residues `a, b < m`, without overflowing near `u64::MAX`
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= m - b {
        a - (m - b)
    } else {
        a + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn brute_force(values: &[u64], m: u64) -> u64 {
        let mut best = 0;
        for start in 0..values.len() {
            let mut sum = 0;
            for &value in &values[start..] {
                sum = (sum + value) % m;
                best = best.max(sum);
            }
        }
        best
    }

    #[test]
    fn hackerrank_sample() {
        assert_eq!(max_subarray_sum_mod(&[3, 3, 9, 9, 5], 7), Ok(6));
        assert_eq!(max_subarray_sum_mod(&[1, 2, 3], 2), Ok(1));
    }

    #[test]
    fn edge_cases() {
        assert_eq!(max_subarray_sum_mod(&[], 5), Ok(0));
        assert_eq!(max_subarray_sum_mod(&[10, 20], 1), Ok(0));
        assert!(max_subarray_sum_mod(&[1], 0).is_err());
        assert_eq!(
            max_subarray_sum_mod(&[u64::MAX - 1, u64::MAX - 1], u64::MAX),
            Ok(u64::MAX - 1)
        );
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let n = rng.gen_range(1..30);
            let m = rng.gen_range(1..50u64);
            let values: Vec<u64> = (0..n).map(|_| rng.gen_range(0..1_000)).collect();
            assert_eq!(max_subarray_sum_mod(&values, m), Ok(brute_force(&values, m)));
        }
    }
}
