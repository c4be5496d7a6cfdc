use rayon::prelude::*;
use tracing::warn;

/// The prime every coefficient and answer is reduced by
pub const MODULUS: u64 = 1_000_000_007;

/// Largest subset count the brute-force cross-check will enumerate
pub const VERIFY_LIMIT: usize = 100_000;

/// Exit status of a batch where at least one case failed
pub const EXIT_CASE_FAILED: u8 = 2;

/// One card-game query: choose `k` of the `weights`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Item weights, in input order
    pub weights: Vec<u64>,
    /// Subset size
    pub k: usize,
}

impl TestCase {
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }
}

/// Smallest table bound that covers every case in the batch
pub fn required_bound(cases: &[TestCase]) -> usize {
    cases.iter().map(TestCase::num_items).max().unwrap_or(0)
}

/// The bound to precompute: the explicit one if it covers the batch, else the batch's own
pub fn resolve_bound(cases: &[TestCase], explicit: Option<usize>) -> Result<usize, EngineError> {
    let needed = required_bound(cases);
    match explicit {
        Some(bound) if bound < needed => Err(EngineError::OutOfRange {
            requested: needed,
            bound,
        }),
        Some(bound) => Ok(bound),
        None => Ok(needed),
    }
}

/// Render one answer line in the batch output format
pub fn format_case(index: usize, result: u64) -> String {
    format!("Case #{}: {}", index, result)
}

/// Compare a computed answer with exhaustive enumeration when the case is small enough
pub fn cross_check(case: &TestCase, computed: u64) -> Result<u64, EngineError> {
    if utils::num_combinations(case.num_items(), case.k) > VERIFY_LIMIT {
        return Ok(computed);
    }
    let expected = selection::enumerate_max_sum(&case.weights, case.k)?;
    if expected != computed {
        warn!(
            "verification mismatch: engine {}, enumeration {}",
            computed, expected
        );
        return Err(EngineError::VerificationMismatch { computed, expected });
    }
    Ok(computed)
}

pub fn solve_case(
    engine: &CombinatoricsEngine,
    case: &TestCase,
    verify: bool,
) -> Result<u64, EngineError> {
    let result = engine.solve_max_weighted_selection(&case.weights, case.k)?;
    if verify {
        cross_check(case, result)
    } else {
        Ok(result)
    }
}

/// Solve every case, in input order, optionally spreading the work over all cores
pub fn solve_batch(
    engine: &CombinatoricsEngine,
    cases: &[TestCase],
    parallel: bool,
    verify: bool,
) -> Vec<Result<u64, EngineError>> {
    if parallel {
        cases
            .par_iter()
            .map(|case| solve_case(engine, case, verify))
            .collect()
    } else {
        cases
            .iter()
            .map(|case| solve_case(engine, case, verify))
            .collect()
    }
}

/// Output of a solved batch: answer lines for stdout, failure lines for stderr
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub answers: Vec<String>,
    pub failures: Vec<String>,
}

impl BatchReport {
    pub fn from_results(results: Vec<Result<u64, EngineError>>) -> Self {
        let mut report = BatchReport::default();
        for (i, result) in results.into_iter().enumerate() {
            match result {
                Ok(value) => report.answers.push(format_case(i + 1, value)),
                Err(e) => report.failures.push(format!("Case #{}: {}", i + 1, e)),
            }
        }
        report
    }

    pub fn exit_code(&self) -> u8 {
        if self.failures.is_empty() {
            0
        } else {
            EXIT_CASE_FAILED
        }
    }
}

// Module declarations
pub mod binomial;
pub mod error;
pub mod parser;
pub mod puzzles;
pub mod selection;
pub mod utils;

pub use binomial::BinomialTable;
pub use error::{EngineError, ParseError};
pub use selection::CombinatoricsEngine;
