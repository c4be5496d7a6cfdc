use thiserror::Error;

/// Failures raised by the combinatorics engine and the puzzle solvers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("requested {requested} exceeds the precomputed bound {bound}")]
    OutOfRange { requested: usize, bound: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("binomial table for bound {bound} does not fit in memory")]
    TableTooLarge { bound: usize },

    #[error("verification failed: computed {computed}, enumeration gives {expected}")]
    VerificationMismatch { computed: u64, expected: u64 },
}

/// Malformed batch input, located by 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        ParseError {
            line,
            message: message.into(),
        }
    }
}
