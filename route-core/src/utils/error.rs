use std::fmt::{Display, Formatter};

/// An error which can be produced by route optimization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptimizationError {
    /// Input data cannot be used: non-finite coordinates, malformed options, etc.
    /// No computation is attempted when this error is returned.
    InvalidInput(String),

    /// An algorithm could not produce a valid visiting order.
    AlgorithmFailure(String),
}

/// A type alias for result type with `OptimizationError`.
pub type RouteResult<T> = Result<T, OptimizationError>;

impl OptimizationError {
    /// Creates an invalid input error from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an algorithm failure error from a message.
    pub fn algorithm_failure(message: impl Into<String>) -> Self {
        Self::AlgorithmFailure(message.into())
    }
}

impl Display for OptimizationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::AlgorithmFailure(message) => write!(f, "algorithm failure: {message}"),
        }
    }
}

impl std::error::Error for OptimizationError {}

impl From<serde_json::Error> for OptimizationError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidInput(format!("cannot deserialize options: '{value}'"))
    }
}
