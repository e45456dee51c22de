//! Error type for selector and transformation operations.

/// Error type for selector and transformation operations.
///
/// All failures are argument-validation failures: the operations themselves are
/// pure and deterministic, so there is nothing to retry once the inputs are
/// well-formed.
#[derive(Debug)]
pub enum TransformError {
    /// Invalid argument passed to a selector or transformation.
    InvalidArgument(String),
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for TransformError {}
