use thiserror::Error;

/// Error type for engine operations.
///
/// Every failure is a caller error: the inputs are finite and in memory, so
/// nothing here is transient and nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An argument outside the closed set the engine understands (e.g. an
    /// unknown kernel strategy name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument outside its mathematical domain.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Two sequences that must be index-aligned have different lengths.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A sequence that must be ascending is not.
    #[error("Sequence not sorted ascending at index {index}")]
    NotSorted { index: usize },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {e}"))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = EngineError::InvalidArgument("bogus".into());
        assert_eq!(e.to_string(), "Invalid argument: bogus");

        let e = EngineError::LengthMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(e.to_string(), "Length mismatch: expected 3, got 2");

        let e = EngineError::NotSorted { index: 4 };
        assert!(e.to_string().contains("index 4"));
    }
}
