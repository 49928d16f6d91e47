//! Error types for the synthesis engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced at the parse/validate boundary.
///
/// The evaluators themselves are total; everything that can go wrong is
/// caught while turning user input into a spec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Text that could not be turned into the numbers a spec needs:
    /// non-numeric text, missing fields, mismatched coefficient lengths.
    #[error("malformed input in '{field}': {reason}")]
    MalformedInput {
        /// Field the bad input came from.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A well-formed number that makes the computation degenerate.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = EngineError::malformed("a_k", "expected a number at position 2, found 'x'");
        assert_eq!(
            err.to_string(),
            "malformed input in 'a_k': expected a number at position 2, found 'x'"
        );
        assert!(err.is_malformed());
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn invalid_parameter_predicate() {
        let err = EngineError::invalid("T", "period must be non-zero");
        assert!(err.is_invalid_parameter());
        assert_eq!(err.to_string(), "invalid parameter 'T': period must be non-zero");
    }
}
