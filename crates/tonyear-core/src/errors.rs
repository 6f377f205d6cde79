use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TonYearError {
    /// A caller-supplied value violates a precondition.
    ///
    /// `parameter` names the offending argument so that callers can report it back to the user.
    #[error("Invalid {parameter}: {reason}")]
    InvalidArgument { parameter: String, reason: String },
}

impl TonYearError {
    pub fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        TonYearError::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that caused the error
    pub fn parameter(&self) -> &str {
        match self {
            TonYearError::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

/// Convenience type for `Result<T, TonYearError>`.
pub type TonYearResult<T> = Result<T, TonYearError>;
