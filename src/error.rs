use thiserror::Error;

/// Failures surfaced by expression evaluation.
///
/// Parse failures carry enough context to point at the offending token;
/// domain failures carry the message of the arithmetic operation or
/// registered function that raised them, unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Mismatched parentheses")]
    MismatchedParens,

    #[error("Invalid number format: '{0}'")]
    InvalidNumber(String),

    #[error("Expected number at position {0}")]
    ExpectedNumber(usize),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("Unexpected trailing input at position {0}")]
    TrailingInput(usize),

    #[error("{0}")]
    Domain(String),
}

impl EvalError {
    /// Builds a domain error from any displayable message.
    pub fn domain(message: impl Into<String>) -> Self {
        EvalError::Domain(message.into())
    }
}
