use thiserror::Error;

/// Failure of a type checker to run at all. Findings are never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckerError {
    #[error("Unsupported file for script checking: {0}")]
    UnsupportedFile(String),

    #[error("Checker failed: {0}")]
    Internal(String),
}
