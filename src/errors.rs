use thiserror::Error;

use crate::matrix_ops::MatrixShape;

/// Failures while reading or combining matrices
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Invalid format '{0}'. Use format like 2x3")]
    InvalidFormat(String),

    #[error("Invalid input. Expected {expected} values, got {found}")]
    RowLengthMismatch { expected: usize, found: usize },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Shape mismatch: {left} and {right}")]
    ShapeMismatch { left: MatrixShape, right: MatrixShape },

    #[error("No valid operations can be performed on the given matrices")]
    NoValidOperations,

    #[error("Invalid choice '{0}'")]
    InvalidChoice(String),
}

impl MatrixError {
    /// Row entry errors are recovered by prompting again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RowLengthMismatch { .. } | Self::InvalidNumber(_))
    }
}

/// Failures while parameterising a shape transform
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("Direction must be 'CW' or 'CCW', got '{0}'")]
    InvalidDirection(String),

    #[error("Invalid degrees '{0}'")]
    InvalidDegrees(String),
}

/// Failures while talking to the console
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended while waiting for {0}")]
    UnexpectedEof(&'static str),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
