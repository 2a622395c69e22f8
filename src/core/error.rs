//! Error types for circle construction and composition

use miette::Diagnostic;
use std::convert::Infallible;
use thiserror::Error;

/// Result type alias for circle operations
pub type Result<T> = std::result::Result<T, CircleError>;

/// Validation failures raised by shape constructors and mutators
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CircleError {
    /// Wrong kind of argument (non-numeric radius, non-list ingredients,
    /// a rim where a tyre was expected, ...)
    #[error("invalid type: {0}")]
    #[diagnostic(code(circles::invalid_type))]
    InvalidType(String),

    /// Numeric but out of range, or a tyre/rim size mismatch
    #[error("invalid value: {0}")]
    #[diagnostic(code(circles::invalid_value))]
    InvalidValue(String),

    /// Malformed tyre label
    #[error("invalid tyre label {label:?}: {reason}")]
    #[diagnostic(
        code(circles::invalid_format),
        help("tyre labels have the form WWW/HHRDD, e.g. 235/19R19")
    )]
    InvalidFormat { label: String, reason: String },
}

impl CircleError {
    pub(crate) fn format(label: impl Into<String>, reason: impl Into<String>) -> Self {
        CircleError::InvalidFormat {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

impl From<Infallible> for CircleError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
