//! Unified error types for the domain layer
//!
//! Every fallible operation in this crate reports one of two conditions:
//! the argument had the wrong type, or it had the right type but broke a
//! domain constraint (negative, zero, larger than what is available).

use std::fmt;

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Argument has the wrong type (e.g., a non-finite float where a real
    /// number is required, or a string where JSON input expects a number)
    #[error("Type mismatch: {0}")]
    Type(String),

    /// Argument has the right type but violates a domain constraint
    #[error("Invalid value: {0}")]
    Value(String),
}

/// The two error categories, without the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type"),
            Self::Value => write!(f, "value"),
        }
    }
}

impl DomainError {
    /// Creates a type error for arguments of the wrong kind.
    ///
    /// # Example
    /// ```ignore
    /// if !amount.is_finite() {
    ///     return Err(DomainError::type_mismatch("Amount must be a real number"));
    /// }
    /// ```
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Creates a value error for arguments outside the allowed domain.
    ///
    /// Use this when the type is right but the value is not:
    /// - Negative where only non-negative values make sense
    /// - Zero or negative where a strictly positive value is required
    /// - Larger than the quantity available to subtract from
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }

    /// Returns which of the two categories this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(_) => ErrorKind::Type,
            Self::Value(_) => ErrorKind::Value,
        }
    }

    /// Returns the message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Type(msg) | Self::Value(msg) => msg,
        }
    }
}
