//! Error kinds raised while validating calculator input.

use thiserror::Error;

/// Input-validation failure. Both kinds end the computation that raised them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Text does not have the expected shape (component count, non-numeric parts).
    #[error("ERROR: {0}")]
    Format(String),
    /// A numeric value lies outside its allowed range (octet > 255, prefix > 32).
    #[error("ERROR: {0}")]
    Range(String),
}

impl SubnetError {
    pub fn is_format(&self) -> bool {
        matches!(self, SubnetError::Format(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, SubnetError::Range(_))
    }
}
