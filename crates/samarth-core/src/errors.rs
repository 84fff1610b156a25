//! Cross-cutting error types for Samarth.
//!
//! Only faults of the external collaborators travel as `Err`. Domain outcomes
//! such as "no data" or an unresolved name are values, see
//! [`Outcome`](crate::results::Outcome) and [`NameParam`](crate::plan::NameParam).
//! [`InvalidParameter`] is both: it implements `Error` so validation helpers can
//! use `?`, and it is serializable so it can be reported inside an outcome.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parameter failed validation before any store query was issued.
#[derive(Debug, Clone, Error, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[error("invalid parameter '{field}': {reason}")]
pub struct InvalidParameter {
    pub field: String,
    pub reason: String,
}

impl InvalidParameter {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by a [`DataStore`](crate::store::DataStore) or an
/// [`AliasProvider`](crate::aliases::AliasProvider) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend (database, file) failed.
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A row could not be mapped onto its record type.
    #[error("malformed row in '{relation}': {reason}")]
    Malformed { relation: String, reason: String },
}

impl StoreError {
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display() {
        let err = InvalidParameter::new("year_num", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'year_num': must be positive, got 0"
        );
    }

    #[test]
    fn backend_error_keeps_source() {
        let io = std::io::Error::other("disk gone");
        let err = StoreError::backend(io);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "store backend error: disk gone");
    }
}
