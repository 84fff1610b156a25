//! Resolver error types.

use samarth_core::StoreError;

/// Errors raised while building a resolver.
///
/// Resolution itself never fails: an unknown name is a `NotFound` value.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// The alias provider failed.
    #[error("alias provider error: {0}")]
    Provider(#[from] StoreError),

    /// Fuzzy threshold outside the 0..=100 score range.
    #[error("fuzzy threshold must be within 0..=100, got {0}")]
    InvalidThreshold(u8),
}
