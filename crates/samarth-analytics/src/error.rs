use samarth_core::StoreError;

/// Faults that abort an analysis.
///
/// Missing rows and bad parameters are not errors; they come back as
/// [`samarth_core::Outcome`] variants.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("data store query failed: {0}")]
    Store(#[from] StoreError),
}
