//! # samarth-analytics
//!
//! The three analyses behind Samarth's answers, run against any
//! [`DataStore`](samarth_core::DataStore):
//!
//! - [`AnalyticsEngine::compare_rainfall_and_top_crops`]
//! - [`AnalyticsEngine::district_max_crop`]
//! - [`AnalyticsEngine::trend_and_correlation`]
//!
//! Each returns an [`Outcome`](samarth_core::Outcome): a result, a no-data
//! report, or a rejected parameter. Only store failures are errors.

mod compare;
mod district;
mod engine;
mod error;
pub mod stats;
mod trend;
pub mod validate;

pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use validate::year_window;
