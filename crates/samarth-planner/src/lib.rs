//! # samarth-planner
//!
//! Turns a free-text question into a [`samarth_core::Plan`].
//!
//! Three patterns are tried in a fixed order: rainfall comparison, district
//! extremes, then production trend. The first match wins; anything else is
//! planned as `unknown`. Extracted names go through the
//! [`samarth_resolver::NameResolver`]; a name that does not resolve is kept as
//! title-cased text rather than failing the parse.

pub mod grammar;
pub mod planner;
pub mod rules;

pub use planner::QueryPlanner;
pub use rules::{DEFAULT_COMPARE_YEARS, DEFAULT_TREND_YEARS};
