//! # samarth-core
//!
//! Core types shared by every Samarth crate:
//! - Store rows for the four logical relations and their filter predicates
//! - The [`DataStore`](store::DataStore) and [`AliasProvider`](aliases::AliasProvider) contracts
//! - The typed query [`Plan`](plan::Plan) produced by the planner
//! - Analysis results and the [`Outcome`](results::Outcome) envelope
//! - Cross-cutting error types

pub mod aliases;
pub mod enums;
pub mod errors;
pub mod plan;
pub mod records;
pub mod results;
pub mod store;

pub use aliases::{AliasEntry, AliasProvider};
pub use enums::{Domain, IntentKind};
pub use errors::{InvalidParameter, StoreError};
pub use plan::{Intent, NameParam, Plan};
pub use records::{CropAggregate, RainfallAggregate, RawCropRecord, RawRainfallRecord, TimeSeriesPoint};
pub use results::Outcome;
pub use store::{AggregateFilter, DataStore, RawFilter, YearFilter};
