//! # samarth-resolver
//!
//! Canonical name resolution for Samarth.
//!
//! Maps free-text state and crop names to stable codes using an alias table:
//! exact (case-insensitive) match first, then the best fuzzy match if it
//! scores at least [`FUZZY_THRESHOLD`]. The scorer is pluggable through the
//! [`Similarity`] trait.

pub mod error;
pub mod providers;
pub mod resolver;
pub mod similarity;
pub mod table;

pub use error::ResolverError;
pub use providers::{BuiltinAliases, CsvAliasProvider};
pub use resolver::{Candidate, EXACT_SCORE, FUZZY_THRESHOLD, NameResolver, Resolution};
pub use similarity::{JaroWinkler, LevenshteinRatio, Similarity};
pub use table::AliasTable;
