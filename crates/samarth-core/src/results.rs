//! Analysis results returned to callers.
//!
//! Each analysis returns an [`Outcome`]: a populated result, an explicit
//! "no data" report, or an input-validation failure. Every populated result
//! carries the rows it was computed from.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidParameter;
use crate::records::{CropAggregate, RainfallAggregate, RawCropRecord, TimeSeriesPoint};

/// Envelope for every analysis call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ready { result: T },
    NoData { reason: String },
    InvalidInput { error: InvalidParameter },
}

impl<T> Outcome<T> {
    pub const fn ready(result: T) -> Self {
        Self::Ready { result }
    }

    pub fn no_data(reason: impl Into<String>) -> Self {
        Self::NoData {
            reason: reason.into(),
        }
    }

    pub const fn invalid(error: InvalidParameter) -> Self {
        Self::InvalidInput { error }
    }

    #[must_use]
    pub const fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready { result } => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_ready(self) -> Option<T> {
        match self {
            Self::Ready { result } => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ready { result } => Outcome::Ready { result: f(result) },
            Self::NoData { reason } => Outcome::NoData { reason },
            Self::InvalidInput { error } => Outcome::InvalidInput { error },
        }
    }
}

impl<T> From<InvalidParameter> for Outcome<T> {
    fn from(error: InvalidParameter) -> Self {
        Self::invalid(error)
    }
}

// ---------------------------------------------------------------------------
// Rainfall comparison
// ---------------------------------------------------------------------------

/// Summed production of one crop over the requested years.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CropTotal {
    pub crop_id: String,
    pub production_tonnes: f64,
}

/// Per-state half of a rainfall comparison.
///
/// `mean_annual_rainfall_mm` is `None` when the store had no rainfall rows for
/// this state in the requested years.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StateSummary {
    pub state_code: String,
    pub mean_annual_rainfall_mm: Option<f64>,
    pub rainfall_years_observed: usize,
    pub top_crops: Vec<CropTotal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RainfallComparison {
    pub years: Vec<i32>,
    pub top_m: usize,
    pub state_x: StateSummary,
    pub state_y: StateSummary,
    pub rainfall_provenance: Vec<RainfallAggregate>,
    pub crop_provenance: Vec<CropAggregate>,
}

// ---------------------------------------------------------------------------
// District extremes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DistrictTotal {
    pub district: String,
    pub production_tonnes: f64,
}

/// Highest and lowest producing districts in the most recent year on record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DistrictExtremes {
    pub state: String,
    pub crop: String,
    pub max_year: i32,
    pub highest: DistrictTotal,
    pub lowest: DistrictTotal,
    /// Every district total for `max_year`, in first-appearance order.
    pub districts: Vec<DistrictTotal>,
    pub provenance: Vec<RawCropRecord>,
}

// ---------------------------------------------------------------------------
// Trend and correlation
// ---------------------------------------------------------------------------

/// Ordinary least-squares fit of production against year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrendStatistics {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub p_value: f64,
    pub std_err: f64,
}

/// Production trend and its correlation with rainfall.
///
/// Both series are aligned to `years` with zero-fill. `trend` is `None` when
/// fewer than two distinct years were requested; `correlation` is `None` when
/// it is mathematically undefined (fewer than two points or a constant series).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrendCorrelation {
    pub state_code: String,
    pub crop_id: String,
    pub years: Vec<i32>,
    pub production: Vec<TimeSeriesPoint>,
    pub rainfall: Vec<TimeSeriesPoint>,
    pub trend: Option<TrendStatistics>,
    pub correlation: Option<f64>,
    pub production_provenance: Vec<CropAggregate>,
    pub rainfall_provenance: Vec<RainfallAggregate>,
}
