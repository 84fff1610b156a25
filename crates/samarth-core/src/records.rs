//! Rows of the four logical relations exposed by a data store.
//!
//! Raw rows mirror the ingested source files; aggregate rows are keyed by
//! canonical codes. Every row carries `source_url` so results can report the
//! exact rows they were computed from.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One raw rainfall observation as ingested.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RawRainfallRecord {
    pub state: String,
    pub district: Option<String>,
    pub year: i32,
    pub month: Option<String>,
    pub rainfall_mm: f64,
    pub source_url: String,
}

/// One raw crop production observation as ingested.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RawCropRecord {
    pub state: String,
    pub district: Option<String>,
    pub year: i32,
    pub season: Option<String>,
    pub crop: String,
    pub area_ha: Option<f64>,
    pub production_tonnes: f64,
    pub source_url: String,
}

/// Annual rainfall for a state, keyed by canonical state code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RainfallAggregate {
    pub state_code: String,
    pub year: i32,
    pub annual_rainfall_mm: f64,
    pub source_url: String,
}

/// Annual production of one crop in one state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CropAggregate {
    pub state_code: String,
    pub crop_id: String,
    pub year: i32,
    pub production_tonnes: f64,
    pub area_ha: Option<f64>,
    pub source_url: String,
}

/// One aggregated observation in a year-indexed series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub value: f64,
}

impl TimeSeriesPoint {
    #[must_use]
    pub const fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}
