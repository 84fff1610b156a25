//! Name domains and intent kinds.
//!
//! Both enums use `snake_case` serialization and expose `as_str()` for logging
//! and table names.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// The alias domain a free-text name is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    State,
    Crop,
}

impl Domain {
    pub const ALL: [Self; 2] = [Self::State, Self::Crop];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Crop => "crop",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "state" | "region" => Ok(Self::State),
            "crop" | "commodity" => Ok(Self::Crop),
            other => Err(format!("unknown domain '{other}' (expected 'state' or 'crop')")),
        }
    }
}

// ---------------------------------------------------------------------------
// IntentKind
// ---------------------------------------------------------------------------

/// The fixed set of intents the planner can classify a question into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    CompareRainfallAndTopCrops,
    DistrictMaxCrop,
    TrendAndCorrelation,
    Unknown,
}

impl IntentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompareRainfallAndTopCrops => "compare_rainfall_and_top_crops",
            Self::DistrictMaxCrop => "district_max_crop",
            Self::TrendAndCorrelation => "trend_and_correlation",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
