//! The structured plan produced by the query planner.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IntentKind;

/// A region or crop name extracted from a question.
///
/// `text` is the extracted phrase in title case; `code` is the canonical code
/// when the name resolver found one. An unresolved name is not an error: it is
/// carried as text and simply matches no aggregate rows later.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NameParam {
    pub text: String,
    pub code: Option<String>,
}

impl NameParam {
    pub fn resolved(text: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code: Some(code.into()),
        }
    }

    pub fn unresolved(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code: None,
        }
    }

    /// The canonical code when resolved, otherwise the extracted text.
    #[must_use]
    pub fn key(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.text)
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.code.is_some()
    }
}

/// Intent plus its typed parameters.
///
/// `year_num` is kept signed: the planner accepts any integer and the engine
/// rejects non-positive counts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    CompareRainfallAndTopCrops {
        state_x: NameParam,
        state_y: NameParam,
        year_num: i64,
    },
    DistrictMaxCrop {
        state: NameParam,
        crop: NameParam,
    },
    TrendAndCorrelation {
        state: NameParam,
        crop: NameParam,
        year_num: i64,
    },
    Unknown {
        raw_text: String,
    },
}

impl Intent {
    #[must_use]
    pub const fn kind(&self) -> IntentKind {
        match self {
            Self::CompareRainfallAndTopCrops { .. } => IntentKind::CompareRainfallAndTopCrops,
            Self::DistrictMaxCrop { .. } => IntentKind::DistrictMaxCrop,
            Self::TrendAndCorrelation { .. } => IntentKind::TrendAndCorrelation,
            Self::Unknown { .. } => IntentKind::Unknown,
        }
    }

    /// Names that the resolver could not map to a code.
    #[must_use]
    pub fn unresolved_names(&self) -> Vec<&NameParam> {
        let names: Vec<&NameParam> = match self {
            Self::CompareRainfallAndTopCrops {
                state_x, state_y, ..
            } => vec![state_x, state_y],
            Self::DistrictMaxCrop { state, crop } | Self::TrendAndCorrelation { state, crop, .. } => {
                vec![state, crop]
            }
            Self::Unknown { .. } => Vec::new(),
        };
        names.into_iter().filter(|n| !n.is_resolved()).collect()
    }
}

/// A classified question: the original text plus the intent it mapped to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Plan {
    pub query: String,
    #[serde(flatten)]
    pub intent: Intent,
}

impl Plan {
    #[must_use]
    pub const fn kind(&self) -> IntentKind {
        self.intent.kind()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn key_prefers_code() {
        assert_eq!(NameParam::resolved("Maharashtra", "MH").key(), "MH");
        assert_eq!(NameParam::unresolved("Atlantis").key(), "Atlantis");
    }

    #[test]
    fn plan_serializes_flat_with_intent_tag() {
        let plan = Plan {
            query: "compare rainfall in maharashtra and gujarat".into(),
            intent: Intent::CompareRainfallAndTopCrops {
                state_x: NameParam::resolved("Maharashtra", "MH"),
                state_y: NameParam::unresolved("Gujrat Coast"),
                year_num: 5,
            },
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["intent"], "compare_rainfall_and_top_crops");
        assert_eq!(value["year_num"], 5);
        assert_eq!(value["state_x"]["code"], "MH");
        assert!(value["state_y"]["code"].is_null());

        let back: Plan = serde_json::from_value(value).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn unresolved_names_lists_only_missing_codes() {
        let intent = Intent::DistrictMaxCrop {
            state: NameParam::resolved("Punjab", "PB"),
            crop: NameParam::unresolved("Saffron"),
        };
        let missing = intent.unresolved_names();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].text, "Saffron");
    }
}
