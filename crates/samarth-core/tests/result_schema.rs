//! Serde roundtrip and JsonSchema validation for the caller-facing types.

use samarth_core::errors::InvalidParameter;
use samarth_core::plan::{Intent, NameParam, Plan};
use samarth_core::records::*;
use samarth_core::results::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn rain(code: &str, year: i32, mm: f64) -> RainfallAggregate {
    RainfallAggregate {
        state_code: code.into(),
        year,
        annual_rainfall_mm: mm,
        source_url: "imd".into(),
    }
}

fn crop(code: &str, crop_id: &str, year: i32, t: f64) -> CropAggregate {
    CropAggregate {
        state_code: code.into(),
        crop_id: crop_id.into(),
        year,
        production_tonnes: t,
        area_ha: None,
        source_url: "apy".into(),
    }
}

roundtrip_and_validate!(
    plan_trend_roundtrip,
    Plan,
    Plan {
        query: "Analyze the trend of rice production in Kerala over the past 8 years".into(),
        intent: Intent::TrendAndCorrelation {
            state: NameParam::unresolved("Kerala"),
            crop: NameParam::resolved("Rice", "RICE"),
            year_num: 8,
        },
    }
);

roundtrip_and_validate!(
    plan_unknown_roundtrip,
    Plan,
    Plan {
        query: "what is the weather".into(),
        intent: Intent::Unknown {
            raw_text: "what is the weather".into(),
        },
    }
);

roundtrip_and_validate!(
    comparison_roundtrip,
    Outcome<RainfallComparison>,
    Outcome::ready(RainfallComparison {
        years: vec![2018, 2019],
        top_m: 5,
        state_x: StateSummary {
            state_code: "MH".into(),
            mean_annual_rainfall_mm: Some(1050.5),
            rainfall_years_observed: 2,
            top_crops: vec![CropTotal {
                crop_id: "RICE".into(),
                production_tonnes: 300.0,
            }],
        },
        state_y: StateSummary {
            state_code: "GJ".into(),
            mean_annual_rainfall_mm: None,
            rainfall_years_observed: 0,
            top_crops: vec![],
        },
        rainfall_provenance: vec![rain("MH", 2018, 1000.0), rain("MH", 2019, 1101.0)],
        crop_provenance: vec![crop("MH", "RICE", 2018, 300.0)],
    })
);

roundtrip_and_validate!(
    district_roundtrip,
    Outcome<DistrictExtremes>,
    Outcome::ready(DistrictExtremes {
        state: "Punjab".into(),
        crop: "WHEAT".into(),
        max_year: 2020,
        highest: DistrictTotal {
            district: "Ludhiana".into(),
            production_tonnes: 500.0,
        },
        lowest: DistrictTotal {
            district: "Patiala".into(),
            production_tonnes: 300.0,
        },
        districts: vec![],
        provenance: vec![RawCropRecord {
            state: "Punjab".into(),
            district: Some("Ludhiana".into()),
            year: 2020,
            season: Some("Rabi".into()),
            crop: "Wheat".into(),
            area_ha: Some(12.5),
            production_tonnes: 500.0,
            source_url: "apy".into(),
        }],
    })
);

roundtrip_and_validate!(
    trend_undefined_statistics_roundtrip,
    Outcome<TrendCorrelation>,
    Outcome::ready(TrendCorrelation {
        state_code: "KL".into(),
        crop_id: "RICE".into(),
        years: vec![2019],
        production: vec![TimeSeriesPoint::new(2019, 0.0)],
        rainfall: vec![TimeSeriesPoint::new(2019, 0.0)],
        trend: None,
        correlation: None,
        production_provenance: vec![],
        rainfall_provenance: vec![],
    })
);

roundtrip_and_validate!(
    invalid_input_roundtrip,
    Outcome<TrendCorrelation>,
    Outcome::invalid(InvalidParameter::new("year_num", "must be positive, got -3"))
);
