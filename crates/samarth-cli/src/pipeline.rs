//! Question answering: plan, choose years, run the matching analysis.
//!
//! The year window for the comparison and trend intents ends at the latest
//! year in the rainfall aggregates and spans the plan's `year_num`.

use samarth_analytics::{AnalyticsEngine, AnalyticsError, validate};
use samarth_core::results::{DistrictExtremes, RainfallComparison, TrendCorrelation};
use samarth_core::{DataStore, Domain, Intent, InvalidParameter, NameParam, Outcome, Plan};
use samarth_planner::QueryPlanner;
use samarth_resolver::NameResolver;
use serde::Serialize;

/// Questions offered back when a question is not understood.
pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "Compare rainfall in Maharashtra and Gujarat for the last 10 years",
    "Identify the district in Punjab with the highest production of wheat",
    "Analyze the trend of rice production in Kerala over the past 8 years",
];

/// A planned question and what its analysis produced.
#[derive(Debug, Serialize)]
pub struct Answer {
    pub plan: Plan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<i32>>,
    pub result: AnswerResult,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerResult {
    Comparison(Outcome<RainfallComparison>),
    DistrictExtremes(Outcome<DistrictExtremes>),
    Trend(Outcome<TrendCorrelation>),
    Unknown {
        raw_text: String,
        examples: Vec<String>,
    },
    /// The question itself was unusable (e.g. blank).
    InvalidQuestion { error: InvalidParameter },
}

impl AnswerResult {
    /// Label for log lines and table headers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Comparison(_) => "comparison",
            Self::DistrictExtremes(_) => "district_extremes",
            Self::Trend(_) => "trend",
            Self::Unknown { .. } => "unknown",
            Self::InvalidQuestion { .. } => "invalid_question",
        }
    }
}

/// Everything needed to answer questions against one store.
pub struct Pipeline<'a, S: ?Sized> {
    resolver: &'a NameResolver,
    planner: QueryPlanner<'a>,
    engine: AnalyticsEngine<'a, S>,
    store: &'a S,
    top_m: usize,
}

impl<'a, S: DataStore + ?Sized> Pipeline<'a, S> {
    pub const fn new(resolver: &'a NameResolver, store: &'a S, top_m: usize) -> Self {
        Self {
            resolver,
            planner: QueryPlanner::new(resolver),
            engine: AnalyticsEngine::new(store),
            store,
            top_m,
        }
    }

    /// Answer one question.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] only when the store fails; every other
    /// problem is reported inside the [`Answer`].
    pub fn answer(&self, question: &str) -> Result<Answer, AnalyticsError> {
        let plan = self.planner.parse(question);

        if let Err(error) = validate::non_blank("question", question) {
            return Ok(Answer {
                plan,
                years: None,
                result: AnswerResult::InvalidQuestion { error },
            });
        }

        let (years, result) = match &plan.intent {
            Intent::CompareRainfallAndTopCrops {
                state_x,
                state_y,
                year_num,
            } => match self.window(*year_num)? {
                Ok(years) => {
                    let outcome = self.engine.compare_rainfall_and_top_crops(
                        state_x.key(),
                        state_y.key(),
                        &years,
                        self.top_m,
                    )?;
                    (Some(years), AnswerResult::Comparison(outcome))
                }
                Err(outcome) => (None, AnswerResult::Comparison(outcome)),
            },
            Intent::DistrictMaxCrop { state, crop } => {
                let spellings = self.raw_state_names(state);
                let outcome = self
                    .engine
                    .district_max_crop_in(&state.text, &spellings, crop.key())?;
                (None, AnswerResult::DistrictExtremes(outcome))
            }
            Intent::TrendAndCorrelation {
                state,
                crop,
                year_num,
            } => match self.window(*year_num)? {
                Ok(years) => {
                    let outcome = self
                        .engine
                        .trend_and_correlation(state.key(), crop.key(), &years)?;
                    (Some(years), AnswerResult::Trend(outcome))
                }
                Err(outcome) => (None, AnswerResult::Trend(outcome)),
            },
            Intent::Unknown { raw_text } => (
                None,
                AnswerResult::Unknown {
                    raw_text: raw_text.clone(),
                    examples: EXAMPLE_QUESTIONS.iter().map(ToString::to_string).collect(),
                },
            ),
        };

        for name in plan.intent.unresolved_names() {
            tracing::warn!(name = %name.text, "name did not resolve; matching it as text");
        }
        tracing::info!(intent = %plan.kind(), result = result.label(), "answered question");

        Ok(Answer {
            plan,
            years,
            result,
        })
    }

    /// Names a state may carry in raw records, which hold state names rather
    /// than codes: every alias of the resolved code, else the extracted text.
    fn raw_state_names<'n>(&'n self, state: &'n NameParam) -> Vec<&'n str> {
        let Some(code) = state.code.as_deref() else {
            return vec![state.text.as_str()];
        };
        let mut names: Vec<&str> = self
            .resolver
            .table()
            .aliases_of(Domain::State, code)
            .map(|alias| alias.alias.as_str())
            .collect();
        names.push(state.text.as_str());
        names
    }

    /// The `year_num` most recent years with rainfall data, or the outcome to
    /// report instead.
    fn window<T>(&self, year_num: i64) -> Result<Result<Vec<i32>, Outcome<T>>, AnalyticsError> {
        if let Err(error) = validate::year_count(year_num) {
            return Ok(Err(Outcome::invalid(error)));
        }
        let Some(latest) = self.store.latest_rainfall_year()? else {
            return Ok(Err(Outcome::no_data("no rainfall data loaded")));
        };
        Ok(validate::year_window(latest, year_num).map_err(Outcome::invalid))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use samarth_core::{AliasEntry, CropAggregate, IntentKind, RainfallAggregate, RawCropRecord};
    use samarth_lake::SamarthLake;
    use samarth_resolver::AliasTable;

    use super::*;

    fn rain(state_code: &str, year: i32, mm: f64) -> RainfallAggregate {
        RainfallAggregate {
            state_code: state_code.into(),
            year,
            annual_rainfall_mm: mm,
            source_url: "https://data.example/rain".into(),
        }
    }

    fn crop(state_code: &str, crop_id: &str, year: i32, tonnes: f64) -> CropAggregate {
        CropAggregate {
            state_code: state_code.into(),
            crop_id: crop_id.into(),
            year,
            production_tonnes: tonnes,
            area_ha: None,
            source_url: "https://data.example/crop".into(),
        }
    }

    fn raw(state: &str, district: &str, crop: &str, year: i32, tonnes: f64) -> RawCropRecord {
        RawCropRecord {
            state: state.into(),
            district: Some(district.into()),
            year,
            season: None,
            crop: crop.into(),
            area_ha: None,
            production_tonnes: tonnes,
            source_url: "https://data.example/raw".into(),
        }
    }

    #[fixture]
    fn resolver() -> NameResolver {
        NameResolver::new(AliasTable::from_entries(
            [
                AliasEntry::new("MH", "maharashtra"),
                AliasEntry::new("GJ", "gujarat"),
                AliasEntry::new("PB", "punjab"),
            ],
            [
                AliasEntry::new("RICE", "rice"),
                AliasEntry::new("WHEAT", "wheat"),
            ],
        ))
    }

    #[fixture]
    fn lake() -> SamarthLake {
        let lake = SamarthLake::open_in_memory().expect("open lake");
        let mut rainfall = Vec::new();
        let mut crops = Vec::new();
        for year in 2016..=2020 {
            let step = f64::from(year - 2016);
            rainfall.push(rain("MH", year, 1000.0 + 100.0 * step));
            rainfall.push(rain("GJ", year, 600.0));
            crops.push(crop("MH", "RICE", year, 10.0 + 5.0 * step));
            crops.push(crop("GJ", "WHEAT", year, 40.0));
        }
        lake.insert_rainfall_aggregates(&rainfall).unwrap();
        lake.insert_crop_aggregates(&crops).unwrap();
        lake.insert_raw_crop(&[
            raw("Punjab", "Ludhiana", "Wheat", 2020, 500.0),
            raw("Punjab", "Patiala", "Wheat", 2020, 300.0),
            raw("Punjab", "Ludhiana", "Wheat", 2019, 900.0),
        ])
        .unwrap();
        lake
    }

    #[rstest]
    fn comparison_window_ends_at_latest_rainfall_year(resolver: NameResolver, lake: SamarthLake) {
        let pipeline = Pipeline::new(&resolver, &lake, 5);
        let answer = pipeline
            .answer("Compare rainfall in Maharashtra and Gujarat for the last 3 years")
            .unwrap();

        assert_eq!(answer.plan.kind(), IntentKind::CompareRainfallAndTopCrops);
        assert_eq!(answer.years, Some(vec![2018, 2019, 2020]));
        let AnswerResult::Comparison(outcome) = answer.result else {
            panic!("expected a comparison");
        };
        let result = outcome.into_ready().expect("comparison should be ready");
        assert_eq!(result.state_x.state_code, "MH");
        assert_eq!(result.state_x.mean_annual_rainfall_mm, Some(1300.0));
        assert_eq!(result.state_y.mean_annual_rainfall_mm, Some(600.0));
        assert_eq!(result.state_x.top_crops[0].crop_id, "RICE");
        assert_eq!(result.state_x.top_crops[0].production_tonnes, 75.0);
    }

    #[rstest]
    fn default_comparison_window_is_five_years(resolver: NameResolver, lake: SamarthLake) {
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Compare rainfall in Maharashtra and Gujarat")
            .unwrap();
        assert_eq!(answer.years, Some((2016..=2020).collect()));
    }

    #[rstest]
    fn empty_store_reports_no_rainfall(resolver: NameResolver) {
        let lake = SamarthLake::open_in_memory().unwrap();
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Compare rainfall in Maharashtra and Gujarat for the last 3 years")
            .unwrap();

        assert_eq!(answer.years, None);
        let AnswerResult::Comparison(Outcome::NoData { reason }) = answer.result else {
            panic!("expected no data");
        };
        assert_eq!(reason, "no rainfall data loaded");
    }

    #[rstest]
    fn negative_year_count_is_invalid(resolver: NameResolver, lake: SamarthLake) {
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Compare rainfall in Maharashtra and Gujarat for the last -2 years")
            .unwrap();
        let AnswerResult::Comparison(outcome) = answer.result else {
            panic!("expected a comparison");
        };
        assert!(outcome.is_invalid());
        assert_eq!(answer.years, None);
    }

    #[rstest]
    fn blank_question_is_invalid_not_unknown(resolver: NameResolver, lake: SamarthLake) {
        let answer = Pipeline::new(&resolver, &lake, 5).answer("   ").unwrap();
        let AnswerResult::InvalidQuestion { error } = answer.result else {
            panic!("expected an invalid question");
        };
        assert_eq!(error.field, "question");
    }

    #[rstest]
    fn unknown_question_offers_examples(resolver: NameResolver, lake: SamarthLake) {
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("What is the weather today?")
            .unwrap();
        let AnswerResult::Unknown { raw_text, examples } = answer.result else {
            panic!("expected unknown");
        };
        assert_eq!(raw_text, "What is the weather today?");
        assert_eq!(examples, EXAMPLE_QUESTIONS.map(String::from).to_vec());
    }

    #[rstest]
    fn district_question_reads_raw_records_by_state_name(resolver: NameResolver, lake: SamarthLake) {
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Identify the district in Punjab with the highest production of wheat")
            .unwrap();
        assert_eq!(answer.years, None);
        let AnswerResult::DistrictExtremes(outcome) = answer.result else {
            panic!("expected district extremes");
        };
        let result = outcome.into_ready().expect("district result should be ready");
        assert_eq!(result.state, "Punjab");
        assert_eq!(result.max_year, 2020);
        assert_eq!(result.highest.district, "Ludhiana");
        assert_eq!(result.lowest.district, "Patiala");
    }

    #[rstest]
    fn misspelled_state_reaches_raw_rows_through_its_aliases(
        resolver: NameResolver,
        lake: SamarthLake,
    ) {
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Identify the district in Panjab with the highest production of wheat")
            .unwrap();
        let Intent::DistrictMaxCrop { state, .. } = &answer.plan.intent else {
            panic!("expected a district plan");
        };
        assert_eq!(state.code.as_deref(), Some("PB"));

        let AnswerResult::DistrictExtremes(outcome) = answer.result else {
            panic!("expected district extremes");
        };
        let result = outcome.into_ready().expect("aliases should reach the Punjab rows");
        assert_eq!(result.state, "Panjab");
        assert_eq!(result.highest.district, "Ludhiana");
        assert_eq!(result.provenance.len(), 2);
    }

    #[rstest]
    fn unresolved_district_state_is_matched_as_text(resolver: NameResolver, lake: SamarthLake) {
        lake.insert_raw_crop(&[raw("Sikkim", "Gangtok", "Wheat", 2020, 4.0)])
            .unwrap();
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Identify the district in Sikkim with the highest production of wheat")
            .unwrap();
        let AnswerResult::DistrictExtremes(outcome) = answer.result else {
            panic!("expected district extremes");
        };
        assert_eq!(outcome.into_ready().unwrap().highest.district, "Gangtok");
    }

    #[rstest]
    fn trend_question_fits_production(resolver: NameResolver, lake: SamarthLake) {
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Analyze the trend of rice production in Maharashtra over the past 4 years")
            .unwrap();
        assert_eq!(answer.years, Some(vec![2017, 2018, 2019, 2020]));
        let AnswerResult::Trend(outcome) = answer.result else {
            panic!("expected a trend");
        };
        let result = outcome.into_ready().expect("trend should be ready");
        let trend = result.trend.expect("four points give a trend");
        assert!((trend.slope - 5.0).abs() < 1e-9, "{}", trend.slope);
        assert!((trend.r_squared - 1.0).abs() < 1e-9);
        // Production and rainfall both rise linearly.
        assert!((result.correlation.unwrap() - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn unresolved_state_matches_no_rows(resolver: NameResolver, lake: SamarthLake) {
        let answer = Pipeline::new(&resolver, &lake, 5)
            .answer("Compare rainfall in Atlantis and Lemuria for the last 2 years")
            .unwrap();
        let AnswerResult::Comparison(outcome) = answer.result else {
            panic!("expected a comparison");
        };
        assert!(outcome.is_no_data());
    }
}
