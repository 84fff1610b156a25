//! Mean rainfall and top crops for two states.

use std::collections::HashMap;

use samarth_core::results::{CropTotal, RainfallComparison, StateSummary};
use samarth_core::{AggregateFilter, CropAggregate, DataStore, Outcome, RainfallAggregate, YearFilter};

use crate::engine::{AnalyticsEngine, check};
use crate::error::AnalyticsError;
use crate::validate;

impl<S: DataStore + ?Sized> AnalyticsEngine<'_, S> {
    /// Compare mean annual rainfall and the `top_m` crops by total production
    /// for two states over `years`.
    ///
    /// Returns [`Outcome::NoData`] when neither state has a rainfall row in
    /// any requested year. A state with crop rows but no rainfall rows gets a
    /// summary with no mean.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if either store query fails.
    pub fn compare_rainfall_and_top_crops(
        &self,
        code_x: &str,
        code_y: &str,
        years: &[i32],
        top_m: usize,
    ) -> Result<Outcome<RainfallComparison>, AnalyticsError> {
        if let Some(invalid) = check([
            validate::non_blank("code_x", code_x),
            validate::non_blank("code_y", code_y),
            validate::years(years),
            validate::top_m(top_m),
        ]) {
            return Ok(invalid);
        }

        let filter =
            AggregateFilter::states([code_x, code_y]).with_years(YearFilter::In(years.to_vec()));

        let rainfall = self.store.rainfall_aggregates(&filter)?;
        if rainfall.is_empty() {
            tracing::info!(code_x, code_y, years = years.len(), "no rainfall rows to compare");
            return Ok(Outcome::no_data(format!(
                "no rainfall data for {code_x} or {code_y} in the requested years"
            )));
        }
        let crops = self.store.crop_aggregates(&filter)?;

        let summarize = |code: &str| StateSummary {
            state_code: code.to_string(),
            mean_annual_rainfall_mm: mean_rainfall(&rainfall, code),
            rainfall_years_observed: rainfall.iter().filter(|r| r.state_code == code).count(),
            top_crops: top_crops(&crops, code, top_m),
        };
        let state_x = summarize(code_x);
        let state_y = summarize(code_y);

        tracing::info!(
            code_x,
            code_y,
            rainfall_rows = rainfall.len(),
            crop_rows = crops.len(),
            "compared rainfall and top crops"
        );

        Ok(Outcome::ready(RainfallComparison {
            years: years.to_vec(),
            top_m,
            state_x,
            state_y,
            rainfall_provenance: rainfall,
            crop_provenance: crops,
        }))
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_rainfall(rows: &[RainfallAggregate], code: &str) -> Option<f64> {
    let values: Vec<f64> = rows
        .iter()
        .filter(|r| r.state_code == code)
        .map(|r| r.annual_rainfall_mm)
        .collect();
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// Sum production per crop for `code` and keep the `top_m` largest.
///
/// Crops are grouped in order of first appearance and the sort is stable, so
/// equal totals keep that order.
fn top_crops(rows: &[CropAggregate], code: &str, top_m: usize) -> Vec<CropTotal> {
    let mut totals: Vec<CropTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows.iter().filter(|r| r.state_code == code) {
        let slot = *index.entry(row.crop_id.as_str()).or_insert_with(|| {
            totals.push(CropTotal {
                crop_id: row.crop_id.clone(),
                production_tonnes: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].production_tonnes += row.production_tonnes;
    }

    totals.sort_by(|a, b| b.production_tonnes.total_cmp(&a.production_tonnes));
    totals.truncate(top_m);
    totals
}
