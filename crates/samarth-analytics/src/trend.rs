//! Production trend and its correlation with rainfall.

use std::collections::HashMap;

use samarth_core::results::TrendCorrelation;
use samarth_core::{AggregateFilter, DataStore, Outcome, TimeSeriesPoint, YearFilter};

use crate::engine::{AnalyticsEngine, check};
use crate::error::AnalyticsError;
use crate::stats::{linear_regression, pearson};
use crate::validate;

impl<S: DataStore + ?Sized> AnalyticsEngine<'_, S> {
    /// Fit a linear trend to production of `crop_code` in `region_code` over
    /// `years` and correlate it with annual rainfall.
    ///
    /// Both series are reindexed onto `years` in the given order; a year with
    /// no row counts as zero. The trend is `None` when it cannot be fitted and
    /// the correlation is `None` when it is undefined (fewer than two years or
    /// a constant series).
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if either store query fails.
    pub fn trend_and_correlation(
        &self,
        region_code: &str,
        crop_code: &str,
        years: &[i32],
    ) -> Result<Outcome<TrendCorrelation>, AnalyticsError> {
        if let Some(invalid) = check([
            validate::non_blank("region_code", region_code),
            validate::non_blank("crop_code", crop_code),
            validate::years(years),
        ]) {
            return Ok(invalid);
        }

        let span = YearFilter::spanning(years);
        let production_rows = self.store.crop_aggregates(
            &AggregateFilter::states([region_code])
                .with_crop(crop_code)
                .with_years(span.clone()),
        )?;
        let rainfall_rows = self
            .store
            .rainfall_aggregates(&AggregateFilter::states([region_code]).with_years(span))?;

        let production = reindex(
            years,
            production_rows.iter().map(|r| (r.year, r.production_tonnes)),
        );
        let rainfall = reindex(
            years,
            rainfall_rows.iter().map(|r| (r.year, r.annual_rainfall_mm)),
        );

        let xs: Vec<f64> = years.iter().copied().map(f64::from).collect();
        let production_values: Vec<f64> = production.iter().map(|p| p.value).collect();
        let rainfall_values: Vec<f64> = rainfall.iter().map(|p| p.value).collect();

        let trend = linear_regression(&xs, &production_values);
        let correlation = pearson(&production_values, &rainfall_values);

        tracing::info!(
            region_code,
            crop_code,
            years = years.len(),
            production_rows = production_rows.len(),
            rainfall_rows = rainfall_rows.len(),
            slope = trend.map(|t| t.slope),
            correlation,
            "computed production trend"
        );

        Ok(Outcome::ready(TrendCorrelation {
            state_code: region_code.to_string(),
            crop_id: crop_code.to_string(),
            years: years.to_vec(),
            production,
            rainfall,
            trend,
            correlation,
            production_provenance: production_rows,
            rainfall_provenance: rainfall_rows,
        }))
    }
}

/// One point per requested year; rows for the same year are summed and
/// missing years are zero.
fn reindex(years: &[i32], rows: impl Iterator<Item = (i32, f64)>) -> Vec<TimeSeriesPoint> {
    let mut by_year: HashMap<i32, f64> = HashMap::new();
    for (year, value) in rows {
        *by_year.entry(year).or_default() += value;
    }
    years
        .iter()
        .map(|&year| TimeSeriesPoint::new(year, by_year.get(&year).copied().unwrap_or(0.0)))
        .collect()
}
