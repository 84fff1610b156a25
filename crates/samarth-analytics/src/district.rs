//! Highest and lowest producing districts in a state's latest year.

use samarth_core::results::{DistrictExtremes, DistrictTotal};
use samarth_core::{DataStore, Outcome, RawCropRecord, RawFilter};

use crate::engine::{AnalyticsEngine, check};
use crate::error::AnalyticsError;
use crate::validate;

impl<S: DataStore + ?Sized> AnalyticsEngine<'_, S> {
    /// Find the districts of `region` with the highest and lowest production
    /// of `crop` in the most recent year on record.
    ///
    /// Reads raw crop records, matching `region` and `crop` without regard to
    /// case. Records without a district are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the store query fails.
    pub fn district_max_crop(
        &self,
        region: &str,
        crop: &str,
    ) -> Result<Outcome<DistrictExtremes>, AnalyticsError> {
        self.district_max_crop_in(region, &[region], crop)
    }

    /// As [`district_max_crop`](Self::district_max_crop), matching raw rows
    /// whose state equals any of `spellings`; `region` labels the result.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the store query fails.
    pub fn district_max_crop_in<N: AsRef<str>>(
        &self,
        region: &str,
        spellings: &[N],
        crop: &str,
    ) -> Result<Outcome<DistrictExtremes>, AnalyticsError> {
        if let Some(invalid) = check([
            validate::non_blank("region", region),
            validate::non_blank("crop", crop),
        ]) {
            return Ok(invalid);
        }

        let filter = RawFilter::states(spellings.iter().map(|name| name.as_ref())).or_state(region);

        let rows: Vec<RawCropRecord> = self
            .store
            .raw_crop(&filter.with_crop(crop))?
            .into_iter()
            .filter(|r| district_of(r).is_some())
            .collect();

        let Some(max_year) = rows.iter().map(|r| r.year).max() else {
            tracing::info!(region, crop, "no district rows");
            return Ok(Outcome::no_data(format!(
                "no district-level {crop} records for {region}"
            )));
        };

        let provenance: Vec<RawCropRecord> =
            rows.into_iter().filter(|r| r.year == max_year).collect();
        let districts = district_totals(&provenance);

        let highest = extreme(&districts, |a, b| a > b);
        let lowest = extreme(&districts, |a, b| a < b);
        let (Some(highest), Some(lowest)) = (highest, lowest) else {
            return Ok(Outcome::no_data(format!(
                "no district totals for {region} in {max_year}"
            )));
        };

        tracing::info!(
            region,
            crop,
            max_year,
            districts = districts.len(),
            highest = %highest.district,
            lowest = %lowest.district,
            "ranked districts"
        );

        Ok(Outcome::ready(DistrictExtremes {
            state: region.to_string(),
            crop: crop.to_string(),
            max_year,
            highest,
            lowest,
            districts,
            provenance,
        }))
    }
}

fn district_of(row: &RawCropRecord) -> Option<&str> {
    row.district
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
}

/// Sum production per district in order of first appearance.
fn district_totals(rows: &[RawCropRecord]) -> Vec<DistrictTotal> {
    let mut totals: Vec<DistrictTotal> = Vec::new();
    for row in rows {
        let Some(district) = district_of(row) else {
            continue;
        };
        match totals.iter_mut().find(|t| t.district == district) {
            Some(total) => total.production_tonnes += row.production_tonnes,
            None => totals.push(DistrictTotal {
                district: district.to_string(),
                production_tonnes: row.production_tonnes,
            }),
        }
    }
    totals
}

/// The first total that no later total beats under `better`.
fn extreme(totals: &[DistrictTotal], better: impl Fn(f64, f64) -> bool) -> Option<DistrictTotal> {
    let mut best: Option<&DistrictTotal> = None;
    for total in totals {
        if best.is_none_or(|b| better(total.production_tonnes, b.production_tonnes)) {
            best = Some(total);
        }
    }
    best.cloned()
}
