//! In-memory [`DataStore`] for engine tests.

#![allow(dead_code)]

use std::cell::Cell;

use samarth_core::{
    AggregateFilter, CropAggregate, DataStore, RainfallAggregate, RawCropRecord, RawFilter,
    RawRainfallRecord, StoreError,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub raw_rainfall: Vec<RawRainfallRecord>,
    pub raw_crop: Vec<RawCropRecord>,
    pub rainfall: Vec<RainfallAggregate>,
    pub crops: Vec<CropAggregate>,
    pub queries: Cell<usize>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn rain(mut self, state_code: &str, year: i32, mm: f64) -> Self {
        self.rainfall.push(RainfallAggregate {
            state_code: state_code.into(),
            year,
            annual_rainfall_mm: mm,
            source_url: format!("mem://rainfall/{state_code}/{year}"),
        });
        self
    }

    pub fn crop(mut self, state_code: &str, crop_id: &str, year: i32, tonnes: f64) -> Self {
        self.crops.push(CropAggregate {
            state_code: state_code.into(),
            crop_id: crop_id.into(),
            year,
            production_tonnes: tonnes,
            area_ha: None,
            source_url: format!("mem://crop/{state_code}/{crop_id}/{year}"),
        });
        self
    }

    pub fn raw(mut self, state: &str, district: Option<&str>, crop: &str, year: i32, tonnes: f64) -> Self {
        self.raw_crop.push(RawCropRecord {
            state: state.into(),
            district: district.map(Into::into),
            year,
            season: None,
            crop: crop.into(),
            area_ha: None,
            production_tonnes: tonnes,
            source_url: "mem://raw_crop".into(),
        });
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn touch(&self) -> Result<(), StoreError> {
        self.queries.set(self.queries.get() + 1);
        if self.fail {
            return Err(StoreError::backend(std::io::Error::other("store offline")));
        }
        Ok(())
    }
}

impl DataStore for MemoryStore {
    fn raw_rainfall(&self, filter: &RawFilter) -> Result<Vec<RawRainfallRecord>, StoreError> {
        self.touch()?;
        Ok(self
            .raw_rainfall
            .iter()
            .filter(|r| filter.matches(&r.state, None, r.year))
            .cloned()
            .collect())
    }

    fn raw_crop(&self, filter: &RawFilter) -> Result<Vec<RawCropRecord>, StoreError> {
        self.touch()?;
        Ok(self
            .raw_crop
            .iter()
            .filter(|r| filter.matches(&r.state, Some(&r.crop), r.year))
            .cloned()
            .collect())
    }

    fn rainfall_aggregates(
        &self,
        filter: &AggregateFilter,
    ) -> Result<Vec<RainfallAggregate>, StoreError> {
        self.touch()?;
        Ok(self
            .rainfall
            .iter()
            .filter(|r| filter.matches(&r.state_code, None, r.year))
            .cloned()
            .collect())
    }

    fn crop_aggregates(&self, filter: &AggregateFilter) -> Result<Vec<CropAggregate>, StoreError> {
        self.touch()?;
        Ok(self
            .crops
            .iter()
            .filter(|r| filter.matches(&r.state_code, Some(&r.crop_id), r.year))
            .cloned()
            .collect())
    }

    fn latest_rainfall_year(&self) -> Result<Option<i32>, StoreError> {
        self.touch()?;
        Ok(self.rainfall.iter().map(|r| r.year).max())
    }
}
