//! Bulk insertion into the lake.
//!
//! Observation and aggregate rows go through a prepared `INSERT` so the `id`
//! column takes its sequence default. Alias rows have no generated columns
//! and use the `DuckDB` Appender.

use duckdb::params;
use samarth_core::{
    AliasEntry, CropAggregate, Domain, RainfallAggregate, RawCropRecord, RawRainfallRecord,
};

use crate::{LakeError, SamarthLake, schemas};

impl SamarthLake {
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if any INSERT fails.
    pub fn insert_raw_rainfall(&self, rows: &[RawRainfallRecord]) -> Result<(), LakeError> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO raw_rainfall (state, district, year, month, rainfall_mm, source_url)
             VALUES (?, ?, ?, ?, ?, ?)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.state,
                row.district,
                row.year,
                row.month,
                row.rainfall_mm,
                row.source_url,
            ])?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if any INSERT fails.
    pub fn insert_raw_crop(&self, rows: &[RawCropRecord]) -> Result<(), LakeError> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO raw_crop (
                state, district, year, season, crop, area_ha, production_tonnes, source_url
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.state,
                row.district,
                row.year,
                row.season,
                row.crop,
                row.area_ha,
                row.production_tonnes,
                row.source_url,
            ])?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if any INSERT fails.
    pub fn insert_rainfall_aggregates(&self, rows: &[RainfallAggregate]) -> Result<(), LakeError> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO rainfall_annual_state (state_code, year, annual_rainfall_mm, source_url)
             VALUES (?, ?, ?, ?)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.state_code,
                row.year,
                row.annual_rainfall_mm,
                row.source_url,
            ])?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if any INSERT fails.
    pub fn insert_crop_aggregates(&self, rows: &[CropAggregate]) -> Result<(), LakeError> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO crop_state_year (
                state_code, crop_id, year, production_tonnes, area_ha, source_url
            ) VALUES (?, ?, ?, ?, ?, ?)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.state_code,
                row.crop_id,
                row.year,
                row.production_tonnes,
                row.area_ha,
                row.source_url,
            ])?;
        }
        Ok(())
    }

    /// Append alias rows for `domain`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if the Appender fails.
    pub fn insert_aliases(&self, domain: Domain, entries: &[AliasEntry]) -> Result<(), LakeError> {
        let (table, _) = schemas::alias_table(domain);
        let mut appender = self.conn.appender(table)?;
        for entry in entries {
            appender.append_row(params![entry.canonical_code, entry.alias])?;
        }
        appender.flush()?;
        tracing::debug!(%domain, count = entries.len(), "stored aliases");
        Ok(())
    }
}
