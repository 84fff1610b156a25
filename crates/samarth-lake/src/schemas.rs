//! `DuckDB` table DDL.
//!
//! Observation and aggregate tables carry a sequence-backed `id`; queries
//! return rows in `id` order, which is insertion order. Alias tables have no
//! id and are read in `rowid` order.

use samarth_core::Domain;

/// Raw rainfall observations as ingested, one row per source record.
pub const CREATE_RAW_RAINFALL: &str = "
CREATE SEQUENCE IF NOT EXISTS raw_rainfall_id;
CREATE TABLE IF NOT EXISTS raw_rainfall (
    id BIGINT PRIMARY KEY DEFAULT nextval('raw_rainfall_id'),
    state TEXT NOT NULL,
    district TEXT,
    year INTEGER NOT NULL,
    month TEXT,
    rainfall_mm DOUBLE NOT NULL,
    source_url TEXT NOT NULL
);
";

/// Raw crop production observations, usually district level.
pub const CREATE_RAW_CROP: &str = "
CREATE SEQUENCE IF NOT EXISTS raw_crop_id;
CREATE TABLE IF NOT EXISTS raw_crop (
    id BIGINT PRIMARY KEY DEFAULT nextval('raw_crop_id'),
    state TEXT NOT NULL,
    district TEXT,
    year INTEGER NOT NULL,
    season TEXT,
    crop TEXT NOT NULL,
    area_ha DOUBLE,
    production_tonnes DOUBLE NOT NULL,
    source_url TEXT NOT NULL
);
";

/// Annual rainfall per state code.
pub const CREATE_RAINFALL_ANNUAL_STATE: &str = "
CREATE SEQUENCE IF NOT EXISTS rainfall_annual_state_id;
CREATE TABLE IF NOT EXISTS rainfall_annual_state (
    id BIGINT PRIMARY KEY DEFAULT nextval('rainfall_annual_state_id'),
    state_code TEXT NOT NULL,
    year INTEGER NOT NULL,
    annual_rainfall_mm DOUBLE NOT NULL,
    source_url TEXT NOT NULL
);
";

/// Production per state code, crop id and year.
pub const CREATE_CROP_STATE_YEAR: &str = "
CREATE SEQUENCE IF NOT EXISTS crop_state_year_id;
CREATE TABLE IF NOT EXISTS crop_state_year (
    id BIGINT PRIMARY KEY DEFAULT nextval('crop_state_year_id'),
    state_code TEXT NOT NULL,
    crop_id TEXT NOT NULL,
    year INTEGER NOT NULL,
    production_tonnes DOUBLE NOT NULL,
    area_ha DOUBLE,
    source_url TEXT NOT NULL
);
";

pub const CREATE_ALIAS_TABLES: &str = "
CREATE TABLE IF NOT EXISTS state_aliases (
    state_code TEXT NOT NULL,
    alias TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS crop_aliases (
    crop_id TEXT NOT NULL,
    alias TEXT NOT NULL
);
";

pub const CREATE_INDEXES: &str = "
CREATE INDEX IF NOT EXISTS idx_rainfall_state_year
    ON rainfall_annual_state(state_code, year);
CREATE INDEX IF NOT EXISTS idx_crop_state_year
    ON crop_state_year(state_code, crop_id, year);
";

/// Every statement needed for an empty store, in dependency order.
pub const ALL: [&str; 6] = [
    CREATE_RAW_RAINFALL,
    CREATE_RAW_CROP,
    CREATE_RAINFALL_ANNUAL_STATE,
    CREATE_CROP_STATE_YEAR,
    CREATE_ALIAS_TABLES,
    CREATE_INDEXES,
];

/// `(table, code column)` holding aliases for a domain.
#[must_use]
pub const fn alias_table(domain: Domain) -> (&'static str, &'static str) {
    match domain {
        Domain::State => ("state_aliases", "state_code"),
        Domain::Crop => ("crop_aliases", "crop_id"),
    }
}
