//! The data store contract consumed by the analytics engine.
//!
//! Queries are expressed as typed filter predicates, never as query text.
//! Implementations must return rows in a deterministic order (ingestion order)
//! because top-N and extreme selection break ties by row order.

use crate::errors::StoreError;
use crate::records::{CropAggregate, RainfallAggregate, RawCropRecord, RawRainfallRecord};

/// Year restriction for an aggregate query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    /// No restriction.
    #[default]
    Any,
    /// Only these years.
    In(Vec<i32>),
    /// Inclusive range.
    Between { min: i32, max: i32 },
}

impl YearFilter {
    /// Inclusive range spanning the smallest and largest of `years`.
    ///
    /// Returns [`YearFilter::Any`] for an empty slice.
    #[must_use]
    pub fn spanning(years: &[i32]) -> Self {
        match (years.iter().min(), years.iter().max()) {
            (Some(&min), Some(&max)) => Self::Between { min, max },
            _ => Self::Any,
        }
    }

    #[must_use]
    pub fn matches(&self, year: i32) -> bool {
        match self {
            Self::Any => true,
            Self::In(years) => years.contains(&year),
            Self::Between { min, max } => (*min..=*max).contains(&year),
        }
    }
}

/// Predicates for the two aggregate relations.
///
/// An empty `crop_ids` means "any crop"; an empty `state_codes` means "any state".
/// Codes are compared exactly: they are canonical identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateFilter {
    pub state_codes: Vec<String>,
    pub crop_ids: Vec<String>,
    pub years: YearFilter,
}

impl AggregateFilter {
    #[must_use]
    pub fn states<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state_codes: codes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_crop(mut self, crop_id: impl Into<String>) -> Self {
        self.crop_ids.push(crop_id.into());
        self
    }

    #[must_use]
    pub fn with_years(mut self, years: YearFilter) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub fn matches(&self, state_code: &str, crop_id: Option<&str>, year: i32) -> bool {
        let state_ok = self.state_codes.is_empty() || self.state_codes.iter().any(|c| c == state_code);
        let crop_ok = match crop_id {
            Some(crop) => self.crop_ids.is_empty() || self.crop_ids.iter().any(|c| c == crop),
            None => true,
        };
        state_ok && crop_ok && self.years.matches(year)
    }
}

/// Predicates for the two raw relations.
///
/// `states` and `crop` match the raw text fields case-insensitively. A row
/// matches when its state equals any of `states`; raw files spell one state
/// several ways, so a resolved state is searched under all of its aliases.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFilter {
    pub states: Vec<String>,
    pub crop: Option<String>,
    pub year: Option<i32>,
}

impl RawFilter {
    #[must_use]
    pub fn state(state: impl Into<String>) -> Self {
        Self::default().or_state(state)
    }

    /// Filter on any of several spellings of one state.
    #[must_use]
    pub fn states<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(Self::default(), Self::or_state)
    }

    /// Also accept `state`. Blank names and case-insensitive repeats are skipped.
    #[must_use]
    pub fn or_state(mut self, state: impl Into<String>) -> Self {
        let state = state.into();
        let trimmed = state.trim();
        if !trimmed.is_empty() && !self.states.iter().any(|s| s.eq_ignore_ascii_case(trimmed)) {
            self.states.push(trimmed.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_crop(mut self, crop: impl Into<String>) -> Self {
        self.crop = Some(crop.into());
        self
    }

    #[must_use]
    pub fn matches(&self, state: &str, crop: Option<&str>, year: i32) -> bool {
        let state_ok = self.states.is_empty()
            || self.states.iter().any(|s| state.trim().eq_ignore_ascii_case(s));
        let crop_ok = match (&self.crop, crop) {
            (Some(wanted), Some(actual)) => actual.trim().eq_ignore_ascii_case(wanted.trim()),
            (Some(_), None) => false,
            (None, _) => true,
        };
        state_ok && crop_ok && self.year.is_none_or(|y| y == year)
    }
}

/// Read-only access to rainfall and crop relations.
///
/// Implementations own their connection lifecycle and schema; the engine only
/// reads through this trait.
pub trait DataStore {
    /// Raw rainfall observations for a state (by raw state name).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn raw_rainfall(&self, filter: &RawFilter) -> Result<Vec<RawRainfallRecord>, StoreError>;

    /// Raw crop observations for a state (by raw state name).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn raw_crop(&self, filter: &RawFilter) -> Result<Vec<RawCropRecord>, StoreError>;

    /// State-year rainfall aggregates.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn rainfall_aggregates(
        &self,
        filter: &AggregateFilter,
    ) -> Result<Vec<RainfallAggregate>, StoreError>;

    /// State-crop-year production aggregates.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn crop_aggregates(&self, filter: &AggregateFilter) -> Result<Vec<CropAggregate>, StoreError>;

    /// Most recent year present in the rainfall aggregates, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn latest_rainfall_year(&self) -> Result<Option<i32>, StoreError>;
}
