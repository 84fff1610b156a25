//! [`DataStore`] and [`AliasProvider`] over the lake tables.
//!
//! Filters become `WHERE` clauses with `?` placeholders; every value is bound
//! as a parameter, never spliced into the SQL text.

use duckdb::types::Value;
use duckdb::{Row, params_from_iter};
use samarth_core::{
    AggregateFilter, AliasEntry, AliasProvider, CropAggregate, DataStore, Domain,
    RainfallAggregate, RawCropRecord, RawFilter, RawRainfallRecord, StoreError, YearFilter,
};

use crate::{LakeError, SamarthLake, schemas};

/// Conjunction of SQL predicates and their bound values.
#[derive(Debug, Default)]
struct Predicates {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl Predicates {
    fn push(&mut self, clause: impl Into<String>, params: impl IntoIterator<Item = Value>) {
        self.clauses.push(clause.into());
        self.params.extend(params);
    }

    fn any_of(&mut self, column: &str, values: &[String]) {
        if values.is_empty() {
            return;
        }
        let placeholders = vec!["?"; values.len()].join(", ");
        self.push(
            format!("{column} IN ({placeholders})"),
            values.iter().cloned().map(Value::Text),
        );
    }

    fn years(&mut self, years: &YearFilter) {
        match years {
            YearFilter::Any => {}
            YearFilter::In(list) if list.is_empty() => self.clauses.push("FALSE".to_string()),
            YearFilter::In(list) => {
                let placeholders = vec!["?"; list.len()].join(", ");
                self.push(
                    format!("year IN ({placeholders})"),
                    list.iter().copied().map(Value::Int),
                );
            }
            YearFilter::Between { min, max } => {
                self.push("year BETWEEN ? AND ?", [Value::Int(*min), Value::Int(*max)]);
            }
        }
    }

    fn text_ignoring_case(&mut self, column: &str, value: &str) {
        self.push(
            format!("lower(trim({column})) = lower(trim(?))"),
            [Value::Text(value.to_string())],
        );
    }

    fn aggregate(filter: &AggregateFilter, with_crop: bool) -> Self {
        let mut predicates = Self::default();
        predicates.any_of("state_code", &filter.state_codes);
        if with_crop {
            predicates.any_of("crop_id", &filter.crop_ids);
        }
        predicates.years(&filter.years);
        predicates
    }

    fn any_text_ignoring_case(&mut self, column: &str, values: &[String]) {
        match values {
            [] => {}
            [value] => self.text_ignoring_case(column, value),
            _ => {
                let placeholders = vec!["lower(trim(?))"; values.len()].join(", ");
                self.push(
                    format!("lower(trim({column})) IN ({placeholders})"),
                    values.iter().cloned().map(Value::Text),
                );
            }
        }
    }

    fn raw(filter: &RawFilter, with_crop: bool) -> Self {
        let mut predicates = Self::default();
        predicates.any_text_ignoring_case("state", &filter.states);
        if let (true, Some(crop)) = (with_crop, &filter.crop) {
            predicates.text_ignoring_case("crop", crop);
        }
        if let Some(year) = filter.year {
            predicates.push("year = ?", [Value::Int(year)]);
        }
        predicates
    }

    fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            "TRUE".to_string()
        } else {
            self.clauses.join(" AND ")
        }
    }
}

impl SamarthLake {
    fn select<T>(
        &self,
        columns: &str,
        table: &str,
        predicates: &Predicates,
        map: impl FnMut(&Row<'_>) -> duckdb::Result<T>,
    ) -> Result<Vec<T>, LakeError> {
        let sql = format!(
            "SELECT {columns} FROM {table} WHERE {} ORDER BY id",
            predicates.where_sql()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(&predicates.params), map)?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::trace!(table, rows = rows.len(), "store query");
        Ok(rows)
    }
}

impl DataStore for SamarthLake {
    fn raw_rainfall(&self, filter: &RawFilter) -> Result<Vec<RawRainfallRecord>, StoreError> {
        Ok(self.select(
            "state, district, year, month, rainfall_mm, source_url",
            "raw_rainfall",
            &Predicates::raw(filter, false),
            |row| {
                Ok(RawRainfallRecord {
                    state: row.get(0)?,
                    district: row.get(1)?,
                    year: row.get(2)?,
                    month: row.get(3)?,
                    rainfall_mm: row.get(4)?,
                    source_url: row.get(5)?,
                })
            },
        )?)
    }

    fn raw_crop(&self, filter: &RawFilter) -> Result<Vec<RawCropRecord>, StoreError> {
        Ok(self.select(
            "state, district, year, season, crop, area_ha, production_tonnes, source_url",
            "raw_crop",
            &Predicates::raw(filter, true),
            |row| {
                Ok(RawCropRecord {
                    state: row.get(0)?,
                    district: row.get(1)?,
                    year: row.get(2)?,
                    season: row.get(3)?,
                    crop: row.get(4)?,
                    area_ha: row.get(5)?,
                    production_tonnes: row.get(6)?,
                    source_url: row.get(7)?,
                })
            },
        )?)
    }

    fn rainfall_aggregates(
        &self,
        filter: &AggregateFilter,
    ) -> Result<Vec<RainfallAggregate>, StoreError> {
        Ok(self.select(
            "state_code, year, annual_rainfall_mm, source_url",
            "rainfall_annual_state",
            &Predicates::aggregate(filter, false),
            |row| {
                Ok(RainfallAggregate {
                    state_code: row.get(0)?,
                    year: row.get(1)?,
                    annual_rainfall_mm: row.get(2)?,
                    source_url: row.get(3)?,
                })
            },
        )?)
    }

    fn crop_aggregates(&self, filter: &AggregateFilter) -> Result<Vec<CropAggregate>, StoreError> {
        Ok(self.select(
            "state_code, crop_id, year, production_tonnes, area_ha, source_url",
            "crop_state_year",
            &Predicates::aggregate(filter, true),
            |row| {
                Ok(CropAggregate {
                    state_code: row.get(0)?,
                    crop_id: row.get(1)?,
                    year: row.get(2)?,
                    production_tonnes: row.get(3)?,
                    area_ha: row.get(4)?,
                    source_url: row.get(5)?,
                })
            },
        )?)
    }

    fn latest_rainfall_year(&self) -> Result<Option<i32>, StoreError> {
        let year = self
            .conn
            .query_row("SELECT max(year) FROM rainfall_annual_state", [], |row| {
                row.get::<_, Option<i32>>(0)
            })
            .map_err(LakeError::from)?;
        Ok(year)
    }
}

impl SamarthLake {
    fn alias_rows(&self, domain: Domain) -> Result<Vec<AliasEntry>, LakeError> {
        let (table, code_column) = schemas::alias_table(domain);
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {code_column}, alias FROM {table} ORDER BY rowid"))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AliasEntry::new(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl AliasProvider for SamarthLake {
    fn list_aliases(&self, domain: Domain) -> Result<Vec<AliasEntry>, StoreError> {
        let entries = self.alias_rows(domain)?;
        tracing::debug!(%domain, count = entries.len(), "loaded aliases from store");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aggregate_predicates_bind_every_value() {
        let filter = AggregateFilter::states(["MH", "GJ"])
            .with_crop("RICE")
            .with_years(YearFilter::Between { min: 2015, max: 2019 });
        let predicates = Predicates::aggregate(&filter, true);
        assert_eq!(
            predicates.where_sql(),
            "state_code IN (?, ?) AND crop_id IN (?) AND year BETWEEN ? AND ?"
        );
        assert_eq!(predicates.params.len(), 5);
    }

    #[test]
    fn rainfall_predicates_ignore_crop_ids() {
        let filter = AggregateFilter::states(["MH"]).with_crop("RICE");
        assert_eq!(
            Predicates::aggregate(&filter, false).where_sql(),
            "state_code IN (?)"
        );
    }

    #[test]
    fn empty_filter_matches_everything_and_empty_year_list_nothing() {
        assert_eq!(Predicates::aggregate(&AggregateFilter::default(), true).where_sql(), "TRUE");
        let none = AggregateFilter::default().with_years(YearFilter::In(Vec::new()));
        assert_eq!(Predicates::aggregate(&none, true).where_sql(), "FALSE");
    }

    #[test]
    fn raw_predicates_compare_case_insensitively() {
        let filter = RawFilter::state("Punjab").with_crop("Wheat");
        assert_eq!(
            Predicates::raw(&filter, true).where_sql(),
            "lower(trim(state)) = lower(trim(?)) AND lower(trim(crop)) = lower(trim(?))"
        );
    }

    #[test]
    fn raw_predicates_list_every_state_spelling() {
        let filter = RawFilter::states(["Punjab", "Panjab"]);
        let predicates = Predicates::raw(&filter, false);
        assert_eq!(
            predicates.where_sql(),
            "lower(trim(state)) IN (lower(trim(?)), lower(trim(?)))"
        );
        assert_eq!(predicates.params.len(), 2);
    }
}
