//! Parameter checks run before any store query.

use std::collections::HashSet;

use samarth_core::InvalidParameter;

/// A required code or name must contain non-whitespace text.
///
/// # Errors
///
/// Returns [`InvalidParameter`] naming `field` when `value` is blank.
pub fn non_blank(field: &str, value: &str) -> Result<(), InvalidParameter> {
    if value.trim().is_empty() {
        return Err(InvalidParameter::new(field, "must not be blank"));
    }
    Ok(())
}

/// The requested years must be non-empty and distinct.
///
/// # Errors
///
/// Returns [`InvalidParameter`] for an empty list or a repeated year.
pub fn years(years: &[i32]) -> Result<(), InvalidParameter> {
    if years.is_empty() {
        return Err(InvalidParameter::new("years", "at least one year is required"));
    }
    let mut seen = HashSet::with_capacity(years.len());
    if let Some(year) = years.iter().find(|year| !seen.insert(**year)) {
        return Err(InvalidParameter::new("years", format!("year {year} is repeated")));
    }
    Ok(())
}

/// # Errors
///
/// Returns [`InvalidParameter`] when `top_m` is zero.
pub fn top_m(top_m: usize) -> Result<(), InvalidParameter> {
    if top_m == 0 {
        return Err(InvalidParameter::new("top_m", "must be positive"));
    }
    Ok(())
}

/// A requested number of years must be at least one.
///
/// # Errors
///
/// Returns [`InvalidParameter`] for `year_num` when `count` is zero or negative.
pub fn year_count(count: i64) -> Result<(), InvalidParameter> {
    if count <= 0 {
        return Err(InvalidParameter::new(
            "year_num",
            format!("must be positive, got {count}"),
        ));
    }
    Ok(())
}

/// The `count` most recent years ending at `latest`, oldest first.
///
/// `year_window(2019, 3)` is `[2017, 2018, 2019]`.
///
/// # Errors
///
/// Returns [`InvalidParameter`] when `count` is zero or negative, or when the
/// window would start before the earliest representable year.
pub fn year_window(latest: i32, count: i64) -> Result<Vec<i32>, InvalidParameter> {
    year_count(count)?;
    let start = i64::from(latest)
        .checked_sub(count - 1)
        .and_then(|start| i32::try_from(start).ok())
        .ok_or_else(|| {
            InvalidParameter::new("year_num", format!("{count} years before {latest} is out of range"))
        })?;
    Ok((start..=latest).collect())
}
