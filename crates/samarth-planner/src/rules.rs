//! The ordered rule table.
//!
//! Each rule pairs a pattern with a builder that turns its captures into an
//! [`Intent`]. Rules are tried in table order and the first match wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use samarth_core::{Domain, Intent, IntentKind, NameParam};
use samarth_resolver::NameResolver;

use crate::grammar::{COMPARE_RAINFALL, DISTRICT_EXTREMES, TREND_CORRELATION, title_case, year_count};

/// Year count used by the comparison intent when the question names none.
pub const DEFAULT_COMPARE_YEARS: i64 = 5;

/// Year count used by the trend intent when the question names none.
pub const DEFAULT_TREND_YEARS: i64 = 10;

type Build = fn(&Captures<'_>, &str, &NameResolver) -> Intent;

pub struct Rule {
    pub kind: IntentKind,
    pub pattern: &'static LazyLock<Regex>,
    build: Build,
}

impl Rule {
    /// Apply this rule to normalized text.
    pub fn apply(&self, text: &str, resolver: &NameResolver) -> Option<Intent> {
        let captures = self.pattern.captures(text)?;
        Some((self.build)(&captures, text, resolver))
    }
}

pub static RULES: [Rule; 3] = [
    Rule {
        kind: IntentKind::CompareRainfallAndTopCrops,
        pattern: &COMPARE_RAINFALL,
        build: compare_rainfall,
    },
    Rule {
        kind: IntentKind::DistrictMaxCrop,
        pattern: &DISTRICT_EXTREMES,
        build: district_max_crop,
    },
    Rule {
        kind: IntentKind::TrendAndCorrelation,
        pattern: &TREND_CORRELATION,
        build: trend_and_correlation,
    },
];

fn compare_rainfall(caps: &Captures<'_>, text: &str, resolver: &NameResolver) -> Intent {
    Intent::CompareRainfallAndTopCrops {
        state_x: name(caps, 1, Domain::State, resolver),
        state_y: name(caps, 2, Domain::State, resolver),
        year_num: year_count(text).unwrap_or(DEFAULT_COMPARE_YEARS),
    }
}

fn district_max_crop(caps: &Captures<'_>, _text: &str, resolver: &NameResolver) -> Intent {
    Intent::DistrictMaxCrop {
        state: name(caps, 1, Domain::State, resolver),
        crop: name(caps, 2, Domain::Crop, resolver),
    }
}

// Crop comes first in this pattern.
fn trend_and_correlation(caps: &Captures<'_>, text: &str, resolver: &NameResolver) -> Intent {
    Intent::TrendAndCorrelation {
        state: name(caps, 2, Domain::State, resolver),
        crop: name(caps, 1, Domain::Crop, resolver),
        year_num: year_count(text).unwrap_or(DEFAULT_TREND_YEARS),
    }
}

/// Title-case capture `group` and resolve it in `domain`.
fn name(caps: &Captures<'_>, group: usize, domain: Domain, resolver: &NameResolver) -> NameParam {
    let raw = caps.get(group).map_or("", |m| m.as_str()).trim();
    let text = title_case(raw);
    match resolver.resolve(raw, domain) {
        Some(code) => NameParam::resolved(text, code),
        None => {
            tracing::debug!(%domain, name = %text, "keeping unresolved name as text");
            NameParam::unresolved(text)
        }
    }
}
