//! Text patterns recognised by the planner.
//!
//! All patterns run against normalized text: lowercase, trimmed, single spaces.
//! Names are captured lazily and end at a terminator (a preposition such as
//! `for`/`over`/`in`, a year count, punctuation, or end of text).

use std::sync::LazyLock;

use regex::Regex;

/// A lazily captured place or crop name.
const NAME: &str = r"([a-z][a-z&' -]*?)";

/// What may follow a name.
const END: &str =
    r"(?:\s+(?:for|over|during|across|from|between|since|within|in|last|past|with)\b|\s+-?\d|\s*[,;.?!]|\s*$)";

fn compile(template: &str) -> Regex {
    let source = template.replace("{NAME}", NAME).replace("{END}", END);
    Regex::new(&source).expect("planner pattern must compile")
}

// ============================================================================
// Intent patterns, in precedence order
// ============================================================================

/// "compare rainfall in X and Y [for the last N years]"
pub static COMPARE_RAINFALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:compare|show|analy[sz]e)\s+(?:the\s+)?(?:average\s+)?(?:annual\s+)?rainfall\b.*?\bin\s+{NAME}\s+(?:and|vs\.?|versus)\s+{NAME}{END}",
    )
});

/// "identify the district in X with the highest production of C"
pub static DISTRICT_EXTREMES: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:find|identify|show)\s+(?:me\s+)?(?:the\s+)?(?:districts?\s+(?:in|of)\s+)?{NAME}\s+(?:with\s+)?(?:the\s+)?(?:highest|maximum|max)\s+(?:(?:production|yield|output)\s+of\s+)?{NAME}(?:\s+(?:production|yield|output))?{END}",
    )
});

/// "analyze the trend of C production in X [over the past N years]"
pub static TREND_CORRELATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:analy[sz]e|show|study)\s+(?:the\s+)?(?:(?:production\s+)?trends?\s+(?:of|in|for)\s+)?{NAME}\s+(?:(?:production|yield|output)\s+)?(?:trends?\s+)?in\s+{NAME}{END}",
    )
});

// ============================================================================
// Parameter patterns
// ============================================================================

/// "last 10 years", "past 8 years", "for 3 years", "-2 years"
pub static YEAR_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b(?:last|past|previous|recent)\s+)?(-?\d+)\s+years?\b")
        .expect("year pattern must compile")
});

/// Lowercase, trim, and collapse runs of whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Title-case each space-separated word: "uttar pradesh" -> "Uttar Pradesh".
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First year count in the text, if any.
///
/// Counts that overflow `i64` saturate; they are rejected later as invalid.
#[must_use]
pub fn year_count(text: &str) -> Option<i64> {
    let digits = YEAR_COUNT.captures(text)?.get(1)?.as_str();
    Some(digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Compare   RAINFALL\tin X  "), "compare rainfall in x");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("uttar pradesh"), "Uttar Pradesh");
        assert_eq!(title_case("jammu & kashmir"), "Jammu & Kashmir");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn year_count_variants() {
        assert_eq!(year_count("for the last 10 years"), Some(10));
        assert_eq!(year_count("over the past 1 year"), Some(1));
        assert_eq!(year_count("last 0 years"), Some(0));
        assert_eq!(year_count("last -3 years"), Some(-3));
        assert_eq!(year_count("in maharashtra"), None);
        assert_eq!(year_count("last 99999999999999999999 years"), Some(i64::MAX));
    }

    #[test]
    fn compare_pattern_captures_both_states() {
        let caps = COMPARE_RAINFALL
            .captures("compare rainfall in uttar pradesh and tamil nadu for the last 3 years")
            .unwrap();
        assert_eq!(&caps[1], "uttar pradesh");
        assert_eq!(&caps[2], "tamil nadu");
    }

    #[test]
    fn district_pattern_captures_state_and_crop() {
        let caps = DISTRICT_EXTREMES
            .captures("identify the district in punjab with the highest production of wheat")
            .unwrap();
        assert_eq!(&caps[1], "punjab");
        assert_eq!(&caps[2], "wheat");
    }

    #[test]
    fn trend_pattern_captures_crop_then_state() {
        let caps = TREND_CORRELATION
            .captures("analyze the trend of rice production in kerala over the past 8 years")
            .unwrap();
        assert_eq!(&caps[1], "rice");
        assert_eq!(&caps[2], "kerala");
    }
}
