//! Location strings as SerpApi expects them.
//!
//! SerpApi resolves canonical names ("Miami, Florida, United States") far
//! more reliably than postal abbreviations. Only the states listed in
//! [`STATE_NAMES`] are expanded; any other abbreviation passes through.

use lazy_static::lazy_static;
use regex::Regex;

pub const STATE_NAMES: [(&str, &str); 12] = [
    ("FL", "Florida"),
    ("CA", "California"),
    ("NY", "New York"),
    ("TX", "Texas"),
    ("AZ", "Arizona"),
    ("NV", "Nevada"),
    ("IL", "Illinois"),
    ("PA", "Pennsylvania"),
    ("OH", "Ohio"),
    ("GA", "Georgia"),
    ("NC", "North Carolina"),
    ("MI", "Michigan"),
];

const COUNTRY_SUFFIX: &str = ", United States";

lazy_static! {
    static ref STATE_PATTERNS: Vec<(Regex, &'static str)> = STATE_NAMES
        .iter()
        .map(|(abbr, full)| {
            let pattern = format!(r"(?i)\b{}\b", abbr);
            (Regex::new(&pattern).unwrap(), *full)
        })
        .collect();
}

/// Expand known state abbreviations (whole words, any case) and make sure the
/// string names the country exactly once.
pub fn format_location(raw: &str) -> String {
    let mut formatted = raw.to_string();
    for (pattern, full) in STATE_PATTERNS.iter() {
        formatted = pattern.replace_all(&formatted, *full).into_owned();
    }

    if !formatted.to_lowercase().contains("united states") {
        formatted.push_str(COUNTRY_SUFFIX);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_abbreviation_and_appends_country() {
        assert_eq!(format_location("Miami, FL"), "Miami, Florida, United States");
    }

    #[test]
    fn abbreviation_match_is_case_insensitive() {
        assert_eq!(format_location("Austin, tx"), "Austin, Texas, United States");
    }

    #[test]
    fn only_whole_words_are_replaced() {
        // "CAL" and "Flagstaff" contain table abbreviations as substrings.
        assert_eq!(
            format_location("Flagstaff CAL"),
            "Flagstaff CAL, United States"
        );
    }

    #[test]
    fn unknown_abbreviations_pass_through() {
        assert_eq!(format_location("Seattle, WA"), "Seattle, WA, United States");
    }

    #[test]
    fn existing_country_is_not_duplicated() {
        assert_eq!(
            format_location("Chicago, IL, united states"),
            "Chicago, Illinois, united states"
        );
    }
}
