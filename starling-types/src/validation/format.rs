//! Named string formats checked with anchored regular expressions.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[1-9][0-9]*)?[0-9]{4})-(1[0-2]|0[1-9])-(3[01]|0[1-9]|[12][0-9])$")
        .expect("date pattern is valid")
});

static YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[1-9][0-9]*)?[0-9]{4})-(1[0-2]|0[1-9])$")
        .expect("year-month pattern is valid")
});

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^((?:[1-9][0-9]*)?[0-9]{4})-(1[0-2]|0[1-9])-(3[01]|0[1-9]|[12][0-9])T(2[0-3]|[01][0-9]):([0-5][0-9]):([0-5][0-9])(\.[0-9]+)?(Z)?$",
    )
    .expect("timestamp pattern is valid")
});

/// String formats the API expects for identifiers, dates and timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// RFC 4122 UUID, versions 1 to 5 (`b0b20c9d-3b6b-42f1-a7d0-e70d4538e0d9`).
    Uuid,
    /// Calendar date (`2019-10-25`).
    Date,
    /// Statement period (`2019-10`).
    YearMonth,
    /// ISO-8601 instant, optional fractional seconds and `Z` (`2019-10-25T12:34:56.789Z`).
    Timestamp,
}

impl Format {
    /// Returns the name used in violation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Uuid => "uuid",
            Format::Date => "date",
            Format::YearMonth => "yearMonth",
            Format::Timestamp => "timestamp",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Format::Uuid => &UUID,
            Format::Date => &DATE,
            Format::YearMonth => &YEAR_MONTH,
            Format::Timestamp => &TIMESTAMP,
        }
    }

    /// Returns true if the whole string matches this format.
    pub fn is_match(&self, s: &str) -> bool {
        self.pattern().is_match(s)
    }

    /// Returns true if the value is a string matching this format.
    pub fn matches(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| self.is_match(s))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month() {
        assert!(Format::YearMonth.is_match("2019-12"));
        assert!(!Format::YearMonth.is_match("2019-14"));
        assert!(!Format::YearMonth.is_match("2019-12-01"));
        assert!(!Format::YearMonth.is_match("x2019-12"));
    }

    #[test]
    fn test_date() {
        assert!(Format::Date.is_match("2019-12-01"));
        assert!(!Format::Date.is_match("2019-14-01"));
        assert!(!Format::Date.is_match("2019-12-32"));
        assert!(!Format::Date.is_match("2019-12-01T00:00:00Z"));
    }

    #[test]
    fn test_timestamp() {
        assert!(Format::Timestamp.is_match("2019-10-25T12:34:56"));
        assert!(Format::Timestamp.is_match("2019-10-25T12:34:56Z"));
        assert!(Format::Timestamp.is_match("2019-10-25T12:34:56.789"));
        assert!(Format::Timestamp.is_match("2019-10-25T12:34:56.789Z"));
        assert!(!Format::Timestamp.is_match("2019-10-25"));
        assert!(!Format::Timestamp.is_match("2019-10-25T12:34"));
        assert!(!Format::Timestamp.is_match("2019-10-25T24:00:00Z"));
    }

    #[test]
    fn test_uuid() {
        assert!(Format::Uuid.is_match("b0b20c9d-3b6b-42f1-a7d0-e70d4538e0d9"));
        assert!(Format::Uuid.is_match("B0B20C9D-3B6B-42F1-A7D0-E70D4538E0D9"));
        // well formed, but version nibble is not 1-5
        assert!(!Format::Uuid.is_match("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa"));
        assert!(!Format::Uuid.is_match("not-a-uuid"));
        assert!(!Format::Uuid.is_match("b0b20c9d3b6b42f1a7d0e70d4538e0d9"));
        assert!(!Format::Uuid.is_match(" b0b20c9d-3b6b-42f1-a7d0-e70d4538e0d9"));
    }

    #[test]
    fn test_non_string_values_never_match() {
        assert!(!Format::Date.matches(&Value::from(20191201)));
        assert!(!Format::Uuid.matches(&Value::Null));
        assert!(Format::Date.matches(&Value::from("2019-12-01")));
    }
}
