//! Lenient expiry-date coercion.
//!
//! The source spreadsheets carry dates in whatever shape the last editor
//! typed, so coercion tries a fixed set of formats and degrades to the
//! "no date" sentinel instead of failing the load.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a date cell, returning `None` for empty or unparsable values.
pub fn coerce_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    // Exported spreadsheets sometimes carry a time-of-day component.
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        assert_eq!(coerce_date("2024-06-20"), Some(expected));
        assert_eq!(coerce_date("2024/06/20"), Some(expected));
        assert_eq!(coerce_date("2024.06.20"), Some(expected));
        assert_eq!(coerce_date(" 2024-06-20 "), Some(expected));
        assert_eq!(coerce_date("20-06-2024"), Some(expected));
        assert_eq!(coerce_date("2024-06-20 09:30:00"), Some(expected));
    }

    #[test]
    fn unparsable_values_become_none() {
        assert_eq!(coerce_date(""), None);
        assert_eq!(coerce_date("   "), None);
        assert_eq!(coerce_date("TBD"), None);
        assert_eq!(coerce_date("2024-13-40"), None);
    }
}
