//! Shared utility functions for EcoVision crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Wire and `<input type="date">` format: "YYYY-MM-DD"
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)?)
    }

    /// Lenient parse for form input: empty or malformed text yields `None`.
    pub fn parse_optional_date(s: &str) -> Option<NaiveDate> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        parse_date(trimmed).ok()
    }

    /// Format an optional date, using "" for `None` (the empty input value).
    pub fn format_optional_date(date: Option<&NaiveDate>) -> String {
        date.map(format_date).unwrap_or_default()
    }

    /// True unless both dates are set and `start` falls after `end`.
    pub fn is_ordered(start: Option<&NaiveDate>, end: Option<&NaiveDate>) -> bool {
        match (start, end) {
            (Some(s), Some(e)) => s <= e,
            _ => true,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_compact_format() {
            assert!(parse_date("20230615").is_err());
            assert!(parse_date("2023-13-01").is_err());
        }

        #[test]
        fn test_parse_optional_date() {
            assert_eq!(parse_optional_date(""), None);
            assert_eq!(parse_optional_date("   "), None);
            assert_eq!(parse_optional_date("not a date"), None);
            assert_eq!(
                parse_optional_date("2024-02-29"),
                NaiveDate::from_ymd_opt(2024, 2, 29)
            );
        }

        #[test]
        fn test_format_optional_date() {
            assert_eq!(format_optional_date(None), "");
            let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
            assert_eq!(format_optional_date(Some(&date)), "2020-01-02");
        }

        #[test]
        fn test_is_ordered() {
            let jan = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
            let feb = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
            assert!(is_ordered(Some(&jan), Some(&feb)));
            assert!(is_ordered(Some(&jan), Some(&jan)));
            assert!(!is_ordered(Some(&feb), Some(&jan)));
            assert!(is_ordered(None, Some(&jan)));
            assert!(is_ordered(Some(&feb), None));
        }
    }
}
