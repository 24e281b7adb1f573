//! View models for climate analysis results.
//!
//! This crate turns fetched payloads into forms suitable for the result
//! views: which view to show, formatted summary cards, chart series, and the
//! date-picker bounds. Everything here is pure so it can be tested natively
//! and reused by the CLI.

pub mod series;
pub mod summary;
pub mod trends;
pub mod view;

/// Date-picker bounds derived from the current filter.
pub mod bounds {
    use chrono::NaiveDate;
    use eco_api::{Filter, FilterField};
    use eco_utils::dates::{format_optional_date, parse_optional_date};

    /// The start picker may not go past the selected end date and the end
    /// picker may not go before the selected start date. Only the picker
    /// enforces these; typed input and the filter itself are not validated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DateBounds {
        pub start_max: Option<NaiveDate>,
        pub end_min: Option<NaiveDate>,
    }

    impl DateBounds {
        pub fn for_filter(filter: &Filter) -> Self {
            Self {
                start_max: filter.end_date,
                end_min: filter.start_date,
            }
        }

        /// `max` attribute for the start `<input type="date">` ("" = unbounded).
        pub fn start_max_attr(&self) -> String {
            format_optional_date(self.start_max.as_ref())
        }

        /// `min` attribute for the end `<input type="date">` ("" = unbounded).
        pub fn end_min_attr(&self) -> String {
            format_optional_date(self.end_min.as_ref())
        }

        pub fn allows_start(&self, date: &NaiveDate) -> bool {
            self.start_max.map_or(true, |max| *date <= max)
        }

        pub fn allows_end(&self, date: &NaiveDate) -> bool {
            self.end_min.map_or(true, |min| *date >= min)
        }

        /// Whether a picked value for a date field may be written to the
        /// filter. Empty or unparseable values are accepted; they clear the field.
        pub fn accepts(&self, field: FilterField, value: &str) -> bool {
            match (field, parse_optional_date(value)) {
                (FilterField::StartDate, Some(date)) => self.allows_start(&date),
                (FilterField::EndDate, Some(date)) => self.allows_end(&date),
                _ => true,
            }
        }
    }

}
