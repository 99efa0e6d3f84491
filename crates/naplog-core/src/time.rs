//! Date and clock helpers.
//!
//! The backend keys summaries by `YYYY-MM-DD` and accepts manual timestamps as
//! `YYYY-MM-DD HH:MM`. Manual-entry forms only collect a clock, which is
//! combined with the currently selected date.

use chrono::{Local, NaiveDate, NaiveTime};

use crate::errors::CoreError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Today's date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CoreError::InvalidFormat`] if `value` is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| CoreError::InvalidFormat {
        field: "date".into(),
        value: value.to_string(),
        expected: "YYYY-MM-DD".into(),
    })
}

/// Parse an `HH:MM` clock.
///
/// # Errors
///
/// Returns [`CoreError::InvalidFormat`] if `value` is not a 24-hour clock.
pub fn parse_clock(value: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).map_err(|_| CoreError::InvalidFormat {
        field: "time".into(),
        value: value.to_string(),
        expected: "HH:MM".into(),
    })
}

/// Combine a date and a clock into the backend's `YYYY-MM-DD HH:MM` form.
///
/// # Errors
///
/// Returns [`CoreError::InvalidFormat`] if `clock` does not parse.
pub fn combine(date: NaiveDate, clock: &str) -> Result<String, CoreError> {
    let time = parse_clock(clock)?;
    Ok(format!(
        "{} {}",
        format_date(date),
        time.format(CLOCK_FORMAT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn jan5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn combines_date_and_clock() {
        assert_eq!(combine(jan5(), "13:00").unwrap(), "2024-01-05 13:00");
    }

    #[test]
    fn combine_normalizes_single_digit_hour() {
        assert_eq!(combine(jan5(), "9:05").unwrap(), "2024-01-05 09:05");
    }

    #[rstest]
    #[case("")]
    #[case("25:00")]
    #[case("1pm")]
    #[case("12:61")]
    fn rejects_bad_clocks(#[case] clock: &str) {
        assert!(matches!(
            combine(jan5(), clock),
            Err(CoreError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn date_roundtrips_through_format() {
        let date = parse_date("2024-01-05").unwrap();
        assert_eq!(date, jan5());
        assert_eq!(format_date(date), "2024-01-05");
    }

    #[test]
    fn rejects_bad_dates() {
        let err = parse_date("2024-02-30").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date '2024-02-30': expected YYYY-MM-DD"
        );
    }
}
