//! Short numeric `en-US` date formatting (`M/D/Y`).

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::error::FormatError;

/// Largest magnitude of an epoch time value, in milliseconds
/// (100,000,000 days either side of 1970-01-01).
pub const MAX_TIME_VALUE_MS: i64 = 8_640_000_000_000_000;

/// Format a calendar date in the `en-US` default date style, e.g. `1/2/2024`.
///
/// Month and day carry no zero padding; the year is the era year, so dates
/// before 1 CE print as their BC year number (astronomical year 0 is `1`).
/// A zoned `DateTime` is rendered in its own time zone.
///
/// ```rust
/// use chrono::NaiveDate;
/// use formatters::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(format_date(&date), "1/2/2024");
/// ```
pub fn format_date<D: Datelike>(date: &D) -> String {
    let (_, year) = date.year_ce();
    format!("{}/{}/{}", date.month(), date.day(), year)
}

/// Format the UTC calendar date of an epoch time value in milliseconds.
pub fn format_timestamp_millis(millis: i64) -> Result<String, FormatError> {
    format_timestamp_millis_in(millis, &Utc)
}

/// Format the calendar date of an epoch time value as seen in `tz`.
///
/// Fails with [`FormatError::InvalidTimeValue`] when `millis` lies beyond
/// [`MAX_TIME_VALUE_MS`] or outside the dates chrono can represent.
///
/// chrono stops at year 262142, so this also fails on time values the
/// platform `Date` still accepts: anything after roughly
/// `8.21e15` ms (or before `-8.33e15` ms), up to the `MAX_TIME_VALUE_MS`
/// bound where the platform prints `9/13/275760`.
pub fn format_timestamp_millis_in<Tz: TimeZone>(
    millis: i64,
    tz: &Tz,
) -> Result<String, FormatError> {
    if millis.unsigned_abs() > MAX_TIME_VALUE_MS.unsigned_abs() {
        return Err(FormatError::InvalidTimeValue(millis));
    }
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or(FormatError::InvalidTimeValue(millis))?;
    Ok(format_date(&utc.with_timezone(tz)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_zero_padding() {
        assert_eq!(format_date(&date(2024, 1, 2)), "1/2/2024");
        assert_eq!(format_date(&date(2024, 12, 31)), "12/31/2024");
        assert_eq!(format_date(&date(5, 3, 4)), "3/4/5");
    }

    #[test]
    fn years_before_common_era() {
        assert_eq!(format_date(&date(0, 6, 1)), "6/1/1");
        assert_eq!(format_date(&date(-1, 6, 1)), "6/1/2");
    }

    #[test]
    fn zoned_datetime_uses_local_date() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 2, 23, 30, 0).unwrap();
        assert_eq!(format_date(&utc), "1/2/2024");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_date(&utc.with_timezone(&tokyo)), "1/3/2024");
    }

    #[test]
    fn epoch_millis() {
        assert_eq!(format_timestamp_millis(0).unwrap(), "1/1/1970");
        assert_eq!(format_timestamp_millis(-1).unwrap(), "12/31/1969");
        assert_eq!(format_timestamp_millis(1_704_153_600_000).unwrap(), "1/2/2024");
    }

    #[test]
    fn epoch_millis_in_zone() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_timestamp_millis_in(1_704_153_600_000, &new_york).unwrap(),
            "1/1/2024"
        );
    }

    #[test]
    fn rejects_out_of_range_time_values() {
        assert_eq!(
            format_timestamp_millis(MAX_TIME_VALUE_MS + 1),
            Err(FormatError::InvalidTimeValue(MAX_TIME_VALUE_MS + 1))
        );
        assert!(format_timestamp_millis(i64::MIN).is_err());
        assert!(format_timestamp_millis(i64::MAX).is_err());
    }

    #[test]
    fn rejects_dates_chrono_cannot_hold() {
        // +275760-09-13 is a valid time value but past chrono's last year.
        assert!(format_timestamp_millis(MAX_TIME_VALUE_MS).is_err());
    }
}
