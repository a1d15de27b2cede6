//! Calendar date wrapping a full timestamp.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Month, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday,
};
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::layout::{FULL_DATE_LAYOUT, append_full_date, parse_full_date, parse_quoted_full_date};
use crate::ordinal::WeekdayOfMonth;

/// A calendar date carried by a full timestamp.
///
/// Only the year, month and day of the wrapped timestamp are interpreted.
/// Time of day and offset are kept as given but ignored by classification
/// and encoding. Equality and ordering compare the wrapped instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    timestamp: DateTime<FixedOffset>,
}

impl CalendarDate {
    /// Creates a date at midnight in `zone`.
    ///
    /// `month` and `day` are normalized the way timestamp construction
    /// normalizes them: month 13 is January of the next year, month 0 is
    /// December of the previous year, day 32 of a 31-day month is the 1st of
    /// the next month and day 0 is the last day of the previous month. The
    /// month is normalized first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Unrepresentable`] if the normalized date or
    /// its midnight in `zone` lies outside the timestamp range.
    pub fn new(year: i32, month: i32, day: i32, zone: FixedOffset) -> Result<Self, CalendarError> {
        let unrepresentable = || CalendarError::Unrepresentable { year, month, day };

        let month0 = i64::from(month) - 1;
        let carried_year = i64::from(year) + month0.div_euclid(12);
        let carried_year = i32::try_from(carried_year).map_err(|_| unrepresentable())?;
        // rem_euclid(12) + 1 is always in 1..=12.
        let month_number = (month0.rem_euclid(12) + 1) as u32;

        let first =
            NaiveDate::from_ymd_opt(carried_year, month_number, 1).ok_or_else(unrepresentable)?;
        let offset = i64::from(day) - 1;
        let days = Days::new(offset.unsigned_abs());
        let date = if offset >= 0 {
            first.checked_add_days(days)
        } else {
            first.checked_sub_days(days)
        }
        .ok_or_else(unrepresentable)?;

        let timestamp = zone
            .from_local_datetime(&NaiveDateTime::from(date))
            .single()
            .ok_or_else(unrepresentable)?;
        Ok(Self { timestamp })
    }

    /// Creates a date at midnight UTC. See [`CalendarDate::new`].
    pub fn new_utc(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        Self::new(year, month, day, utc())
    }

    /// Creates a date at midnight in `zone` from a [`Month`]. Only `day` can
    /// overflow here. See [`CalendarDate::new`].
    pub fn from_calendar_month(
        year: i32,
        month: Month,
        day: i32,
        zone: FixedOffset,
    ) -> Result<Self, CalendarError> {
        // number_from_month is 1..=12.
        Self::new(year, month.number_from_month() as i32, day, zone)
    }

    /// Wraps an existing timestamp without touching its time of day.
    pub fn from_timestamp(timestamp: DateTime<FixedOffset>) -> Self {
        Self { timestamp }
    }

    /// Parses an unquoted `YYYY-MM-DD` string into midnight UTC on that date.
    ///
    /// # Errors
    ///
    /// Returns a parse-kind [`CalendarError`] describing the first mismatch
    /// against the layout, or an out-of-range month or day.
    pub fn parse(value: &str) -> Result<Self, CalendarError> {
        let date = parse_full_date(value)?;
        Ok(Self::from_naive_utc(date))
    }

    /// Decodes a JSON fragment into a fresh date. See [`CalendarDate::decode_json`].
    pub fn from_json(data: &str) -> Result<Self, CalendarError> {
        let mut date = Self::default();
        date.decode_json(data)?;
        Ok(date)
    }

    /// Returns the wrapped timestamp.
    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    /// Consumes the date and returns the wrapped timestamp.
    pub fn into_timestamp(self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Returns the calendar date in the timestamp's own offset.
    pub fn naive_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Returns the offset of the wrapped timestamp.
    pub fn offset(&self) -> FixedOffset {
        *self.timestamp.offset()
    }

    /// Returns the year; negative for years before 1 BCE.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Returns the day of month (1..=31).
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Classifies the date by which occurrence of its weekday it is in the month.
    pub fn weekday_of_month(&self) -> WeekdayOfMonth {
        WeekdayOfMonth::from_day_of_month(self.day()).expect("day of month is always in 1..=31")
    }

    /// Returns the date as an unquoted `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year is outside 0..=9999.
    pub fn to_full_date(&self) -> Result<String, CalendarError> {
        let mut buf = String::with_capacity(FULL_DATE_LAYOUT.len());
        append_full_date(&mut buf, self.naive_date())?;
        Ok(buf)
    }

    /// Returns the date as a JSON string literal, `"YYYY-MM-DD"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year is outside 0..=9999.
    pub fn to_json(&self) -> Result<String, CalendarError> {
        let mut buf = String::with_capacity(FULL_DATE_LAYOUT.len() + 2);
        buf.push('"');
        append_full_date(&mut buf, self.naive_date())?;
        buf.push('"');
        Ok(buf)
    }

    /// Overwrites this date from a JSON fragment.
    ///
    /// The literal `null` is accepted and leaves the date unchanged. Any other
    /// input must be a JSON string whose raw text is exactly `YYYY-MM-DD`, with
    /// no escape sequences or surrounding whitespace; on success the date
    /// becomes midnight UTC on that day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Syntax`] if `data` is not a JSON string, or a
    /// layout error if its contents do not match `YYYY-MM-DD`. On error the
    /// date has already been reset to [`CalendarDate::default`].
    pub fn decode_json(&mut self, data: &str) -> Result<(), CalendarError> {
        if data == "null" {
            trace!("null date, keeping current value");
            return Ok(());
        }

        let decoded = serde_json::from_str::<String>(data)
            .map_err(CalendarError::from)
            .and_then(|_| parse_quoted_full_date(data));
        match decoded {
            Ok(date) => {
                *self = Self::from_naive_utc(date);
                Ok(())
            }
            Err(err) => {
                *self = Self::default();
                debug!(error = %err, "failed to decode date");
                Err(err)
            }
        }
    }

    fn from_naive_utc(date: NaiveDate) -> Self {
        let midnight = NaiveDateTime::from(date);
        Self {
            timestamp: DateTime::from_naive_utc_and_offset(midnight, utc()),
        }
    }
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).expect("zero offset is always valid")
}

impl Default for CalendarDate {
    /// The zero date, 0001-01-01 at midnight UTC.
    fn default() -> Self {
        let first = NaiveDate::from_ymd_opt(1, 1, 1).expect("0001-01-01 is a valid date");
        Self::from_naive_utc(first)
    }
}

impl From<DateTime<FixedOffset>> for CalendarDate {
    fn from(timestamp: DateTime<FixedOffset>) -> Self {
        Self::from_timestamp(timestamp)
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self::from_timestamp(timestamp.fixed_offset())
    }
}

impl From<CalendarDate> for DateTime<FixedOffset> {
    fn from(date: CalendarDate) -> Self {
        date.timestamp
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    /// Writes the calendar date; years outside 0..=9999 carry a sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.naive_date(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(year: i32, month: u32, day: u32, zone: FixedOffset) -> DateTime<FixedOffset> {
        zone.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn new_is_midnight_in_zone() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = CalendarDate::new(2019, 5, 1, zone).unwrap();
        assert_eq!(*date.timestamp(), midnight(2019, 5, 1, zone));
        assert_eq!(date.offset(), zone);
        assert_eq!((date.year(), date.month(), date.day()), (2019, 5, 1));
    }

    #[test]
    fn new_day_overflow_rolls_forward() {
        let date = CalendarDate::new_utc(2019, 1, 32).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2019, 2, 1));

        let date = CalendarDate::new_utc(2019, 12, 32).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 1));
    }

    #[test]
    fn new_day_zero_rolls_back() {
        let date = CalendarDate::new_utc(2024, 3, 0).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));

        let date = CalendarDate::new_utc(2019, 1, -30).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2018, 12, 1));
    }

    #[test]
    fn new_month_overflow_carries_into_year() {
        let cases: &[(i32, i32, i32, (i32, u32, u32))] = &[
            (2019, 13, 1, (2020, 1, 1)),
            (2019, 0, 1, (2018, 12, 1)),
            (2019, -1, 1, (2018, 11, 1)),
            (2019, 25, 1, (2021, 1, 1)),
            (2019, -12, 15, (2017, 12, 15)),
        ];
        for &(year, month, day, expected) in cases {
            let date = CalendarDate::new_utc(year, month, day).unwrap();
            assert_eq!(
                (date.year(), date.month(), date.day()),
                expected,
                "new_utc({year}, {month}, {day})"
            );
        }
    }

    #[test]
    fn new_month_normalized_before_day() {
        // Month 14 is February 2020; day 30 then rolls into March.
        let date = CalendarDate::new_utc(2019, 14, 30).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 3, 1));

        // Month 0 is December 2018; day 0 is its previous day.
        let date = CalendarDate::new_utc(2019, 0, 0).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2018, 11, 30));
    }

    #[test]
    fn from_calendar_month_matches_new() {
        let zone = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            CalendarDate::from_calendar_month(2019, Month::May, 1, zone).unwrap(),
            CalendarDate::new(2019, 5, 1, zone).unwrap()
        );
    }

    #[test]
    fn new_month_carry_out_of_range() {
        let err = CalendarDate::new_utc(i32::MAX, 13, 1).unwrap_err();
        assert_eq!(
            err,
            CalendarError::Unrepresentable {
                year: i32::MAX,
                month: 13,
                day: 1,
            }
        );
    }

    #[test]
    fn new_out_of_range() {
        let err = CalendarDate::new_utc(i32::MAX, 1, 1).unwrap_err();
        assert_eq!(
            err,
            CalendarError::Unrepresentable {
                year: i32::MAX,
                month: 1,
                day: 1,
            }
        );
    }

    #[test]
    fn weekday_of_month_first() {
        let date = CalendarDate::new_utc(2019, 5, 1).unwrap();
        assert_eq!(date.weekday_of_month(), WeekdayOfMonth::First);
        assert_eq!(date.weekday_of_month().name(), "First");
        assert_eq!(date.weekday(), Weekday::Wed);
    }

    #[test]
    fn weekday_of_month_ignores_time_of_day() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let ts = zone.with_ymd_and_hms(2019, 5, 29, 23, 59, 59).unwrap();
        let date = CalendarDate::from(ts);
        assert_eq!(date.weekday_of_month(), WeekdayOfMonth::Last);
    }

    #[test]
    fn to_json_scenario() {
        let date = CalendarDate::new_utc(2019, 5, 1).unwrap();
        assert_eq!(date.to_json().unwrap(), r#""2019-05-01""#);
        assert_eq!(date.to_full_date().unwrap(), "2019-05-01");
    }

    #[test]
    fn to_json_uses_local_calendar_date() {
        let zone = FixedOffset::east_opt(9 * 3600).unwrap();
        let date = CalendarDate::new(2019, 5, 1, zone).unwrap();
        assert_eq!(date.to_json().unwrap(), r#""2019-05-01""#);
    }

    #[test]
    fn to_json_year_range() {
        for year in [0, 9999] {
            assert!(CalendarDate::new_utc(year, 1, 1).unwrap().to_json().is_ok());
        }
        for year in [-1, 10000] {
            let err = CalendarDate::new_utc(year, 1, 1)
                .unwrap()
                .to_json()
                .unwrap_err();
            assert_eq!(err, CalendarError::YearOutOfRange { year });
            assert_eq!(err.to_string(), "year outside of range [0,9999]");
        }
    }

    #[test]
    fn parse_is_midnight_utc() {
        let date = CalendarDate::parse("2019-05-01").unwrap();
        assert_eq!(*date.timestamp(), midnight(2019, 5, 1, utc()));
        assert_eq!("2019-05-01".parse::<CalendarDate>().unwrap(), date);
    }

    #[test]
    fn parse_error_message() {
        let err = CalendarDate::parse("2019/05/01").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"parsing date "2019/05/01" as "YYYY-MM-DD": cannot parse "/05/01" as "-""#
        );
    }

    #[test]
    fn decode_json_valid() {
        let mut date = CalendarDate::default();
        date.decode_json(r#""2019-05-01""#).unwrap();
        assert_eq!(date, CalendarDate::new_utc(2019, 5, 1).unwrap());
    }

    #[test]
    fn decode_json_null_keeps_value() {
        let original = CalendarDate::new_utc(2019, 5, 1).unwrap();
        let mut date = original;
        date.decode_json("null").unwrap();
        assert_eq!(date, original);
    }

    #[test]
    fn decode_json_error_resets_to_zero() {
        let mut date = CalendarDate::new_utc(2019, 5, 1).unwrap();
        let err = date.decode_json(r#""2019-13-01""#).unwrap_err();
        assert!(matches!(err, CalendarError::MonthOutOfRange { .. }));
        assert_eq!(date, CalendarDate::default());
    }

    #[test]
    fn decode_json_unquoted_is_syntax_error() {
        let mut date = CalendarDate::new_utc(2019, 5, 1).unwrap();
        let err = date.decode_json("2019-05-01").unwrap_err();
        assert!(matches!(err, CalendarError::Syntax { .. }));
        assert_eq!(date, CalendarDate::default());
    }

    #[test]
    fn default_is_year_one() {
        let date = CalendarDate::default();
        assert_eq!((date.year(), date.month(), date.day()), (1, 1, 1));
        assert_eq!(date.offset(), utc());
    }

    #[test]
    fn equality_compares_instants() {
        let utc_date = CalendarDate::new_utc(2019, 5, 1).unwrap();
        let shifted = CalendarDate::from(utc_date.timestamp().with_timezone(
            &FixedOffset::east_opt(3600).unwrap(),
        ));
        assert_eq!(utc_date, shifted);
    }

    #[test]
    fn display_full_date() {
        let date = CalendarDate::new_utc(2019, 5, 1).unwrap();
        assert_eq!(date.to_string(), "2019-05-01");
    }

    #[test]
    fn from_utc_timestamp() {
        let ts = Utc.with_ymd_and_hms(2019, 5, 1, 12, 30, 0).unwrap();
        let date = CalendarDate::from(ts);
        assert_eq!(date.naive_date(), NaiveDate::from_ymd_opt(2019, 5, 1).unwrap());
        assert_eq!(DateTime::<FixedOffset>::from(date), ts.fixed_offset());
    }

    #[test]
    fn copy_send_sync() {
        fn assert_impl<T: Copy + Send + Sync>() {}
        assert_impl::<CalendarDate>();
    }
}
