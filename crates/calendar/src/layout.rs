//! The fixed `YYYY-MM-DD` full-date layout used for date-only text.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Human-readable form of the full-date layout (RFC 3339 `full-date`).
pub const FULL_DATE_LAYOUT: &str = "YYYY-MM-DD";

/// chrono format string equivalent to [`FULL_DATE_LAYOUT`] for years 0..=9999.
const FULL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Years that fit the four-digit year field.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// One element of the layout, matched left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Year,
    Month,
    Day,
    Dash,
}

impl Element {
    /// The element as it is spelled in [`FULL_DATE_LAYOUT`].
    fn text(self) -> &'static str {
        match self {
            Element::Year => "YYYY",
            Element::Month => "MM",
            Element::Day => "DD",
            Element::Dash => "-",
        }
    }
}

const FULL_DATE_ELEMENTS: [Element; 5] = [
    Element::Year,
    Element::Dash,
    Element::Month,
    Element::Dash,
    Element::Day,
];

/// Appends `date` to `buf` as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the year does not fit in four
/// digits; nothing is appended in that case.
pub(crate) fn append_full_date(buf: &mut String, date: NaiveDate) -> Result<(), CalendarError> {
    let year = date.year();
    if !YEAR_RANGE.contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    write!(buf, "{}", date.format(FULL_DATE_FORMAT)).expect("writing to a String cannot fail");
    Ok(())
}

/// Parses a JSON string literal whose raw text between the quotes matches the
/// full-date layout.
///
/// Escape sequences are not decoded: `"\u0032019-05-01"` fails at the
/// backslash. The caller checks JSON syntax first.
///
/// # Errors
///
/// Returns [`CalendarError::Layout`] if `data` is not wrapped in quotes, and
/// otherwise whatever [`parse_full_date`] returns for the quoted text.
pub(crate) fn parse_quoted_full_date(data: &str) -> Result<NaiveDate, CalendarError> {
    let inner = data
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| CalendarError::Layout {
            value: data.to_string(),
            layout: FULL_DATE_LAYOUT,
            rest: data.to_string(),
            element: "\"",
        })?;
    parse_full_date(inner)
}

/// Parses `value` against the full-date layout.
///
/// Digit fields must have exactly their layout width and the whole input must
/// be consumed. The month is checked before the day.
///
/// # Errors
///
/// Returns [`CalendarError::Layout`] at the first element that does not match,
/// [`CalendarError::ExtraText`] if input remains after the day, and
/// [`CalendarError::MonthOutOfRange`] / [`CalendarError::DayOutOfRange`] for
/// well-formed but nonexistent dates.
pub(crate) fn parse_full_date(value: &str) -> Result<NaiveDate, CalendarError> {
    let mut rest = value;
    let (mut year, mut month, mut day) = (0, 0, 0);

    for element in FULL_DATE_ELEMENTS {
        let mismatch = |rest: &str| CalendarError::Layout {
            value: value.to_string(),
            layout: FULL_DATE_LAYOUT,
            rest: rest.to_string(),
            element: element.text(),
        };
        rest = match element {
            Element::Dash => rest.strip_prefix('-').ok_or_else(|| mismatch(rest))?,
            Element::Year | Element::Month | Element::Day => {
                let (number, tail) =
                    take_digits(rest, element.text().len()).ok_or_else(|| mismatch(rest))?;
                match element {
                    Element::Year => year = number,
                    Element::Month => month = number,
                    _ => day = number,
                }
                tail
            }
        };
    }

    if !rest.is_empty() {
        return Err(CalendarError::ExtraText {
            value: value.to_string(),
            rest: rest.to_string(),
        });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::MonthOutOfRange {
            value: value.to_string(),
        });
    }

    // year has at most four digits, so the cast is lossless.
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| CalendarError::DayOutOfRange {
        value: value.to_string(),
    })
}

/// Splits exactly `width` leading ASCII digits off `s` and returns their value.
fn take_digits(s: &str, width: usize) -> Option<(u32, &str)> {
    let digits = s.as_bytes().get(..width)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let number = digits
        .iter()
        .fold(0, |acc, &b| acc * 10 + u32::from(b - b'0'));
    // The first `width` bytes are ASCII, so `width` is a char boundary.
    Some((number, &s[width..]))
}
