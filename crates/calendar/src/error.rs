//! Error types for the almanac-calendar crate.

/// Broad classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value lies outside the range the operation can represent.
    Range,
    /// Input text does not match the expected format.
    Parse,
}

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Range errors come from encoding or constructing dates that cannot be
/// represented; parse errors come from decoding text against the
/// `YYYY-MM-DD` layout or from malformed JSON input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when encoding a date whose year is outside 0..=9999.
    #[error("year outside of range [0,9999]")]
    YearOutOfRange {
        /// The year of the date that could not be encoded.
        year: i32,
    },

    /// Returned when a constructed date falls outside the timestamp range.
    #[error("date {year} month {month} day {day} is outside the representable range")]
    Unrepresentable {
        /// Requested year.
        year: i32,
        /// Requested, possibly overflowing, month.
        month: i32,
        /// Requested, possibly overflowing, day of month.
        day: i32,
    },

    /// Returned when the input stops matching the layout.
    #[error("parsing date {value:?} as {layout:?}: cannot parse {rest:?} as {element:?}")]
    Layout {
        /// The full input text.
        value: String,
        /// The layout the input was parsed against.
        layout: &'static str,
        /// Remaining input starting at the first mismatch.
        rest: String,
        /// The layout element expected at that position.
        element: &'static str,
    },

    /// Returned when text remains after a complete date.
    #[error("parsing date {value:?}: extra text: {rest:?}")]
    ExtraText {
        /// The full input text.
        value: String,
        /// The trailing text.
        rest: String,
    },

    /// Returned when the month field is not in 1..=12.
    #[error("parsing date {value:?}: month out of range")]
    MonthOutOfRange {
        /// The full input text.
        value: String,
    },

    /// Returned when the day field does not exist in its month.
    #[error("parsing date {value:?}: day out of range")]
    DayOutOfRange {
        /// The full input text.
        value: String,
    },

    /// Returned when JSON input is not a string literal.
    #[error("{reason}")]
    Syntax {
        /// Message from the JSON parser.
        reason: String,
    },

    /// Returned when a number does not name a weekday-of-month ordinal.
    #[error("invalid weekday-of-month ordinal: {value} (must be 1..=5)")]
    InvalidOrdinal {
        /// The rejected number.
        value: u8,
    },

    /// Returned when a string does not name a weekday-of-month ordinal.
    #[error("unknown weekday-of-month ordinal: {name:?}")]
    UnknownOrdinal {
        /// The rejected name.
        name: String,
    },
}

impl CalendarError {
    /// Returns whether this is a range or a parse failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::YearOutOfRange { .. } | Self::Unrepresentable { .. } => ErrorKind::Range,
            Self::Layout { .. }
            | Self::ExtraText { .. }
            | Self::MonthOutOfRange { .. }
            | Self::DayOutOfRange { .. }
            | Self::Syntax { .. }
            | Self::InvalidOrdinal { .. }
            | Self::UnknownOrdinal { .. } => ErrorKind::Parse,
        }
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax {
            reason: err.to_string(),
        }
    }
}
