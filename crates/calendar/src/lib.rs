//! # almanac-calendar
//!
//! Calendar dates carried by full timestamps, classified by which
//! occurrence of their weekday they are within the month and serialized as
//! date-only `YYYY-MM-DD` text.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["timestamp"] -->|"CalendarDate::from()"| B["CalendarDate"]
//!     C["(year, month, day, zone)"] -->|"CalendarDate::new()"| B
//!     D["YYYY-MM-DD"] -->|"CalendarDate::parse()"| B
//!     E["JSON fragment"] -->|"decode_json() / serde"| B
//!     B -->|".weekday_of_month()"| F["WeekdayOfMonth"]
//!     B -->|".to_json() / serde"| E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{CalendarDate, WeekdayOfMonth};
//!
//! let date = CalendarDate::new_utc(2019, 5, 1).unwrap();
//! assert_eq!(date.weekday_of_month(), WeekdayOfMonth::First);
//! assert_eq!(date.to_json().unwrap(), r#""2019-05-01""#);
//!
//! let parsed = CalendarDate::parse("2019-05-01").unwrap();
//! assert_eq!(parsed, date);
//!
//! let decoded = CalendarDate::from_json("null").unwrap();
//! assert_eq!(decoded, CalendarDate::default());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `CalendarDate` value type |
//! | `ordinal` | Weekday-of-month classification |
//! | `layout` | The `YYYY-MM-DD` layout: formatting and strict parsing |
//! | `serde_support` | `Serialize` / `Deserialize` for `CalendarDate` |
//! | `error` | Error types |

mod date;
mod error;
mod layout;
mod ordinal;
mod serde_support;

pub use date::CalendarDate;
pub use error::{CalendarError, ErrorKind};
pub use layout::FULL_DATE_LAYOUT;
pub use ordinal::WeekdayOfMonth;
