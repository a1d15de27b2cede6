//! serde support: a [`CalendarDate`] is the string `YYYY-MM-DD`, or `null`
//! for the zero date on input.

use std::fmt;

use serde::{de, ser};

use crate::date::CalendarDate;

impl ser::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let text = self.to_full_date().map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

struct CalendarDateVisitor;

impl<'de> de::Visitor<'de> for CalendarDateVisitor {
    type Value = CalendarDate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YYYY-MM-DD date string or null")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        CalendarDate::parse(value).map_err(E::custom)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CalendarDate::default())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CalendarDate::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de> de::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_option(CalendarDateVisitor)
    }
}
