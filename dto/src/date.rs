//! The backend sends dates either as `YYYY-MM-DD` or as full ISO timestamps
//! (`YYYY-MM-DDTHH:MM:SS.sssZ`). Only the calendar part is kept, without any timezone
//! conversion: converting the timestamp to a local date could shift it by one day.
//!
//! Use with `#[serde(with = "crate::date")]`, or `crate::date::option` for optional dates.

use chrono::NaiveDate;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read the calendar part of a date, ignoring any time part.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

pub fn format_calendar_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_calendar_date(date))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_calendar_date(&value)
        .ok_or_else(|| D::Error::custom(format!("Invalid calendar date [value: {value}]")))
}

/// Same as the parent module, for optional dates. Blank strings are read as `None`,
/// since HTML forms send empty date inputs that way.
pub mod option {
    use super::{format_calendar_date, parse_calendar_date};
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            None => serializer.serialize_none(),
            Some(date) => serializer.serialize_str(&format_calendar_date(date)),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(value) if value.trim().is_empty() => Ok(None),
            Some(value) => parse_calendar_date(&value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("Invalid calendar date [value: {value}]"))),
        }
    }
}
