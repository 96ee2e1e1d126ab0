//! Loosely typed request body fields
//!
//! Clients send folder ids as strings and timestamps in several shapes, and
//! the store converts them on write. A decoded field remembers whether the
//! JSON value it came from was truthy, so `"0"` counts as supplied even
//! though it converts to `0`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use super::validation::Truthy;

/// Body field converted to its column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<T> {
    value: T,
    truthy: bool,
}

impl<T> Field<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Truthy for Field<T> {
    fn is_truthy(&self) -> bool {
        self.truthy
    }
}

/// Conversion from a raw JSON value into a column type.
pub trait FromJson: Sized {
    const EXPECTED: &'static str;

    fn from_json(raw: &Value) -> Option<Self>;
}

impl FromJson for String {
    const EXPECTED: &'static str = "a string";

    fn from_json(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl FromJson for i32 {
    const EXPECTED: &'static str = "an integer";

    fn from_json(raw: &Value) -> Option<Self> {
        match raw {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromJson for DateTime<Utc> {
    const EXPECTED: &'static str = "a timestamp";

    fn from_json(raw: &Value) -> Option<Self> {
        raw.as_str().and_then(parse_timestamp)
    }
}

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse RFC 3339, `T` or space separated date-times with or without an
/// offset, and bare dates. A missing offset means UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(text, format) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for format in LOCAL_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ts.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

/// `deserialize_with` helper for optional body fields.
///
/// `null` decodes as absent. A falsy value the column cannot hold, such as
/// `""` for a folder id, is absent too; a truthy one is rejected.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<Field<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromJson,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let truthy = raw.is_truthy();
    match T::from_json(&raw) {
        Some(value) => Ok(Some(Field { value, truthy })),
        None if !truthy => Ok(None),
        None => Err(de::Error::custom(format!(
            "expected {}, found {}",
            T::EXPECTED,
            raw
        ))),
    }
}
