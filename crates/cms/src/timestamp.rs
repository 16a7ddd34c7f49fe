//! CMS system timestamps.
//!
//! `_createdDate`/`_updatedDate` are kept as raw JSON on the wire structs and only
//! interpreted here. Accepted forms:
//! - an RFC 3339 string
//! - epoch milliseconds, as a number or a `{"$numberLong": "..."}` wrapper
//! - either of the above wrapped as `{"$date": ...}`
//!
//! Anything else maps to `None`; a timestamp never fails the item it belongs to.

use chrono::{DateTime, Utc};
use serde_json::Value;

pub(crate) fn to_utc(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(millis) => millis.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => {
            if let Some(inner) = map.get("$date") {
                return to_utc(Some(inner));
            }
            map.get("$numberLong")
                .and_then(Value::as_str)
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .and_then(DateTime::from_timestamp_millis)
        }
        _ => None,
    }
}
