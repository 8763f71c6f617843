//! Serde helpers for the loosely typed backend payloads.
//!
//! The backend is not consistent about id and timestamp shapes: ids arrive
//! as strings or integers, timestamps as RFC 3339, naive datetimes, or bare
//! dates. Use with `#[serde(with = "wire_serde::...")]` on struct fields.
//!
//! # Example
//! ```ignore
//! use hd_core::wire_serde;
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "wire_serde::id")]
//!     pub id: String,
//!
//!     #[serde(default, with = "wire_serde::timestamp_option")]
//!     pub created_at: Option<DateTime<Utc>>,
//! }
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Parse any timestamp spelling the backend emits.
///
/// Naive values are taken as UTC. Returns `None` for blank or unparseable
/// input.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Id that may be a JSON string or integer; always held as `String`.
pub mod id {
    use super::{Deserialize, Deserializer, RawId, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(id: &String, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        RawId::deserialize(d).map(String::from)
    }
}

/// Optional id that may be a JSON string, integer, or null.
pub mod id_option {
    use super::{Deserialize, Deserializer, RawId, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(id: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => s.serialize_some(id),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<RawId>::deserialize(d)?
            .map(String::from)
            .filter(|id| !id.is_empty()))
    }
}

/// Optional timestamp in any of the spellings accepted by [`parse_timestamp`].
///
/// Serializes as RFC 3339. Unparseable strings decode as `None` rather than
/// failing the whole record.
pub mod timestamp_option {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc, parse_timestamp};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.serialize_some(&dt.to_rfc3339()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(parse_timestamp))
    }
}
