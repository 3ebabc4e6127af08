//! The persisted unit: a string, its properties and when it was stored.

use analysis::{analyze, StringProperties};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A stored string plus its derived properties.
///
/// Every field is fixed at creation. `id` always equals
/// `properties.sha256_hash`, the identity of `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Content hash of `value`; primary key.
    pub id: String,
    /// The string exactly as submitted.
    pub value: String,
    /// Properties computed once at creation.
    pub properties: StringProperties,
    /// Insertion time, millisecond precision.
    #[serde(with = "timestamp_serde")]
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyze `value` and stamp it with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_created_at(value, Utc::now())
    }

    /// Analyze `value` with an explicit creation time (truncated to millis).
    pub fn with_created_at(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: created_at.trunc_subsecs(3),
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix, e.g.
/// `2024-05-01T12:00:00.000Z`.
mod timestamp_serde {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::identity_of;
    use chrono::TimeZone;

    #[test]
    fn id_is_identity_of_value() {
        let record = StringRecord::new("foo");
        assert_eq!(record.id, identity_of("foo"));
        assert_eq!(record.id, record.properties.sha256_hash);
        assert_eq!(record.value, "foo");
    }

    #[test]
    fn created_at_serializes_with_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = StringRecord::with_created_at("foo", ts);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["created_at"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["id"], identity_of("foo"));
        assert_eq!(json["properties"]["length"], 3);

        let back: StringRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn created_at_accepts_offsets() {
        let json = serde_json::json!({
            "id": identity_of("x"),
            "value": "x",
            "properties": serde_json::to_value(analyze("x")).unwrap(),
            "created_at": "2024-05-01T14:00:00.250+02:00",
        });
        let record: StringRecord = serde_json::from_value(json).unwrap();
        assert_eq!(
            record.created_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2024-05-01T12:00:00.250Z"
        );
    }
}
