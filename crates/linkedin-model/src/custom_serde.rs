//! Custom serialization methods used by the models.

pub mod duration_second {
    use chrono::Duration;
    use serde::{de, Deserialize, Serializer};

    /// Deserialize `chrono::Duration` from an integer (interpreted as seconds)
    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let duration: i64 = Deserialize::deserialize(d)?;
        Ok(Duration::seconds(duration))
    }

    /// Serialize `chrono::Duration` to an integer (represented as seconds)
    pub fn serialize<S>(x: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(x.num_seconds())
    }
}

/// LinkedIn has returned scopes both space and comma separated over time, so
/// both separators are accepted. Serialization always uses spaces.
pub mod scope_list {
    use serde::{de, Deserialize, Serializer};
    use std::collections::HashSet;

    pub fn deserialize<'de, D>(d: D) -> Result<HashSet<String>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let scopes: String = Deserialize::deserialize(d)?;
        Ok(scopes
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|scope| !scope.is_empty())
            .map(ToOwned::to_owned)
            .collect())
    }

    pub fn serialize<S>(scopes: &HashSet<String>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut scopes = scopes.iter().map(String::as_str).collect::<Vec<_>>();
        scopes.sort_unstable();
        s.serialize_str(&scopes.join(" "))
    }
}

/// Reads a field of any type, falling back to its default value when the
/// payload has an unexpected shape. Used by everything reachable from a
/// network update, where one bad attribute must not discard its siblings.
pub mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(d)?;
        Ok(T::deserialize(value).unwrap_or_default())
    }
}

/// Ids come as JSON numbers for companies and jobs and as strings for
/// members; both end up as a `String`.
pub mod flexible_id {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(d)? {
            Value::String(id) if !id.is_empty() => Some(id),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
    }
}

/// Timestamps are milliseconds since the epoch. Anything that isn't an integer
/// is treated as absent.
pub mod millisecond_timestamp {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(d)?;
        Ok(value
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()))
    }
}

/// Unwraps the `{"_total": 2, "values": [...]}` collections nested inside
/// records. A bare array is accepted as well; anything else is an empty list.
pub mod values {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(bound(deserialize = "T: DeserializeOwned"))]
    struct Wrapper<T> {
        #[serde(default)]
        values: Vec<T>,
    }

    pub fn deserialize<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(d)?;
        let values = if value.is_array() {
            Vec::<T>::deserialize(value).unwrap_or_default()
        } else {
            Wrapper::<T>::deserialize(value)
                .map(|wrapper| wrapper.values)
                .unwrap_or_default()
        };
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::lenient::deserialize")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "super::flexible_id::deserialize")]
        id: Option<String>,
        #[serde(default, deserialize_with = "super::values::deserialize")]
        tags: Vec<String>,
    }

    #[test]
    fn test_lenient_field_falls_back_to_default() {
        let sample: Sample = serde_json::from_value(json!({ "count": "many" })).unwrap();
        assert_eq!(sample.count, None);

        let sample: Sample = serde_json::from_value(json!({ "count": 7 })).unwrap();
        assert_eq!(sample.count, Some(7));
    }

    #[test]
    fn test_flexible_id() {
        let sample: Sample = serde_json::from_value(json!({ "id": 1337 })).unwrap();
        assert_eq!(sample.id.as_deref(), Some("1337"));

        let sample: Sample = serde_json::from_value(json!({ "id": "Xq3-a" })).unwrap();
        assert_eq!(sample.id.as_deref(), Some("Xq3-a"));

        let sample: Sample = serde_json::from_value(json!({ "id": "" })).unwrap();
        assert_eq!(sample.id, None);
    }

    #[test]
    fn test_values_wrapper() {
        let sample: Sample =
            serde_json::from_value(json!({ "tags": { "_total": 2, "values": ["a", "b"] } }))
                .unwrap();
        assert_eq!(sample.tags, vec!["a", "b"]);

        let sample: Sample = serde_json::from_value(json!({ "tags": ["c"] })).unwrap();
        assert_eq!(sample.tags, vec!["c"]);

        let sample: Sample = serde_json::from_value(json!({ "tags": 3 })).unwrap();
        assert!(sample.tags.is_empty());
    }
}
