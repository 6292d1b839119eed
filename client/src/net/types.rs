//! Wire DTOs for the activities API.
//!
//! DESIGN
//! ======
//! The server owns the activity schema and may omit or mistype fields. Each
//! field falls back to a neutral default instead of failing the whole
//! snapshot, and the top-level mapping keeps the server's key order so
//! rendering stays deterministic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One activity as returned by `GET /activities`, keyed externally by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description; blank when absent.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub description: String,
    /// Free-text schedule, shown as-is and used as the time sort key.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub schedule: String,
    /// Grouping used by the category filter. Empty strings count as absent.
    #[serde(default, deserialize_with = "deserialize_lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Capacity. Signed so over-admitted activities can show negative spots.
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub max_participants: i64,
    /// Enrolled participant emails in server order.
    #[serde(default, deserialize_with = "deserialize_participants")]
    pub participants: Vec<String>,
    /// Optional secondary time sort key.
    #[serde(default, deserialize_with = "deserialize_lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// The `GET /activities` body: activity name to details, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityMap(pub Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for ActivityMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ActivityMapVisitor)
    }
}

struct ActivityMapVisitor;

impl<'de> Visitor<'de> for ActivityMapVisitor {
    type Value = ActivityMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping activity names to activity details")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, serde_json::Value>()? {
            let activity = serde_json::from_value(value).unwrap_or_default();
            entries.push((name, activity));
        }
        Ok(ActivityMap(entries))
    }
}

/// Body of a signup/unregister response.
///
/// Success bodies carry `message`; error bodies may carry `detail`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default, deserialize_with = "deserialize_lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A completed signup/unregister round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationReply {
    /// Whether the HTTP status was 2xx.
    pub ok: bool,
    pub status: u16,
    pub body: MutationResponse,
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

fn deserialize_lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_lenient_string(deserializer)?;
    Ok(Some(value).filter(|text| !text.is_empty()))
}

fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Ok(0);
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float.trunc() as i64);
    }
    Ok(0)
}

fn deserialize_participants<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(email) => Some(email),
            _ => None,
        })
        .collect())
}
