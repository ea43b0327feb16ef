//! Calendar event model as returned by the property-management backend.
//!
//! Events arrive as camelCase JSON with a human display date
//! (`"24 Nov, 2025"`) and an open-ended metadata object. Only the metadata
//! keys this crate understands are kept; everything else is dropped during
//! deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Kind of record the backend produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Reminder,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Task => "task",
            EventKind::Reminder => "reminder",
        }
    }
}

/// Typed view of `event.metadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    /// Raw, unvalidated category hint. Normalized by the classifier.
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub reminder_type: Option<String>,
}

impl EventMetadata {
    pub fn with_reminder_type(reminder_type: impl Into<String>) -> Self {
        Self {
            reminder_type: Some(reminder_type.into()),
        }
    }
}

/// A raw task or reminder record fetched for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub title: String,
    /// Display date, e.g. `"24 Nov, 2025"`.
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub property_id: Option<String>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub metadata: Option<EventMetadata>,
}

impl CalendarEvent {
    /// Create an event with the required fields; optional fields start empty.
    pub fn new(
        id: impl Into<String>,
        kind: EventKind,
        title: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            date: date.into(),
            time: None,
            property_id: None,
            property_name: None,
            assignee: None,
            status: None,
            metadata: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_property(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.property_id = Some(id.into());
        self.property_name = Some(name.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_metadata(mut self, metadata: EventMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The metadata category hint, if any was supplied.
    pub fn reminder_type_hint(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.reminder_type.as_deref())
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_to_string))
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value).ok_or_else(|| serde::de::Error::custom("event id must be a string or number"))
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_scalar_string(deserializer)
}
