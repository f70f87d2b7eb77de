//! Campus events.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub organizer: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub description: String,
}

/// Fields accepted when creating an event. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEvent {
    pub title: Option<String>,
    pub organizer: Option<String>,
    pub location: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
}

impl NewEvent {
    /// Pick known string fields out of an arbitrary payload.
    ///
    /// Non-object payloads and non-string fields are ignored.
    pub fn from_payload(payload: &Value) -> Self {
        let field = |key: &str| {
            payload
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            title: field("title"),
            organizer: field("organizer"),
            location: field("location"),
            time: field("time"),
            description: field("description"),
        }
    }

    pub fn into_event(self, id: String) -> Event {
        let time = self.time.and_then(|raw| match DateTime::parse_from_rfc3339(&raw) {
            Ok(t) => Some(t.with_timezone(&Utc)),
            Err(e) => {
                warn!("Dropping unparseable event time {:?}: {}", raw, e);
                None
            }
        });

        Event {
            id,
            title: self.title.unwrap_or_default(),
            organizer: self.organizer.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            time,
            description: self.description.unwrap_or_default(),
        }
    }
}
