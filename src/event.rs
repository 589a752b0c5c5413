//! Core data structures for the mycal application.
//!
//! This module contains the calendar event entity and the fixed list of
//! events every session is seeded with.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the `start` and `end` wall-clock timestamps: ISO-8601 with no
/// offset, interpreted as local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Represents a single calendar event in our system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event, assigned by the store
    pub id: String,
    /// Event title, free text, may be empty
    pub title: String,
    /// When the event starts
    pub start: String,
    /// When the event ends (not required to be after `start`)
    pub end: String,
    /// Where the event takes place, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    /// Returns the location if it is present and non-empty.
    ///
    /// An absent location and an empty string mean the same thing to the
    /// filter engine and to location derivation.
    pub fn location_str(&self) -> Option<&str> {
        self.location.as_deref().filter(|loc| !loc.is_empty())
    }

    /// Formats a timestamp into the form stored in `start`/`end`.
    pub fn format_timestamp(ts: NaiveDateTime) -> String {
        ts.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The fixed list of events a session starts out with.
pub fn initial_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Team Meeting".to_string(),
            start: "2024-03-20T10:00:00".to_string(),
            end: "2024-03-20T11:00:00".to_string(),
            location: Some("Conference Room A".to_string()),
        },
        Event {
            id: "2".to_string(),
            title: "Project Review".to_string(),
            start: "2024-03-20T14:00:00".to_string(),
            end: "2024-03-20T15:30:00".to_string(),
            location: Some("Virtual".to_string()),
        },
        Event {
            id: "3".to_string(),
            title: "Client Presentation".to_string(),
            start: "2024-03-21T09:00:00".to_string(),
            end: "2024-03-21T10:30:00".to_string(),
            location: Some("Conference Room B".to_string()),
        },
        Event {
            id: "4".to_string(),
            title: "Team Building".to_string(),
            start: "2024-03-22T13:00:00".to_string(),
            end: "2024-03-22T17:00:00".to_string(),
            location: Some("Central Park".to_string()),
        },
    ]
}
