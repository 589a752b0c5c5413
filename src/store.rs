//! In-memory event storage for the mycal application.
//!
//! The store owns the authoritative ordered collection of events for the
//! session. Nothing is persisted; the collection lives and dies with the
//! process.

use chrono::{Duration, Local};
use log::{debug, info, trace};

use crate::{initial_events, Config, Event};

/// Manages the ordered collection of calendar events.
///
/// Invariants: ids are unique across the collection, and insertion order is
/// preserved (it is the default display order). Mutations with an unknown id
/// are ignored rather than reported; ids are generated internally, so a miss
/// only happens with a stale reference.
pub struct EventStore {
    /// Application configuration (placeholder values for new events)
    config: Config,

    /// Events in insertion order
    events: Vec<Event>,
}

impl EventStore {
    /// Creates an empty store with the provided configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            events: Vec::new(),
        }
    }

    /// Creates a store seeded according to the configuration.
    pub fn with_seed(config: Config) -> Self {
        let events = if config.seed_events {
            initial_events()
        } else {
            Vec::new()
        };
        info!("Initialized event store with {} seed events", events.len());
        Self { config, events }
    }

    /// Creates a new event with placeholder values and appends it to the
    /// collection.
    ///
    /// The id is freshly generated and unique within the store; `start` is
    /// the current local time and `end` follows after the configured default
    /// duration. Always succeeds.
    ///
    /// # Returns
    ///
    /// A copy of the event that was added
    pub fn add(&mut self) -> Event {
        let now = Local::now().naive_local();
        let end = now + Duration::minutes(i64::from(self.config.default_duration_minutes));

        let event = Event {
            id: self.next_id(),
            title: self.config.default_title.clone(),
            start: Event::format_timestamp(now),
            end: Event::format_timestamp(end),
            location: Some(self.config.default_location.clone()),
        };

        debug!(
            "Adding event {} at position {}",
            event.id,
            self.events.len()
        );
        self.events.push(event.clone());
        event
    }

    /// Replaces the stored event whose id matches `event.id`.
    ///
    /// All other events and their order are untouched. Silent no-op when no
    /// event with that id exists.
    pub fn update(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                trace!("Updating event {}", event.id);
                *slot = event;
            }
            None => debug!("Ignoring update for unknown event id {}", event.id),
        }
    }

    /// Removes the event with the given id, if present.
    ///
    /// Silent no-op when the id is unknown.
    pub fn remove(&mut self, id: &str) {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() < before {
            info!("Removed event {}", id);
        } else {
            debug!("Ignoring removal of unknown event id {}", id);
        }
    }

    /// Returns the full collection in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Returns a copy of the event with the given id, if present.
    pub fn get(&self, id: &str) -> Option<Event> {
        self.events.iter().find(|e| e.id == id).cloned()
    }

    /// Number of events currently in the store.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Generates a fresh unique id: millisecond wall-clock timestamp, bumped
    /// while it collides with an id already in the store so that repeated
    /// adds within the same millisecond still differ.
    fn next_id(&self) -> String {
        let mut candidate = Local::now().timestamp_millis();
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn contains(&self, id: &str) -> bool {
        self.events.iter().any(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDateTime;

    use super::*;
    use crate::TIMESTAMP_FORMAT;

    fn seeded() -> EventStore {
        EventStore::with_seed(Config::default())
    }

    #[test]
    fn add_generates_unique_ids() {
        let mut store = seeded();
        for _ in 0..50 {
            store.add();
        }
        let ids: HashSet<&str> = store.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn add_appends_one_event_with_one_hour_default_span() {
        let mut store = seeded();
        let before = store.len();

        let event = store.add();

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.list().last().unwrap(), &event);
        assert_eq!(event.title, "New Event");
        assert_eq!(event.location.as_deref(), Some("New Location"));

        let start = NaiveDateTime::parse_from_str(&event.start, TIMESTAMP_FORMAT).unwrap();
        let end = NaiveDateTime::parse_from_str(&event.end, TIMESTAMP_FORMAT).unwrap();
        assert_eq!(end - start, Duration::hours(1));
    }

    #[test]
    fn update_replaces_only_the_matching_event() {
        let mut store = seeded();
        let mut event = store.get("2").unwrap();
        event.title = "Quarterly Review".to_string();
        event.location = None;

        let untouched: Vec<Event> = store
            .list()
            .iter()
            .filter(|e| e.id != "2")
            .cloned()
            .collect();

        store.update(event.clone());

        let matches: Vec<&Event> = store.list().iter().filter(|e| e.id == "2").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], &event);

        let others: Vec<Event> = store
            .list()
            .iter()
            .filter(|e| e.id != "2")
            .cloned()
            .collect();
        assert_eq!(others, untouched);
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let mut store = seeded();
        let snapshot = store.list().to_vec();

        store.update(Event {
            id: "999".to_string(),
            title: "Ghost".to_string(),
            start: "2024-01-01T00:00:00".to_string(),
            end: "2024-01-01T01:00:00".to_string(),
            location: None,
        });

        assert_eq!(store.list(), snapshot.as_slice());
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut store = seeded();
        store.remove("2");

        let ids: Vec<&str> = store.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn remove_with_unknown_id_is_a_no_op() {
        let mut store = seeded();
        store.remove("999");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn seeding_can_be_disabled() {
        let config = Config {
            seed_events: false,
            ..Config::default()
        };
        assert!(EventStore::with_seed(config).is_empty());
    }
}
