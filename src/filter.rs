//! Filter and search engine for the event list.
//!
//! Pure functions over a store snapshot plus the active criteria. The result
//! is recomputed in full on every change; the target scale is small, and an
//! index (e.g. keyed by location) could be introduced later without touching
//! these signatures.

use std::collections::HashSet;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::Event;

/// The constraints currently applied to the visible event list.
///
/// All three are independent, and an empty string means no constraint.
/// Criteria are transient UI state, never persisted, and kept separate from
/// the store's durable collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring match against `start` (date-prefix style, not a parsed range)
    pub date: String,

    /// Exact, case-sensitive match against the location
    pub location: String,

    /// Case-insensitive substring match against title or location
    pub search: String,
}

impl FilterCriteria {
    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.location.is_empty() && self.search.is_empty()
    }

    /// Resets all three constraints to empty. Does not touch the store.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Returns the events matching every active constraint, in input order.
pub fn filter_events(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    let search = criteria.search.to_lowercase();

    let matched: Vec<Event> = events
        .iter()
        .filter(|event| {
            let matches_date = criteria.date.is_empty() || event.start.contains(&criteria.date);

            let matches_location = criteria.location.is_empty()
                || event.location.as_deref() == Some(criteria.location.as_str());

            let matches_search = search.is_empty()
                || event.title.to_lowercase().contains(&search)
                || event
                    .location_str()
                    .is_some_and(|loc| loc.to_lowercase().contains(&search));

            matches_date && matches_location && matches_search
        })
        .cloned()
        .collect();

    trace!(
        "Filtered {} of {} events with criteria {:?}",
        matched.len(),
        events.len(),
        criteria
    );
    matched
}

/// Collects every distinct non-empty location across the events.
///
/// First-seen order, so repeated calls over the same input always agree and
/// the location dropdown never reorders mid-session.
pub fn derive_locations(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut locations = Vec::new();
    for event in events {
        if let Some(loc) = event.location_str() {
            if seen.insert(loc.to_string()) {
                locations.push(loc.to_string());
            }
        }
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initial_events;

    fn criteria(date: &str, location: &str, search: &str) -> FilterCriteria {
        FilterCriteria {
            date: date.to_string(),
            location: location.to_string(),
            search: search.to_string(),
        }
    }

    #[test]
    fn empty_criteria_is_the_identity() {
        let events = initial_events();
        let filtered = filter_events(&events, &FilterCriteria::default());
        assert_eq!(filtered, events);
    }

    #[test]
    fn filtering_is_idempotent() {
        let events = initial_events();
        let c = criteria("2024-03-20", "", "team");
        let once = filter_events(&events, &c);
        let twice = filter_events(&once, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn search_is_case_insensitive() {
        let events = initial_events();
        let upper = filter_events(&events, &criteria("", "", "TEAM"));
        let lower = filter_events(&events, &criteria("", "", "team"));
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2); // Team Meeting, Team Building
    }

    #[test]
    fn location_filter_matches_exactly() {
        let events = initial_events();
        let filtered = filter_events(&events, &criteria("", "Virtual", ""));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");

        // case-sensitive: no match for a lowercased value
        assert!(filter_events(&events, &criteria("", "virtual", "")).is_empty());
    }

    #[test]
    fn search_matches_titles_and_locations() {
        let events = initial_events();
        let by_title = filter_events(&events, &criteria("", "", "Review"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "2");

        let by_location = filter_events(&events, &criteria("", "", "park"));
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, "4");
    }

    #[test]
    fn date_filter_is_a_substring_match_on_start() {
        let events = initial_events();
        let filtered = filter_events(&events, &criteria("2024-03-20", "", ""));
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn all_constraints_must_hold() {
        let events = initial_events();
        // date matches ids 1 and 2; search "team" only matches id 1 of those
        let filtered = filter_events(&events, &criteria("2024-03-20", "", "team"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn clear_resets_all_constraints() {
        let events = initial_events();
        let mut c = criteria("2024-03-21", "Virtual", "client");
        assert!(!c.is_empty());

        c.clear();
        assert!(c.is_empty());
        assert_eq!(filter_events(&events, &c), events);
    }

    #[test]
    fn derive_locations_deduplicates_in_first_seen_order() {
        let mut events = initial_events();
        let mut duplicate = events[0].clone();
        duplicate.id = "5".to_string();
        duplicate.location = Some("Virtual".to_string());
        events.push(duplicate);

        let locations = derive_locations(&events);
        assert_eq!(
            locations,
            vec![
                "Conference Room A",
                "Virtual",
                "Conference Room B",
                "Central Park"
            ]
        );
        // deterministic across calls with the same input
        assert_eq!(derive_locations(&events), locations);
    }

    #[test]
    fn derive_locations_skips_absent_and_empty() {
        let mut events = initial_events();
        events[0].location = None;
        events[1].location = Some(String::new());

        let locations = derive_locations(&events);
        assert_eq!(locations, vec!["Conference Room B", "Central Park"]);
    }
}
