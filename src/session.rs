//! Edit-session state machine.
//!
//! At most one edit is in flight at a time. The session holds a detached
//! working copy of the event, so in-progress changes only reach the store on
//! save; cancel throws them away.

use log::{debug, warn};

use crate::{Event, EventStore};

/// A field of the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    Start,
    End,
    Location,
}

/// The two mutually exclusive UI modes.
///
/// The machine cycles between them for the life of the session; there is no
/// terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    /// Browsing the list; filters and add/delete are available.
    #[default]
    Browsing,

    /// Editing a working copy; list and filter actions are suppressed.
    Editing(Event),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The event currently being edited, if any.
    pub fn working_copy(&self) -> Option<&Event> {
        match self {
            Self::Editing(copy) => Some(copy),
            Self::Browsing => None,
        }
    }

    /// Opens an edit session on a detached copy of the event.
    ///
    /// Ignored when a session is already active; the controller gates this,
    /// so hitting the branch means a caller skipped the gate.
    pub fn start_edit(&mut self, event: &Event) {
        match self {
            Self::Browsing => {
                debug!("Opening edit session for event {}", event.id);
                *self = Self::Editing(event.clone());
            }
            Self::Editing(current) => {
                warn!(
                    "Ignoring edit of event {} while event {} is already open",
                    event.id, current.id
                );
            }
        }
    }

    /// Sets one field of the working copy. Purely local; the store is not
    /// consulted or mutated.
    pub fn change_field(&mut self, field: EventField, value: &str) {
        match self {
            Self::Editing(copy) => match field {
                EventField::Title => copy.title = value.to_string(),
                EventField::Start => copy.start = value.to_string(),
                EventField::End => copy.end = value.to_string(),
                EventField::Location => {
                    // an emptied location field means "no location"
                    copy.location = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                }
            },
            Self::Browsing => warn!("Ignoring field change outside an edit session"),
        }
    }

    /// Commits the working copy through `EventStore::update` and returns to
    /// browsing. If the event was deleted mid-edit the update is the store's
    /// usual silent no-op.
    pub fn save(&mut self, store: &mut EventStore) {
        if let Self::Editing(copy) = std::mem::take(self) {
            debug!("Saving edit session for event {}", copy.id);
            store.update(copy);
        }
    }

    /// Discards the working copy without touching the store.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            debug!("Cancelling edit session");
        }
        *self = Self::Browsing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, EventStore};

    fn seeded() -> EventStore {
        EventStore::with_seed(Config::default())
    }

    #[test]
    fn cancel_discards_the_working_copy() {
        let mut store = seeded();
        let mut session = EditSession::default();

        session.start_edit(&store.get("3").unwrap());
        session.change_field(EventField::Title, "Renamed");
        session.cancel();

        assert!(!session.is_editing());
        assert_eq!(store.get("3").unwrap().title, "Client Presentation");
    }

    #[test]
    fn save_commits_the_working_copy() {
        let mut store = seeded();
        let mut session = EditSession::default();

        session.start_edit(&store.get("3").unwrap());
        session.change_field(EventField::Title, "Renamed");
        session.save(&mut store);

        assert!(!session.is_editing());
        assert_eq!(store.get("3").unwrap().title, "Renamed");
    }

    #[test]
    fn edits_stay_local_until_save() {
        let mut store = seeded();
        let mut session = EditSession::default();

        session.start_edit(&store.get("1").unwrap());
        session.change_field(EventField::Location, "Rooftop");

        assert_eq!(
            session.working_copy().unwrap().location.as_deref(),
            Some("Rooftop")
        );
        assert_eq!(
            store.get("1").unwrap().location.as_deref(),
            Some("Conference Room A")
        );
    }

    #[test]
    fn emptying_the_location_field_clears_it() {
        let mut store = seeded();
        let mut session = EditSession::default();

        session.start_edit(&store.get("1").unwrap());
        session.change_field(EventField::Location, "");
        session.save(&mut store);

        assert_eq!(store.get("1").unwrap().location, None);
    }

    #[test]
    fn save_after_concurrent_delete_is_a_no_op() {
        let mut store = seeded();
        let mut session = EditSession::default();

        session.start_edit(&store.get("4").unwrap());
        session.change_field(EventField::Title, "Orphaned");
        store.remove("4");
        session.save(&mut store);

        assert!(!session.is_editing());
        assert_eq!(store.len(), 3);
        assert!(store.get("4").is_none());
    }

    #[test]
    fn second_start_edit_is_ignored_while_active() {
        let store = seeded();
        let mut session = EditSession::default();

        session.start_edit(&store.get("1").unwrap());
        session.start_edit(&store.get("2").unwrap());

        assert_eq!(session.working_copy().unwrap().id, "1");
    }

    #[test]
    fn field_changes_while_browsing_are_ignored() {
        let mut session = EditSession::default();
        session.change_field(EventField::Title, "Nowhere");
        assert!(!session.is_editing());
    }
}
