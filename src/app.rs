//! View controller for the calendar screen.
//!
//! `CalendarApp` is the non-visual half of the calendar view: it owns the
//! store, the active filter criteria, and the edit session, and exposes the
//! action set the UI binds its fields and buttons to. Rendering is somebody
//! else's job; everything here is plain state.

use crate::{
    derive_locations, filter_events, CalError, Config, EditSession, Event, EventField, EventStore,
    FilterCriteria, Result,
};

/// Holds the durable store next to the ephemeral UI state (criteria and edit
/// session). The two are kept as separate structures so a persistence layer
/// could later attach to the store alone.
pub struct CalendarApp {
    store: EventStore,
    criteria: FilterCriteria,
    session: EditSession,
}

impl CalendarApp {
    /// Creates a controller over a freshly seeded store with empty criteria,
    /// browsing mode.
    pub fn new(config: Config) -> Self {
        Self {
            store: EventStore::with_seed(config),
            criteria: FilterCriteria::default(),
            session: EditSession::default(),
        }
    }

    /// The events currently visible: the store snapshot run through the
    /// active criteria. Recomputed in full on every call.
    pub fn visible_events(&self) -> Vec<Event> {
        filter_events(self.store.list(), &self.criteria)
    }

    /// Distinct known locations, for the location-filter option list.
    pub fn locations(&self) -> Vec<String> {
        derive_locations(self.store.list())
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn working_copy(&self) -> Option<&Event> {
        self.session.working_copy()
    }

    /// Sets the date constraint (substring match against `start`).
    pub fn set_date_filter(&mut self, value: &str) -> Result<()> {
        self.require_browsing("change filters")?;
        self.criteria.date = value.to_string();
        Ok(())
    }

    /// Sets the location constraint (exact match).
    pub fn set_location_filter(&mut self, value: &str) -> Result<()> {
        self.require_browsing("change filters")?;
        self.criteria.location = value.to_string();
        Ok(())
    }

    /// Sets the free-text search constraint.
    pub fn set_search(&mut self, value: &str) -> Result<()> {
        self.require_browsing("change filters")?;
        self.criteria.search = value.to_string();
        Ok(())
    }

    /// Resets all three constraints to empty.
    pub fn clear_filters(&mut self) -> Result<()> {
        self.require_browsing("clear filters")?;
        self.criteria.clear();
        Ok(())
    }

    /// Adds a placeholder event to the store and returns it.
    pub fn add_event(&mut self) -> Result<Event> {
        self.require_browsing("add an event")?;
        Ok(self.store.add())
    }

    /// Deletes the event with the given id.
    ///
    /// Returns whether anything was actually removed, so the caller can tell
    /// the user about a stale id; the store itself keeps its silent-no-op
    /// contract either way.
    pub fn delete_event(&mut self, id: &str) -> Result<bool> {
        self.require_browsing("delete an event")?;
        let existed = self.store.get(id).is_some();
        self.store.remove(id);
        Ok(existed)
    }

    /// Opens an edit session on a working copy of the event with this id.
    pub fn start_edit(&mut self, id: &str) -> Result<()> {
        self.require_browsing("start another edit")?;
        let event = self
            .store
            .get(id)
            .ok_or_else(|| CalError::EventNotFound { id: id.to_string() })?;
        self.session.start_edit(&event);
        Ok(())
    }

    /// Sets one field of the working copy.
    pub fn edit_field(&mut self, field: EventField, value: &str) -> Result<()> {
        self.require_editing("change an event field")?;
        self.session.change_field(field, value);
        Ok(())
    }

    /// Commits the working copy and returns to browsing.
    pub fn save_edit(&mut self) -> Result<()> {
        self.require_editing("save")?;
        self.session.save(&mut self.store);
        Ok(())
    }

    /// Discards the working copy and returns to browsing.
    pub fn cancel_edit(&mut self) -> Result<()> {
        self.require_editing("cancel an edit")?;
        self.session.cancel();
        Ok(())
    }

    // Browsing and editing are mutually exclusive; every action belongs to
    // exactly one of the two modes.

    fn require_browsing(&self, action: &str) -> Result<()> {
        if self.session.is_editing() {
            return Err(CalError::WrongMode {
                action: action.to_string(),
                mode: "editing".to_string(),
            });
        }
        Ok(())
    }

    fn require_editing(&self, action: &str) -> Result<()> {
        if !self.session.is_editing() {
            return Err(CalError::WrongMode {
                action: action.to_string(),
                mode: "browsing".to_string(),
            });
        }
        Ok(())
    }
}
