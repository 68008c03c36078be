//! The event store.
//!
//! The store is the single owner of events, users and display settings.
//! Every mutation of event or user data bumps [`EventStore::revision`], which
//! derived views use to decide whether to recompute.

use chrono::NaiveDate;
use uuid::Uuid;

use super::error::{Result, StoreError};
use super::types::{CalendarSettings, Event, User, UserFilter};

#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    users: Vec<User>,
    selected_date: NaiveDate,
    selected_user: UserFilter,
    settings: CalendarSettings,
    revision: u64,
}

impl EventStore {
    /// Creates an empty store focused on `selected_date`.
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            events: Vec::new(),
            users: Vec::new(),
            selected_date,
            selected_user: UserFilter::All,
            settings: CalendarSettings::default(),
            revision: 0,
        }
    }

    pub fn with_settings(mut self, settings: CalendarSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces all users and events.
    ///
    /// Events get the same checks as [`EventStore::add_event`]; on error the
    /// store is left untouched.
    pub fn initialize(&mut self, users: Vec<User>, events: Vec<Event>) -> Result<()> {
        for (index, event) in events.iter().enumerate() {
            check_range(event)?;
            if events[..index].iter().any(|e| e.id == event.id) {
                return Err(already_exists(event.id));
            }
        }
        tracing::debug!(
            users = users.len(),
            events = events.len(),
            "Initializing event store"
        );
        self.users = users;
        self.events = events;
        self.bump();
        Ok(())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn event(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// One past the largest event ID in the store.
    pub fn next_event_id(&self) -> Result<u64> {
        match self.events.iter().map(|e| e.id).max() {
            None => Ok(1),
            Some(last) => last
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted { last }),
        }
    }

    /// Appends a new event.
    pub fn add_event(&mut self, event: Event) -> Result<()> {
        check_range(&event)?;
        if self.event(event.id).is_some() {
            return Err(already_exists(event.id));
        }
        tracing::debug!(id = event.id, title = %event.title, "Adding event");
        self.events.push(event);
        self.bump();
        Ok(())
    }

    /// Replaces the event with the same ID, keeping its position.
    pub fn update_event(&mut self, event: Event) -> Result<()> {
        check_range(&event)?;
        let slot = self
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| StoreError::event_not_found(event.id))?;
        tracing::debug!(id = event.id, title = %event.title, "Updating event");
        *slot = event;
        self.bump();
        Ok(())
    }

    /// Removes the event and returns it.
    pub fn delete_event(&mut self, id: u64) -> Result<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::event_not_found(id))?;
        tracing::debug!(id, "Deleting event");
        let removed = self.events.remove(index);
        self.bump();
        Ok(removed)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Moves the focus to `date`. `None` leaves the selection untouched.
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        if let Some(date) = date {
            self.selected_date = date;
        }
    }

    pub fn selected_user(&self) -> UserFilter {
        self.selected_user
    }

    pub fn set_selected_user(&mut self, filter: UserFilter) {
        self.selected_user = filter;
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut CalendarSettings {
        &mut self.settings
    }

    /// Monotonic counter of data mutations.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

fn already_exists(id: u64) -> StoreError {
    StoreError::AlreadyExists {
        entity_type: "Event",
        id: id.to_string(),
    }
}

fn check_range(event: &Event) -> Result<()> {
    if event.end < event.start {
        return Err(StoreError::InvalidDateRange { id: event.id });
    }
    Ok(())
}
