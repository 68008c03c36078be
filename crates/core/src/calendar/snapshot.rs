//! Derived view data and its memoization.
//!
//! A [`ViewSnapshot`] is everything a view needs to render: its window, the
//! filtered events and, for the month view, the bar layout. Snapshots depend
//! only on the store revision, the view, the selected date and the selected
//! user, so [`SnapshotCache`] keys them on exactly those inputs and recomputes
//! only when one of them changes.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::NaiveDate;
use lru::LruCache;
use serde::Serialize;

use super::filter::{event_start_dates, filter_events, partition_events};
use super::layout::{calculate_month_layout, LayoutConfig, MonthLayout};
use super::store::EventStore;
use super::types::{CalendarView, Event, UserFilter};
use super::window::{resolve_view_window, ViewWindow};

pub const DEFAULT_CACHE_ENTRIES: usize = 16;

/// Everything derived for one view of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub view: CalendarView,
    pub date: NaiveDate,
    pub user: UserFilter,
    pub window: ViewWindow,
    /// In-range events in store order.
    pub events: Vec<Event>,
    pub single_day: Vec<Event>,
    pub multi_day: Vec<Event>,
    /// Present for the month view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_layout: Option<MonthLayout>,
}

impl ViewSnapshot {
    /// Derives the snapshot for `view` from the store's current selection.
    pub fn compute(store: &EventStore, view: CalendarView, layout: &LayoutConfig) -> Self {
        let date = store.selected_date();
        let user = store.selected_user();
        let window = resolve_view_window(view, date);

        let filtered = filter_events(store.events(), &window, &user);
        let parts = partition_events(&filtered);

        let month_layout = (view == CalendarView::Month)
            .then(|| calculate_month_layout(&parts.multi_day, &parts.single_day, date, layout));

        Self {
            view,
            date,
            user,
            window,
            single_day: parts.single_day.into_iter().cloned().collect(),
            multi_day: parts.multi_day.into_iter().cloned().collect(),
            events: filtered.into_iter().cloned().collect(),
            month_layout,
        }
    }

    pub fn event(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn event_refs(&self) -> Vec<&Event> {
        self.events.iter().collect()
    }

    pub fn single_day_refs(&self) -> Vec<&Event> {
        self.single_day.iter().collect()
    }

    pub fn multi_day_refs(&self) -> Vec<&Event> {
        self.multi_day.iter().collect()
    }

    /// In-range events collapsed to their start, for year-view indicators.
    pub fn event_start_dates(&self) -> Vec<Event> {
        event_start_dates(&self.event_refs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SnapshotKey {
    revision: u64,
    view: CalendarView,
    date: NaiveDate,
    user: UserFilter,
}

/// LRU-bounded memo of view snapshots.
pub struct SnapshotCache {
    entries: LruCache<SnapshotKey, Arc<ViewSnapshot>>,
    layout: LayoutConfig,
    hits: u64,
    misses: u64,
}

impl SnapshotCache {
    pub fn new(capacity: usize, layout: LayoutConfig) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            layout,
            hits: 0,
            misses: 0,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the snapshot for `view`, recomputing it only when the store
    /// changed since it was cached.
    pub fn get(&mut self, store: &EventStore, view: CalendarView) -> Arc<ViewSnapshot> {
        let key = SnapshotKey {
            revision: store.revision(),
            view,
            date: store.selected_date(),
            user: store.selected_user(),
        };

        if let Some(snapshot) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(snapshot);
        }

        self.misses += 1;
        tracing::debug!(
            view = %view,
            date = %key.date,
            user = %key.user,
            revision = key.revision,
            "Recomputing view snapshot"
        );
        let snapshot = Arc::new(ViewSnapshot::compute(store, view, &self.layout));
        self.entries.put(key, Arc::clone(&snapshot));
        snapshot
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES, LayoutConfig::default())
    }
}

impl std::fmt::Debug for SnapshotCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("layout", &self.layout)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
