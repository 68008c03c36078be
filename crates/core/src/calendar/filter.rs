use super::types::{Event, UserFilter};
use super::window::ViewWindow;

/// In-range events split by how they are drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedEvents<'a> {
    /// Same-day timed events, drawn as blocks on a timeline.
    pub single_day: Vec<&'a Event>,
    /// Events spanning days or flagged all-day, drawn as bars.
    pub multi_day: Vec<&'a Event>,
}

/// Returns true if the event intersects the window and passes the user filter.
pub fn is_event_in_range(event: &Event, window: &ViewWindow, user: &UserFilter) -> bool {
    window.overlaps(event.start, event.end) && user.matches(event)
}

/// Filters events that overlap the window and belong to the selected user.
/// Store order is preserved.
pub fn filter_events<'a>(
    events: &'a [Event],
    window: &ViewWindow,
    user: &UserFilter,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| is_event_in_range(event, window, user))
        .collect()
}

/// Splits events into single-day and multi-day subsets.
/// Every event lands in exactly one of them.
pub fn partition_events<'a>(events: &[&'a Event]) -> PartitionedEvents<'a> {
    let (single_day, multi_day) = events.iter().copied().partition(|event| event.is_single_day());
    PartitionedEvents {
        single_day,
        multi_day,
    }
}

/// Collapses each event to its start instant.
///
/// The year view marks only the day an event begins.
pub fn event_start_dates(events: &[&Event]) -> Vec<Event> {
    events
        .iter()
        .map(|event| Event {
            end: event.start,
            ..(*event).clone()
        })
        .collect()
}
