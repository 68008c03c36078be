//! Day and week timeline geometry.
//!
//! Timed events are drawn as blocks on a vertical hour axis. Overlapping
//! events share the column width side by side.

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use super::types::{Event, VisibleHours, WorkingHours};
use super::window::{end_of_day, start_of_day};

const MINUTES_PER_DAY: f64 = 1440.0;

/// Packs events into side-by-side columns.
///
/// Events are sorted by start; each joins the first column whose last event
/// has ended by the time it starts, or opens a new column.
pub fn group_events<'a>(events: &[&'a Event]) -> Vec<Vec<&'a Event>> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let mut groups: Vec<Vec<&'a Event>> = Vec::new();
    for event in sorted {
        let slot = groups.iter_mut().find(|group| {
            group
                .last()
                .is_some_and(|last| event.start >= last.end)
        });
        match slot {
            Some(group) => group.push(event),
            None => groups.push(vec![event]),
        }
    }
    groups
}

/// Position of an event block, in percent of the timeline column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

/// Computes where an event block sits within `day`.
///
/// `top` and `height` are relative to the whole day, or to `visible` when a
/// visible-hours range is given. Parts of the event outside `day` are cut.
pub fn event_block_style(
    event: &Event,
    day: NaiveDate,
    group_index: usize,
    group_size: usize,
    visible: Option<&VisibleHours>,
) -> BlockStyle {
    let day_start = start_of_day(day);
    let block_start = event.start.max(day_start);
    let block_end = event.end.min(end_of_day(day));

    let start_minutes = (block_start - day_start).num_minutes() as f64;
    let duration_minutes = (block_end - block_start).num_minutes().max(0) as f64;

    let (offset_minutes, range_minutes) = match visible {
        Some(hours) => (
            f64::from(hours.from) * 60.0,
            f64::from(hours.to.saturating_sub(hours.from)) * 60.0,
        ),
        None => (0.0, MINUTES_PER_DAY),
    };
    let range_minutes = if range_minutes > 0.0 {
        range_minutes
    } else {
        MINUTES_PER_DAY
    };

    let size = group_size.max(1) as f64;
    let width = 100.0 / size;

    BlockStyle {
        top: (start_minutes - offset_minutes) / range_minutes * 100.0,
        height: duration_minutes / range_minutes * 100.0,
        left: group_index as f64 * width,
        width,
    }
}

/// Returns true if `hour` falls inside the working hours of `day`'s weekday.
pub fn is_working_hour(day: NaiveDate, hour: u32, working_hours: &WorkingHours) -> bool {
    working_hours.for_date(day).contains(hour)
}

/// The hour axis of a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourAxis {
    pub hours: Vec<u32>,
    pub earliest_event_hour: u32,
    pub latest_event_hour: u32,
}

/// Widens the configured visible hours so every single-day event fits.
///
/// Event ends with minutes round up to the next hour; the axis never runs
/// past midnight.
pub fn visible_hours(configured: &VisibleHours, single_day: &[&Event]) -> HourAxis {
    let mut earliest = configured.from;
    let mut latest = configured.to;

    for event in single_day {
        let start_hour = event.start.hour();
        let end_hour = event.end.hour() + u32::from(event.end.minute() > 0);
        earliest = earliest.min(start_hour);
        latest = latest.max(end_hour);
    }
    let latest = latest.min(24);

    HourAxis {
        hours: (earliest..latest).collect(),
        earliest_event_hour: earliest,
        latest_event_hour: latest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::{HourRange, User};
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn test_user() -> User {
        User::new("Alice").with_id(Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap())
    }

    fn make_date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        make_date(day).and_hms_opt(hour, minute, 0).unwrap()
    }

    fn timed(id: u64, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(id, format!("Event {id}"), at(15, start.0, start.1), at(15, end.0, end.1), test_user())
    }

    #[test]
    fn test_group_events_columns() {
        let events = vec![
            timed(1, (9, 0), (10, 0)),
            timed(2, (9, 30), (11, 0)),
            timed(3, (10, 0), (10, 30)),
            timed(4, (11, 0), (12, 0)),
        ];
        let refs: Vec<&Event> = events.iter().collect();
        let groups = group_events(&refs);

        let ids: Vec<Vec<u64>> = groups
            .iter()
            .map(|g| g.iter().map(|e| e.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![1, 3, 4], vec![2]]);
    }

    #[test]
    fn test_group_events_empty() {
        assert!(group_events(&[]).is_empty());
    }

    #[test]
    fn test_event_block_style_full_day() {
        let event = timed(1, (6, 0), (12, 0));
        let style = event_block_style(&event, make_date(15), 1, 2, None);

        assert_eq!(style.top, 25.0);
        assert_eq!(style.height, 25.0);
        assert_eq!(style.width, 50.0);
        assert_eq!(style.left, 50.0);
    }

    #[test]
    fn test_event_block_style_visible_hours() {
        let event = timed(1, (9, 0), (10, 0));
        let visible = HourRange::new(8, 18);
        let style = event_block_style(&event, make_date(15), 0, 1, Some(&visible));

        assert_eq!(style.top, 10.0);
        assert_eq!(style.height, 10.0);
        assert_eq!(style.width, 100.0);
        assert_eq!(style.left, 0.0);
    }

    #[test]
    fn test_event_block_style_clips_previous_day() {
        let event = Event::new(1, "Overnight", at(14, 22, 0), at(15, 6, 0), test_user());
        let style = event_block_style(&event, make_date(15), 0, 1, None);

        assert_eq!(style.top, 0.0);
        assert_eq!(style.height, 25.0);
    }

    #[test]
    fn test_is_working_hour() {
        let hours = WorkingHours::default();
        // 2025-01-15 is a Wednesday, 2025-01-18 a Saturday, 2025-01-19 a Sunday
        assert!(is_working_hour(make_date(15), 8, &hours));
        assert!(!is_working_hour(make_date(15), 17, &hours));
        assert!(is_working_hour(make_date(18), 11, &hours));
        assert!(!is_working_hour(make_date(18), 12, &hours));
        assert!(!is_working_hour(make_date(19), 10, &hours));
    }

    #[test]
    fn test_visible_hours_widen() {
        let events = vec![timed(1, (6, 30), (7, 0)), timed(2, (18, 15), (19, 45))];
        let refs: Vec<&Event> = events.iter().collect();
        let axis = visible_hours(&HourRange::new(7, 18), &refs);

        assert_eq!(axis.earliest_event_hour, 6);
        assert_eq!(axis.latest_event_hour, 20);
        assert_eq!(axis.hours.first(), Some(&6));
        assert_eq!(axis.hours.last(), Some(&19));
        assert_eq!(axis.hours.len(), 14);
    }

    #[test]
    fn test_visible_hours_defaults_and_cap() {
        let axis = visible_hours(&HourRange::new(7, 18), &[]);
        assert_eq!(axis.hours, (7..18).collect::<Vec<_>>());

        let late = timed(1, (22, 0), (23, 30));
        let axis = visible_hours(&HourRange::new(7, 18), &[&late]);
        assert_eq!(axis.latest_event_hour, 24);
    }
}
