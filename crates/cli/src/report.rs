//! View reports: a snapshot plus the geometry each view needs.

use bigcal_core::calendar::{
    event_block_style, events_count, group_events, range_text, start_of_month, visible_hours,
    BlockStyle, CalendarSettings, CalendarView, Event, HourAxis, HourRange, ViewSnapshot,
};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Rendered form of a single view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewReport<'a> {
    pub range: String,
    pub snapshot: &'a ViewSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Vec<MonthSummary>>,
}

/// Hour axis and blocks for the day and week views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub axis: HourAxis,
    pub days: Vec<TimelineDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDay {
    pub date: NaiveDate,
    /// Multi-day and all-day events covering the day, shown above the axis.
    pub all_day: Vec<u64>,
    pub blocks: Vec<TimelineBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBlock {
    pub event_id: u64,
    pub column: usize,
    pub columns: usize,
    pub style: BlockStyle,
}

/// Per-month totals for the year view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: NaiveDate,
    pub events: usize,
    /// Days of the month on which at least one event starts.
    pub start_days: Vec<u32>,
}

impl<'a> ViewReport<'a> {
    pub fn build(snapshot: &'a ViewSnapshot, settings: &CalendarSettings) -> Self {
        let timeline = matches!(snapshot.view, CalendarView::Day | CalendarView::Week)
            .then(|| build_timeline(snapshot, settings));
        let year = (snapshot.view == CalendarView::Year).then(|| build_year(snapshot));

        Self {
            range: range_text(snapshot.view, snapshot.date),
            snapshot,
            timeline,
            year,
        }
    }
}

fn build_timeline(snapshot: &ViewSnapshot, settings: &CalendarSettings) -> Timeline {
    let single_day = snapshot.single_day_refs();
    let axis = visible_hours(&settings.visible_hours, &single_day);
    let range = HourRange::new(axis.earliest_event_hour, axis.latest_event_hour);

    let days = snapshot
        .window
        .days()
        .map(|date| {
            let all_day = snapshot
                .multi_day
                .iter()
                .filter(|event| event.covers_date(date))
                .map(|event| event.id)
                .collect();

            let timed: Vec<&Event> = single_day
                .iter()
                .copied()
                .filter(|event| event.start_date() == date)
                .collect();
            let groups = group_events(&timed);
            let blocks = groups
                .iter()
                .enumerate()
                .flat_map(|(column, group)| {
                    group.iter().map(move |event| (column, *event))
                })
                .map(|(column, event)| TimelineBlock {
                    event_id: event.id,
                    column,
                    columns: groups.len(),
                    style: event_block_style(event, date, column, groups.len(), Some(&range)),
                })
                .collect();

            TimelineDay {
                date,
                all_day,
                blocks,
            }
        })
        .collect();

    Timeline { axis, days }
}

fn build_year(snapshot: &ViewSnapshot) -> Vec<MonthSummary> {
    let events = snapshot.event_refs();
    let starts = snapshot.event_start_dates();
    let first = start_of_month(snapshot.window.start_date());

    (0..12)
        .filter_map(|offset| first.checked_add_months(Months::new(offset)))
        .map(|month| {
            let mut start_days: Vec<u32> = starts
                .iter()
                .map(|event| event.start_date())
                .filter(|date| date.year() == month.year() && date.month() == month.month())
                .map(|date| date.day())
                .collect();
            start_days.sort_unstable();
            start_days.dedup();

            MonthSummary {
                month,
                events: events_count(&events, month, CalendarView::Month),
                start_days,
            }
        })
        .collect()
}
