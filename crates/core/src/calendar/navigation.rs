use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::types::{CalendarView, Event};
use super::window::{resolve_view_window, start_of_week};

/// Direction for stepping through periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Previous => f.write_str("previous"),
            Direction::Next => f.write_str("next"),
        }
    }
}

/// Moves `date` one period of `view` forward or back.
///
/// Month and year steps clamp to the last valid day, so Jan 31 steps to
/// Feb 28. The agenda view steps by month. Dates outside chrono's range are
/// returned unchanged.
pub fn navigate_date(date: NaiveDate, view: CalendarView, direction: Direction) -> NaiveDate {
    let stepped = match (view, direction) {
        (CalendarView::Day, Direction::Next) => date.checked_add_days(Days::new(1)),
        (CalendarView::Day, Direction::Previous) => date.checked_sub_days(Days::new(1)),
        (CalendarView::Week, Direction::Next) => date.checked_add_days(Days::new(7)),
        (CalendarView::Week, Direction::Previous) => date.checked_sub_days(Days::new(7)),
        (CalendarView::Month | CalendarView::Agenda, Direction::Next) => {
            date.checked_add_months(Months::new(1))
        }
        (CalendarView::Month | CalendarView::Agenda, Direction::Previous) => {
            date.checked_sub_months(Months::new(1))
        }
        (CalendarView::Year, Direction::Next) => date.checked_add_months(Months::new(12)),
        (CalendarView::Year, Direction::Previous) => date.checked_sub_months(Months::new(12)),
    };
    stepped.unwrap_or(date)
}

const RANGE_FORMAT: &str = "%b %-d, %Y";

/// Human-readable label for the period shown by `view`.
///
/// The day view shows a single date (`Jan 15, 2025`); the others show the
/// first and last day of their window (`Jan 12, 2025 - Jan 18, 2025`).
pub fn range_text(view: CalendarView, date: NaiveDate) -> String {
    if view == CalendarView::Day {
        return date.format(RANGE_FORMAT).to_string();
    }
    let window = resolve_view_window(view, date);
    format!(
        "{} - {}",
        window.start_date().format(RANGE_FORMAT),
        window.end_date().format(RANGE_FORMAT)
    )
}

/// Returns true if both dates fall in the same period of `view`.
pub fn is_same_period(view: CalendarView, a: NaiveDate, b: NaiveDate) -> bool {
    match view {
        CalendarView::Day => a == b,
        CalendarView::Week => start_of_week(a) == start_of_week(b),
        CalendarView::Month | CalendarView::Agenda => {
            a.year() == b.year() && a.month() == b.month()
        }
        CalendarView::Year => a.year() == b.year(),
    }
}

/// Counts events that start in the same period of `view` as `date`.
pub fn events_count(events: &[&Event], date: NaiveDate, view: CalendarView) -> usize {
    events
        .iter()
        .filter(|event| is_same_period(view, event.start_date(), date))
        .count()
}

/// Events in progress at `now`.
pub fn current_events<'a>(events: &[&'a Event], now: NaiveDateTime) -> Vec<&'a Event> {
    events
        .iter()
        .copied()
        .filter(|event| event.start <= now && now <= event.end)
        .collect()
}
