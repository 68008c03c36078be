//! View window resolution.
//!
//! A view window is the inclusive range of local date-times a calendar view
//! displays. Weeks run Sunday through Saturday.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::types::CalendarView;

/// An inclusive range of local date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ViewWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Covers whole days from `first` through `last`.
    pub fn from_dates(first: NaiveDate, last: NaiveDate) -> Self {
        Self::new(start_of_day(first), end_of_day(last))
    }

    /// Returns true if the range `[start, end]` intersects this window.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start <= self.end && end >= self.start
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Every calendar day the window touches, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.end_date();
        self.start_date()
            .iter_days()
            .take_while(move |day| *day <= last)
    }
}

/// Resolves the window displayed by `view` around `date`.
pub fn resolve_view_window(view: CalendarView, date: NaiveDate) -> ViewWindow {
    match view {
        CalendarView::Day => ViewWindow::new(start_of_day(date), last_second_of_day(date)),
        CalendarView::Week => ViewWindow::from_dates(start_of_week(date), end_of_week(date)),
        CalendarView::Month | CalendarView::Agenda => {
            ViewWindow::from_dates(start_of_month(date), end_of_month(date))
        }
        CalendarView::Year => ViewWindow::from_dates(start_of_year(date), end_of_year(date)),
    }
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59 on `date`. The day view ends here.
pub fn last_second_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + TimeDelta::days(1) - TimeDelta::seconds(1)
}

/// The last representable millisecond of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + TimeDelta::days(1) - TimeDelta::milliseconds(1)
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Days::new(6)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date) + Months::new(1) - Days::new(1)
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.ordinal0()))
}

pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    start_of_year(date) + Months::new(12) - Days::new(1)
}
