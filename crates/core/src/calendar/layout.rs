//! Month grid layout.
//!
//! Each week row of the month grid stacks event bars into a bounded number of
//! rows. Placement is greedy: events are visited in order and take the lowest
//! row that is free on every day they cover within the week. An event that
//! finds no free row is hidden and counted in the "+N more" indicator of each
//! day it would have covered.

use std::cmp::Ordering;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::grid::grid_week_starts;
use super::types::Event;
use super::window::{end_of_month, start_of_month};

pub const DEFAULT_MAX_ROWS_PER_WEEK: usize = 3;

const DAYS_PER_WEEK: usize = 7;

/// Tunables for the month layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Rows of bars shown per week before events collapse into "+N more".
    pub max_rows_per_week: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_rows_per_week: DEFAULT_MAX_ROWS_PER_WEEK,
        }
    }
}

/// A horizontal bar for one event inside one week row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBar {
    pub event_id: u64,
    pub row: usize,
    /// Column of the first covered day; 0 is Sunday.
    pub start_column: usize,
    /// Number of columns covered, at least 1.
    pub span: usize,
    /// The event started before this bar's first day.
    pub continues_before: bool,
    /// The event ends after this bar's last day.
    pub continues_after: bool,
}

impl EventBar {
    pub fn end_column(&self) -> usize {
        self.start_column + self.span - 1
    }

    pub fn covers_column(&self, column: usize) -> bool {
        self.start_column <= column && column <= self.end_column()
    }
}

/// Placement for one week row of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLayout {
    /// The Sunday this row starts on.
    pub week_start: NaiveDate,
    pub bars: Vec<EventBar>,
    /// Events that did not fit, per column.
    pub hidden: [usize; DAYS_PER_WEEK],
}

impl WeekLayout {
    fn empty(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            bars: Vec::new(),
            hidden: [0; DAYS_PER_WEEK],
        }
    }

    /// Column of `date` in this row, if the row contains it.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.week_start).num_days();
        usize::try_from(offset)
            .ok()
            .filter(|column| *column < DAYS_PER_WEEK)
    }

    pub fn bar_for(&self, event_id: u64) -> Option<&EventBar> {
        self.bars.iter().find(|bar| bar.event_id == event_id)
    }

    /// Number of rows in use.
    pub fn row_count(&self) -> usize {
        self.bars.iter().map(|bar| bar.row + 1).max().unwrap_or(0)
    }

    /// Bars that cover `column`, ordered by row.
    pub fn bars_at(&self, column: usize) -> Vec<&EventBar> {
        let mut bars: Vec<_> = self
            .bars
            .iter()
            .filter(|bar| bar.covers_column(column))
            .collect();
        bars.sort_by_key(|bar| bar.row);
        bars
    }
}

/// Placement for every week row of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLayout {
    pub month_start: NaiveDate,
    pub max_rows_per_week: usize,
    pub weeks: Vec<WeekLayout>,
}

impl MonthLayout {
    pub fn week_of(&self, date: NaiveDate) -> Option<&WeekLayout> {
        self.weeks
            .iter()
            .find(|week| week.column_of(date).is_some())
    }

    /// Row the event occupies on `date`, if it is visible there.
    pub fn row_for(&self, event_id: u64, date: NaiveDate) -> Option<usize> {
        let week = self.week_of(date)?;
        let column = week.column_of(date)?;
        week.bar_for(event_id)
            .filter(|bar| bar.covers_column(column))
            .map(|bar| bar.row)
    }

    /// The "+N more" count for `date`.
    pub fn more_count(&self, date: NaiveDate) -> usize {
        self.week_of(date)
            .and_then(|week| week.column_of(date).map(|column| week.hidden[column]))
            .unwrap_or(0)
    }
}

/// Lays out events on the month grid containing `date`.
///
/// Multi-day events are placed first, ordered by start date (longer events
/// first on ties); single-day events fill the remaining rows in start order.
/// Bars are clipped to the month and to their week row.
pub fn calculate_month_layout(
    multi_day: &[&Event],
    single_day: &[&Event],
    date: NaiveDate,
    config: &LayoutConfig,
) -> MonthLayout {
    let month_start = start_of_month(date);
    let month_end = end_of_month(date);

    let mut multi_day = multi_day.to_vec();
    multi_day.sort_by(|a, b| compare_multi_day(a, b));
    let mut single_day = single_day.to_vec();
    single_day.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let ordered: Vec<&Event> = multi_day.into_iter().chain(single_day).collect();

    let weeks = grid_week_starts(date)
        .into_iter()
        .map(|week_start| {
            layout_week(
                &ordered,
                week_start,
                month_start,
                month_end,
                config.max_rows_per_week,
            )
        })
        .collect();

    MonthLayout {
        month_start,
        max_rows_per_week: config.max_rows_per_week,
        weeks,
    }
}

fn compare_multi_day(a: &Event, b: &Event) -> Ordering {
    a.start_date()
        .cmp(&b.start_date())
        .then_with(|| b.duration_days().cmp(&a.duration_days()))
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.id.cmp(&b.id))
}

fn layout_week(
    events: &[&Event],
    week_start: NaiveDate,
    visible_start: NaiveDate,
    visible_end: NaiveDate,
    max_rows: usize,
) -> WeekLayout {
    let mut week = WeekLayout::empty(week_start);
    let first_visible = week_start.max(visible_start);
    let last_visible = (week_start + Days::new(6)).min(visible_end);
    if first_visible > last_visible {
        return week;
    }

    let mut occupied = vec![[false; DAYS_PER_WEEK]; max_rows];

    for event in events {
        let first = event.start_date().max(first_visible);
        let last = event.end_date().min(last_visible);
        if first > last {
            continue;
        }

        let start_column = (first - week_start).num_days() as usize;
        let end_column = (last - week_start).num_days() as usize;
        let columns = start_column..=end_column;

        let free_row = occupied
            .iter()
            .position(|row| row[columns.clone()].iter().all(|taken| !taken));

        match free_row {
            Some(row) => {
                occupied[row][columns].fill(true);
                week.bars.push(EventBar {
                    event_id: event.id,
                    row,
                    start_column,
                    span: end_column - start_column + 1,
                    continues_before: event.start_date() < first,
                    continues_after: event.end_date() > last,
                });
            }
            None => {
                for hidden in &mut week.hidden[columns] {
                    *hidden += 1;
                }
            }
        }
    }

    week
}

/// An event shown in one month cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEvent<'a> {
    pub event: &'a Event,
    /// Row the event's bar occupies on this day; `None` when hidden.
    pub row: Option<usize>,
    pub is_multi_day: bool,
}

/// Lists the events touching `date`: multi-day first, then by row, hidden
/// events last.
pub fn month_cell_events<'a>(
    date: NaiveDate,
    events: &[&'a Event],
    layout: &MonthLayout,
) -> Vec<CellEvent<'a>> {
    let mut cell: Vec<CellEvent<'a>> = events
        .iter()
        .copied()
        .filter(|event| event.covers_date(date))
        .map(|event| CellEvent {
            event,
            row: layout.row_for(event.id, date),
            is_multi_day: event.is_multi_day(),
        })
        .collect();

    cell.sort_by(|a, b| {
        b.is_multi_day
            .cmp(&a.is_multi_day)
            .then_with(|| compare_rows(a.row, b.row))
    });
    cell
}

fn compare_rows(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::User;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn test_user() -> User {
        User::new("Alice").with_id(Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap())
    }

    fn make_date(month: u32, day: u32) -> NaiveDate {
        let year = if month == 12 { 2024 } else { 2025 };
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        make_date(month, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn spanning(id: u64, from: (u32, u32), to: (u32, u32)) -> Event {
        Event::new(id, format!("Event {id}"), at(from.0, from.1, 9), at(to.0, to.1, 17), test_user())
    }

    fn layout(multi: &[Event], single: &[Event], max_rows: usize) -> MonthLayout {
        let multi: Vec<&Event> = multi.iter().collect();
        let single: Vec<&Event> = single.iter().collect();
        calculate_month_layout(
            &multi,
            &single,
            make_date(1, 15),
            &LayoutConfig {
                max_rows_per_week: max_rows,
            },
        )
    }

    fn week_of_jan_12(layout: &MonthLayout) -> &WeekLayout {
        layout.week_of(make_date(1, 12)).unwrap()
    }

    #[test]
    fn test_greedy_rows() {
        let events = vec![
            spanning(1, (1, 13), (1, 15)),
            spanning(2, (1, 14), (1, 16)),
            spanning(3, (1, 17), (1, 17)).all_day(),
            spanning(4, (1, 15), (1, 18)),
        ];
        let layout = layout(&events, &[], 3);
        let week = week_of_jan_12(&layout);

        assert_eq!(week.bar_for(1).unwrap().row, 0);
        assert_eq!(week.bar_for(2).unwrap().row, 1);
        assert_eq!(week.bar_for(4).unwrap().row, 2);
        // Row 0 frees up after the first event ends
        assert_eq!(week.bar_for(3).unwrap().row, 0);

        let bar = week.bar_for(4).unwrap();
        assert_eq!(bar.start_column, 3);
        assert_eq!(bar.span, 4);
        assert!(!bar.continues_before);
        assert!(!bar.continues_after);
        assert_eq!(week.row_count(), 3);
        assert_eq!(week.hidden, [0; 7]);
    }

    #[test]
    fn test_overflow_counts_hidden_events() {
        let events = vec![
            spanning(1, (1, 13), (1, 15)),
            spanning(2, (1, 14), (1, 16)),
            spanning(4, (1, 15), (1, 18)),
        ];
        let layout = layout(&events, &[], 2);
        let week = week_of_jan_12(&layout);

        assert!(week.bar_for(4).is_none());
        assert_eq!(week.hidden, [0, 0, 0, 1, 1, 1, 1]);
        assert_eq!(layout.more_count(make_date(1, 15)), 1);
        assert_eq!(layout.more_count(make_date(1, 13)), 0);
    }

    #[test]
    fn test_event_split_across_weeks() {
        let events = vec![spanning(1, (1, 17), (1, 20))];
        let layout = layout(&events, &[], 3);

        let first = layout.week_of(make_date(1, 17)).unwrap().bar_for(1).unwrap();
        assert_eq!((first.start_column, first.span), (5, 2));
        assert!(!first.continues_before);
        assert!(first.continues_after);

        let second = layout.week_of(make_date(1, 19)).unwrap().bar_for(1).unwrap();
        assert_eq!((second.start_column, second.span), (0, 2));
        assert!(second.continues_before);
        assert!(!second.continues_after);
    }

    #[test]
    fn test_bars_clipped_to_month() {
        let events = vec![spanning(1, (12, 30), (1, 2))];
        let layout = layout(&events, &[], 3);

        let week = layout.week_of(make_date(12, 29)).unwrap();
        let bar = week.bar_for(1).unwrap();
        assert_eq!(bar.start_column, 3);
        assert_eq!(bar.span, 2);
        assert!(bar.continues_before);
        assert_eq!(layout.row_for(1, make_date(12, 31)), None);
        assert_eq!(layout.row_for(1, make_date(1, 2)), Some(0));
    }

    #[test]
    fn test_single_day_events_fill_free_rows() {
        let multi = vec![spanning(1, (1, 13), (1, 15))];
        let single = vec![
            Event::new(10, "Lunch", at(1, 13, 12), at(1, 13, 13), test_user()),
            Event::new(11, "Call", at(1, 16, 9), at(1, 16, 10), test_user()),
        ];
        let layout = layout(&multi, &single, 3);

        assert_eq!(layout.row_for(10, make_date(1, 13)), Some(1));
        assert_eq!(layout.row_for(11, make_date(1, 16)), Some(0));
    }

    #[test]
    fn test_rows_never_overlap() {
        // Deterministic pseudo-random spans across January
        let mut seed: u64 = 42;
        let mut next = |bound: u64| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) % bound
        };
        let events: Vec<Event> = (0..40)
            .map(|id| {
                let start = 1 + next(31) as u32;
                let end = (start + next(6) as u32).min(31);
                spanning(id, (1, start), (1, end))
            })
            .collect();

        let layout = layout(&events, &[], 3);

        for week in &layout.weeks {
            for (i, a) in week.bars.iter().enumerate() {
                assert!(a.row < 3);
                for b in &week.bars[i + 1..] {
                    if a.row == b.row {
                        assert!(
                            a.end_column() < b.start_column || b.end_column() < a.start_column,
                            "bars {a:?} and {b:?} share a row"
                        );
                    }
                }
            }
        }

        // Every event is either drawn or counted as hidden on each visible day
        for event in &events {
            for day in event.start_date().iter_days().take_while(|d| *d <= event.end_date()) {
                let shown = layout.row_for(event.id, day).is_some();
                let overflow = layout.more_count(day) > 0;
                assert!(shown || overflow);
            }
        }
    }

    #[test]
    fn test_month_cell_events_ordering() {
        let multi = vec![
            spanning(1, (1, 13), (1, 15)),
            spanning(2, (1, 14), (1, 16)),
        ];
        let single = vec![Event::new(10, "Lunch", at(1, 14, 12), at(1, 14, 13), test_user())];
        let layout = layout(&multi, &single, 2);

        let all: Vec<&Event> = single.iter().chain(multi.iter()).collect();
        let cell = month_cell_events(make_date(1, 14), &all, &layout);

        let order: Vec<(u64, Option<usize>)> = cell.iter().map(|c| (c.event.id, c.row)).collect();
        assert_eq!(order, vec![(1, Some(0)), (2, Some(1)), (10, None)]);
        assert!(cell[0].is_multi_day);
        assert!(!cell[2].is_multi_day);
        assert_eq!(layout.more_count(make_date(1, 14)), 1);
    }
}
