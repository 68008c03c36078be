use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::window::{end_of_month, end_of_week, start_of_month, start_of_week};

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    /// Day of the month shown in the cell.
    pub day: u32,
    /// False for the leading and trailing days borrowed from adjacent months.
    pub current_month: bool,
    pub date: NaiveDate,
}

/// The first and last date of the month grid containing `date`.
///
/// The grid starts on the Sunday on or before the first of the month and ends
/// on the Saturday on or after its last day.
pub fn grid_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        start_of_week(start_of_month(date)),
        end_of_week(end_of_month(date)),
    )
}

/// Builds the cells of the month grid containing `date`, row by row.
/// The result always holds a whole number of weeks.
pub fn calendar_cells(date: NaiveDate) -> Vec<CalendarCell> {
    let (first, last) = grid_range(date);
    let month = date.month();

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| CalendarCell {
            day: day.day(),
            current_month: day.month() == month,
            date: day,
        })
        .collect()
}

/// The Sunday of every week row in the month grid containing `date`.
pub fn grid_week_starts(date: NaiveDate) -> Vec<NaiveDate> {
    let (first, last) = grid_range(date);
    first
        .iter_weeks()
        .take_while(|week| *week <= last)
        .collect()
}
