//! Pretty output formatting.

use bigcal_core::calendar::{
    is_working_hour, range_text, CalendarSettings, CalendarView, Event, MonthLayout, User,
    ViewSnapshot, WeekLayout,
};
use chrono::{Datelike, NaiveDate, Timelike};

use crate::report::{MonthSummary, Timeline, TimelineBlock, TimelineDay, ViewReport};

const CELL_WIDTH: usize = 14;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    let mut output = format!("{}\n  ID: {}", user.name, user.id);
    if let Some(picture) = &user.picture_path {
        output.push_str(&format!("\n  Picture: {}", picture));
    }
    output
}

/// Format users for display.
pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        output.push_str(&format!("\n{}", format_user(user)));
        output.push('\n');
    }
    output
}

/// Time span of an event, as short as the event allows.
pub fn format_span(event: &Event) -> String {
    if event.is_all_day {
        if event.start_date() == event.end_date() {
            return "all day".to_string();
        }
        return format!(
            "{} - {}",
            event.start.format("%b %-d"),
            event.end.format("%b %-d")
        );
    }
    if event.is_single_day() {
        return format!("{}-{}", event.start.format("%H:%M"), event.end.format("%H:%M"));
    }
    format!(
        "{} - {}",
        event.start.format("%b %-d %H:%M"),
        event.end.format("%b %-d %H:%M")
    )
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  When: {} ({})\n  Responsible: {}",
        event.title,
        event.color,
        event.id,
        format_span(event),
        event.start.format("%Y-%m-%d"),
        event.user.name
    );
    if !event.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", event.description));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[&Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format the result of stepping to a new period.
pub fn format_navigation(view: CalendarView, date: NaiveDate) -> String {
    format!(
        "{}: {}\n  Date: {}",
        view.as_str().to_uppercase(),
        range_text(view, date),
        date
    )
}

/// Format a view report for display.
pub fn format_view(report: &ViewReport<'_>, settings: &CalendarSettings) -> String {
    let snapshot = report.snapshot;
    let body = match snapshot.view {
        CalendarView::Month => match &snapshot.month_layout {
            Some(layout) => format_month(snapshot, layout),
            None => String::new(),
        },
        CalendarView::Day | CalendarView::Week => match &report.timeline {
            Some(timeline) => format_timeline(snapshot, timeline, settings),
            None => String::new(),
        },
        CalendarView::Year => match &report.year {
            Some(months) => format_year(months),
            None => String::new(),
        },
        CalendarView::Agenda => format_agenda(snapshot),
    };

    let mut output = format!("{} ({})\n", report.range, snapshot.user);
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&body);
    output
}

fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Month grid: day numbers, bar rows, then `+N more` per crowded cell.
fn format_month(snapshot: &ViewSnapshot, layout: &MonthLayout) -> String {
    let mut lines = vec![
        snapshot.date.format("%B %Y").to_string(),
        WEEKDAYS
            .iter()
            .map(|day| fit(day, CELL_WIDTH))
            .collect::<String>(),
    ];

    for week in &layout.weeks {
        lines.push(format_week_dates(week, snapshot.date, layout.month_start));
        for row in 0..week.row_count() {
            lines.push(format_bar_row(week, row, snapshot));
        }
        if week.hidden.iter().any(|count| *count > 0) {
            let more: String = week
                .hidden
                .iter()
                .map(|count| match count {
                    0 => fit("", CELL_WIDTH),
                    n => fit(&format!("+{} more", n), CELL_WIDTH),
                })
                .collect();
            lines.push(more);
        }
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_week_dates(week: &WeekLayout, selected: NaiveDate, month_start: NaiveDate) -> String {
    week.week_start
        .iter_days()
        .take(WEEKDAYS.len())
        .map(|date| {
            let label = if date == selected {
                format!("[{}]", date.day())
            } else if date.month() != month_start.month() {
                format!("({})", date.day())
            } else {
                format!(" {}", date.day())
            };
            fit(&label, CELL_WIDTH)
        })
        .collect()
}

fn format_bar_row(week: &WeekLayout, row: usize, snapshot: &ViewSnapshot) -> String {
    let mut line = String::new();
    let mut column = 0;
    while column < WEEKDAYS.len() {
        let bar = week
            .bars
            .iter()
            .find(|bar| bar.row == row && bar.start_column == column);
        match bar {
            Some(bar) => {
                let title = snapshot
                    .event(bar.event_id)
                    .map(|event| event.title.as_str())
                    .unwrap_or("?");
                let inner = (CELL_WIDTH * bar.span).saturating_sub(3);
                let fill: String = title
                    .chars()
                    .chain(std::iter::repeat('='))
                    .take(inner)
                    .collect();
                let open = if bar.continues_before { '<' } else { '[' };
                let close = if bar.continues_after { '>' } else { ']' };
                line.push_str(&format!("{open}{fill}{close} "));
                column += bar.span.max(1);
            }
            None => {
                line.push_str(&fit("", CELL_WIDTH));
                column += 1;
            }
        }
    }
    line
}

/// Day and week timelines. The day view prints every axis hour.
fn format_timeline(
    snapshot: &ViewSnapshot,
    timeline: &Timeline,
    settings: &CalendarSettings,
) -> String {
    let mut output = format!(
        "Hours {:02}:00-{:02}:00\n",
        timeline.axis.earliest_event_hour, timeline.axis.latest_event_hour
    );
    for day in &timeline.days {
        output.push_str(&format!("\n{}\n", day.date.format("%a %b %-d")));
        for id in &day.all_day {
            if let Some(event) = snapshot.event(*id) {
                output.push_str(&format!(
                    "  {:<13} {} ({})\n",
                    "all day",
                    event.title,
                    event.user.name
                ));
            }
        }
        if snapshot.view == CalendarView::Day {
            output.push_str(&format_hour_axis(snapshot, timeline, day, settings));
        } else if day.blocks.is_empty() && day.all_day.is_empty() {
            output.push_str("  (no events)\n");
        } else {
            for block in &day.blocks {
                if let Some(event) = snapshot.event(block.event_id) {
                    output.push_str(&format!("  {}\n", format_block_line(event, block)));
                }
            }
        }
    }
    output
}

fn format_block_line(event: &Event, block: &TimelineBlock) -> String {
    let mut line = format!("{:<13} {} ({})", format_span(event), event.title, event.user.name);
    if block.columns > 1 {
        line.push_str(&format!(" [col {}/{}]", block.column + 1, block.columns));
    }
    line
}

fn format_hour_axis(
    snapshot: &ViewSnapshot,
    timeline: &Timeline,
    day: &TimelineDay,
    settings: &CalendarSettings,
) -> String {
    let mut output = String::new();
    for hour in &timeline.axis.hours {
        let marker = if is_working_hour(day.date, *hour, &settings.working_hours) {
            '|'
        } else {
            '.'
        };
        output.push_str(&format!("  {:02}:00 {}", hour, marker));
        let starting: Vec<String> = day
            .blocks
            .iter()
            .filter_map(|block| snapshot.event(block.event_id).map(|event| (block, event)))
            .filter(|(_, event)| event.start.hour() == *hour)
            .map(|(block, event)| format_block_line(event, block))
            .collect();
        if !starting.is_empty() {
            output.push(' ');
            output.push_str(&starting.join("; "));
        }
        output.push('\n');
    }
    output
}

/// Agenda: every day of the window that has events, in order.
fn format_agenda(snapshot: &ViewSnapshot) -> String {
    let mut output = String::new();
    for date in snapshot.window.days() {
        let mut events: Vec<&Event> = snapshot
            .events
            .iter()
            .filter(|event| event.covers_date(date))
            .collect();
        if events.is_empty() {
            continue;
        }
        events.sort_by(|a, b| {
            b.is_multi_day()
                .cmp(&a.is_multi_day())
                .then_with(|| a.start.cmp(&b.start))
                .then_with(|| a.id.cmp(&b.id))
        });

        output.push_str(&format!("{}\n", date.format("%a, %b %-d")));
        for event in events {
            output.push_str(&format!(
                "  {:<27} {} ({}, {})\n",
                format_span(event),
                event.title,
                event.user.name,
                event.color
            ));
        }
    }
    if output.is_empty() {
        output.push_str("No events found.\n");
    }
    output
}

fn format_year(months: &[MonthSummary]) -> String {
    months
        .iter()
        .map(|summary| {
            let days = summary
                .start_days
                .iter()
                .map(|day| day.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "{:<10} {:>3} events  {}",
                summary.month.format("%B"),
                summary.events,
                days
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
