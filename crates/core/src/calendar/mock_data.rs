//! Mock data generation for demos and tests.
//!
//! This module contains pure functions for generating mock users and events.
//! Output is deterministic for a given center date and count.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use super::types::{Event, EventColor, User};
use super::window::{end_of_day, start_of_day};

const MOCK_USER_IDS: [u128; 4] = [
    0xdd50_3cf9_b7a4_4c1e_a6e7_4d1c_7c2e_0001,
    0xdd50_3cf9_b7a4_4c1e_a6e7_4d1c_7c2e_0002,
    0xdd50_3cf9_b7a4_4c1e_a6e7_4d1c_7c2e_0003,
    0xdd50_3cf9_b7a4_4c1e_a6e7_4d1c_7c2e_0004,
];

const MOCK_USER_NAMES: [&str; 4] = [
    "Leonardo Ramos",
    "Michael Doe",
    "Alice Johnson",
    "Robert Smith",
];

/// The four demo users, with stable IDs.
pub fn mock_users() -> Vec<User> {
    MOCK_USER_IDS
        .iter()
        .zip(MOCK_USER_NAMES)
        .map(|(id, name)| User::new(name).with_id(Uuid::from_u128(*id)))
        .collect()
}

/// `percent` of `count`, rounded up and capped at `count`.
fn share(count: u32, percent: u32) -> u32 {
    let part = (u64::from(count) * u64::from(percent)).div_ceil(100);
    u32::try_from(part).map_or(count, |part| part.min(count))
}

/// Generate mock events spread around a center date.
///
/// Creates a distribution resembling a busy team calendar:
/// - ~20% multi-day events (conferences, trips)
/// - ~15% all-day events (holidays, deadlines)
/// - ~65% timed events (meetings, appointments)
///
/// Owners rotate through `users`; no events are generated without users.
///
/// # Example
///
/// ```
/// use bigcal_core::calendar::{generate_mock_events, mock_users};
/// use chrono::NaiveDate;
///
/// let center = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let events = generate_mock_events(&mock_users(), center, 20);
///
/// assert_eq!(events.len(), 20);
/// ```
pub fn generate_mock_events(users: &[User], center_date: NaiveDate, count: u32) -> Vec<Event> {
    if users.is_empty() {
        return Vec::new();
    }

    let multi_day_count = share(count, 20);
    let all_day_count = share(count, 15).min(count - multi_day_count);
    let timed_count = count - multi_day_count - all_day_count;

    let owner = |i: u32| users[i as usize % users.len()].clone();
    let day = |offset: i64| shift(center_date, offset);
    let mut next_id = 1..;
    let mut events = Vec::with_capacity(count as usize);

    let multi_day_titles = [
        "Design Conference",
        "Team Offsite",
        "Client Visit",
        "Product Launch Week",
        "Training Workshop",
    ];
    for i in 0..multi_day_count {
        let start = day(i64::from(i) * 3 - 7);
        let length = u64::from(1 + i % 4);
        let end = start.checked_add_days(Days::new(length)).unwrap_or(start);
        events.push(
            Event::new(
                next_id.next().unwrap_or_default(),
                multi_day_titles[i as usize % multi_day_titles.len()],
                at(start, 9, 0),
                at(end, 17, 0),
                owner(i),
            )
            .with_description("Spans several days")
            .with_color(EventColor::ALL[i as usize % EventColor::ALL.len()]),
        );
    }

    let all_day_titles = ["Public Holiday", "Release Day", "Company Anniversary", "Deadline"];
    for i in 0..all_day_count {
        let date = day(i64::from(i) * 5 - 4);
        events.push(
            Event::new(
                next_id.next().unwrap_or_default(),
                all_day_titles[i as usize % all_day_titles.len()],
                start_of_day(date),
                end_of_day(date),
                owner(i + 1),
            )
            .with_description("All day")
            .with_color(EventColor::ALL[(i as usize + 3) % EventColor::ALL.len()])
            .all_day(),
        );
    }

    let timed_titles = [
        "Standup Meeting",
        "Lunch with Team",
        "Product Review",
        "Doctor Appointment",
        "Sprint Planning",
        "1:1 Meeting",
        "Code Review",
        "Coffee with Mentor",
    ];
    for i in 0..timed_count {
        let date = day(i64::from(i % 21) - 10);
        let start_hour = 8 + (i * 3) % 10;
        let start_minute = if i % 2 == 0 { 0 } else { 30 };
        let minutes = 30 + i64::from(i % 4) * 30;
        let start = at(date, start_hour, start_minute);
        let end = start + chrono::TimeDelta::minutes(minutes);
        events.push(
            Event::new(
                next_id.next().unwrap_or_default(),
                timed_titles[i as usize % timed_titles.len()],
                start,
                end,
                owner(i + 2),
            )
            .with_description("Scheduled meeting")
            .with_color(EventColor::ALL[i as usize % EventColor::ALL.len()]),
        );
    }

    events
}

fn shift(date: NaiveDate, offset: i64) -> NaiveDate {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.unwrap_or(date)
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn center() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_share_rounds_up_without_overflow() {
        assert_eq!(share(40, 20), 8);
        assert_eq!(share(3, 15), 1);
        assert_eq!(share(0, 20), 0);
        assert_eq!(share(u32::MAX, 20), 858_993_459);
        assert_eq!(share(u32::MAX, 15), 644_245_095);
    }

    #[test]
    fn test_mock_users_stable() {
        let users = mock_users();
        assert_eq!(users.len(), 4);
        assert_eq!(users, mock_users());
        assert_eq!(users[0].name, "Leonardo Ramos");
    }

    #[test]
    fn test_generate_mock_events_count() {
        let users = mock_users();
        assert_eq!(generate_mock_events(&users, center(), 20).len(), 20);
        assert_eq!(generate_mock_events(&users, center(), 100).len(), 100);
        assert_eq!(generate_mock_events(&users, center(), 1).len(), 1);
        assert!(generate_mock_events(&users, center(), 0).is_empty());
        assert!(generate_mock_events(&[], center(), 10).is_empty());
    }

    #[test]
    fn test_generate_mock_events_distribution() {
        let events = generate_mock_events(&mock_users(), center(), 100);

        let all_day = events.iter().filter(|e| e.is_all_day).count();
        let multi_day = events
            .iter()
            .filter(|e| !e.is_all_day && e.is_multi_day())
            .count();
        let timed = events.iter().filter(|e| e.is_single_day()).count();

        assert_eq!(multi_day, 20);
        assert_eq!(all_day, 15);
        assert_eq!(timed, 65);
    }

    #[test]
    fn test_generate_mock_events_valid() {
        let events = generate_mock_events(&mock_users(), center(), 50);

        let ids: HashSet<u64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), events.len());
        assert!(events.iter().all(|e| e.start <= e.end));
        assert!(events.iter().all(|e| !e.description.is_empty()));
    }

    #[test]
    fn test_generate_mock_events_deterministic() {
        let users = mock_users();
        assert_eq!(
            generate_mock_events(&users, center(), 30),
            generate_mock_events(&users, center(), 30)
        );
    }
}
