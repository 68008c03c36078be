use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_local_datetime;

/// A person who can own calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Path or URL of the user's avatar.
    #[serde(default)]
    pub picture_path: Option<String>,
}

impl User {
    /// Creates a new user with a generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            picture_path: None,
        }
    }

    /// Sets the avatar path for this user.
    pub fn with_picture(mut self, path: impl Into<String>) -> Self {
        self.picture_path = Some(path.into());
        self
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// The accent color of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Orange,
    Gray,
}

impl EventColor {
    pub const ALL: [EventColor; 7] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Red,
        EventColor::Yellow,
        EventColor::Purple,
        EventColor::Orange,
        EventColor::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Green => "green",
            EventColor::Red => "red",
            EventColor::Yellow => "yellow",
            EventColor::Purple => "purple",
            EventColor::Orange => "orange",
            EventColor::Gray => "gray",
        }
    }

    /// Returns the CSS hex value used to paint badges of this color.
    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Blue => "#3B82F6",
            EventColor::Green => "#10B981",
            EventColor::Red => "#EF4444",
            EventColor::Yellow => "#F59E0B",
            EventColor::Purple => "#8B5CF6",
            EventColor::Orange => "#F97316",
            EventColor::Gray => "#6B7280",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar event owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    #[serde(rename = "startDate", deserialize_with = "deserialize_local_datetime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDate", deserialize_with = "deserialize_local_datetime")]
    pub end: NaiveDateTime,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: EventColor,
    pub user: User,
    /// All-day events span whole days regardless of their time of day.
    #[serde(default)]
    pub is_all_day: bool,
}

impl Event {
    /// Creates a new timed event with an empty description.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        user: User,
    ) -> Self {
        Self {
            id,
            start,
            end,
            title: title.into(),
            description: String::new(),
            color: EventColor::default(),
            user,
            is_all_day: false,
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the color for this event.
    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    /// Flags this event as all-day.
    pub fn all_day(mut self) -> Self {
        self.is_all_day = true;
        self
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Returns true if start and end fall on the same calendar day and the
    /// event is not flagged all-day.
    pub fn is_single_day(&self) -> bool {
        self.start_date() == self.end_date() && !self.is_all_day
    }

    /// Returns true if the event spans days or is flagged all-day.
    pub fn is_multi_day(&self) -> bool {
        !self.is_single_day()
    }

    /// Number of calendar days between start and end (0 for same-day events).
    pub fn duration_days(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days()
    }

    /// Returns true if the event touches the given calendar day.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }
}

/// Which users' events are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserFilter {
    #[default]
    All,
    User(Uuid),
}

impl UserFilter {
    /// Returns true if the event's owner passes this filter.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::User(id) => event.user.id == *id,
        }
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::All => f.write_str("all"),
            UserFilter::User(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for UserFilter {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(UserFilter::All);
        }
        Uuid::parse_str(s).map(UserFilter::User)
    }
}

impl TryFrom<String> for UserFilter {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserFilter> for String {
    fn from(filter: UserFilter) -> Self {
        filter.to_string()
    }
}

/// The granularity of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    Month,
    Year,
    Agenda,
}

impl CalendarView {
    pub const ALL: [CalendarView; 5] = [
        CalendarView::Day,
        CalendarView::Week,
        CalendarView::Month,
        CalendarView::Year,
        CalendarView::Agenda,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Day => "day",
            CalendarView::Week => "week",
            CalendarView::Month => "month",
            CalendarView::Year => "year",
            CalendarView::Agenda => "agenda",
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How event badges are drawn in month and agenda cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Dot,
    #[default]
    Colored,
    Mixed,
}

/// A half-open range of hours of the day: `from <= hour < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub from: u32,
    pub to: u32,
}

impl HourRange {
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.from && hour < self.to
    }
}

/// The range of hours the day and week timelines show by default.
pub type VisibleHours = HourRange;

/// Working hours for each weekday, indexed from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours(pub [HourRange; 7]);

impl WorkingHours {
    pub fn for_weekday(&self, weekday: Weekday) -> HourRange {
        self.0[weekday.num_days_from_sunday() as usize]
    }

    pub fn for_date(&self, date: NaiveDate) -> HourRange {
        self.for_weekday(date.weekday())
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self([
            HourRange::new(0, 0),
            HourRange::new(8, 17),
            HourRange::new(8, 17),
            HourRange::new(8, 17),
            HourRange::new(8, 17),
            HourRange::new(8, 17),
            HourRange::new(8, 12),
        ])
    }
}

/// Display configuration held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarSettings {
    pub badge_variant: BadgeVariant,
    pub working_hours: WorkingHours,
    pub visible_hours: VisibleHours,
    pub available_views: Vec<CalendarView>,
    pub show_user_select: bool,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            badge_variant: BadgeVariant::default(),
            working_hours: WorkingHours::default(),
            visible_hours: HourRange::new(7, 18),
            available_views: CalendarView::ALL.to_vec(),
            show_user_select: true,
            can_add: true,
            can_edit: true,
            can_delete: true,
        }
    }
}
