//! Add/edit event form data and its validation.
//!
//! These are pure data types with no I/O. A form is validated into a
//! [`ValidEventForm`], which can then be turned into an [`Event`] once the
//! responsible user is resolved.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{FieldError, FormField, ValidationErrors};
use super::types::{Event, EventColor, User};
use super::window::{end_of_day, start_of_day};
use crate::serde::{deserialize_optional_date, deserialize_optional_string, deserialize_optional_time};

/// Raw form input as submitted by the add/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFormData {
    /// ID of the responsible user.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub color: Option<EventColor>,
}

impl EventFormData {
    /// Prefills the form from an existing event, as the edit dialog does.
    pub fn from_event(event: &Event) -> Self {
        Self {
            user: Some(event.user.id.to_string()),
            title: Some(event.title.clone()),
            description: Some(event.description.clone()).filter(|d| !d.is_empty()),
            is_all_day: event.is_all_day,
            start_date: Some(event.start.date()),
            start_time: Some(event.start.time()),
            end_date: Some(event.end.date()),
            end_time: Some(event.end.time()),
            color: Some(event.color),
        }
    }

    /// Validates every field, collecting all messages.
    ///
    /// The start/end ordering check only runs once every required field is
    /// present, and reports on `startDate`.
    pub fn validate(&self) -> Result<ValidEventForm, ValidationErrors> {
        let mut errors = Vec::new();

        let user = match self.user.as_deref().map(Uuid::parse_str) {
            None => {
                errors.push(FieldError::new(FormField::User, "Responsible is required"));
                None
            }
            Some(Err(_)) => {
                errors.push(FieldError::new(FormField::User, "Responsible must be a valid user"));
                None
            }
            Some(Ok(id)) => Some(id),
        };
        let title = required(&self.title, FormField::Title, "Title is required", &mut errors);
        let description = required(
            &self.description,
            FormField::Description,
            "Description is required",
            &mut errors,
        );
        let start_date = required(
            &self.start_date,
            FormField::StartDate,
            "Start date is required",
            &mut errors,
        );
        let end_date = required(
            &self.end_date,
            FormField::EndDate,
            "End date is required",
            &mut errors,
        );
        let color = required(&self.color, FormField::Color, "Color is required", &mut errors);

        let (Some(user), Some(title), Some(description), Some(start_date), Some(end_date), Some(color)) =
            (user, title, description, start_date, end_date, color)
        else {
            return Err(ValidationErrors(errors));
        };

        let range = if self.is_all_day {
            (start_date <= end_date).then(|| (start_of_day(start_date), end_of_day(end_date)))
        } else {
            match (self.start_time, self.end_time) {
                (Some(start_time), Some(end_time)) => {
                    let start = start_date.and_time(start_time);
                    let end = end_date.and_time(end_time);
                    (start < end).then_some((start, end))
                }
                _ => None,
            }
        };

        let Some((start, end)) = range else {
            return Err(ValidationErrors::single(
                FormField::StartDate,
                "Start date cannot be after end date",
            ));
        };

        Ok(ValidEventForm {
            user,
            title,
            description,
            is_all_day: self.is_all_day,
            start,
            end,
            color,
        })
    }
}

fn required<T: Clone>(
    value: &Option<T>,
    field: FormField,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::new(field, message));
    }
    value.clone()
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEventForm {
    pub user: Uuid,
    pub title: String,
    pub description: String,
    pub is_all_day: bool,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
}

impl ValidEventForm {
    /// Builds the event, resolving the responsible user among `users`.
    pub fn into_event(self, id: u64, users: &[User]) -> Result<Event, ValidationErrors> {
        let user = users
            .iter()
            .find(|u| u.id == self.user)
            .cloned()
            .ok_or_else(|| ValidationErrors::single(FormField::User, "Responsible not found"))?;

        let mut event = Event::new(id, self.title, self.start, self.end, user)
            .with_description(self.description)
            .with_color(self.color);
        event.is_all_day = self.is_all_day;
        Ok(event)
    }
}
