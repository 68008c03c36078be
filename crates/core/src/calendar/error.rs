use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when mutating the event store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Event {id} ends before it starts")]
    InvalidDateRange { id: u64 },
    #[error("No event IDs left after {last}")]
    IdsExhausted { last: u64 },
}

impl StoreError {
    pub(crate) fn event_not_found(id: u64) -> Self {
        StoreError::NotFound {
            entity_type: "Event",
            id: id.to_string(),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// The event form fields that can carry validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    User,
    Title,
    Description,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
    Color,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::User => "user",
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::StartDate => "startDate",
            FormField::StartTime => "startTime",
            FormField::EndDate => "endDate",
            FormField::EndTime => "endTime",
            FormField::Color => "color",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation message attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field-level errors reported for one form submission.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("Invalid event form: {}", format_field_errors(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: FormField, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns the first message reported for the given field.
    pub fn message_for(&self, field: FormField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::event_not_found(42).to_string(), "Event not found: 42");
        assert_eq!(
            StoreError::AlreadyExists {
                entity_type: "Event",
                id: "7".to_string()
            }
            .to_string(),
            "Event already exists: 7"
        );
        assert_eq!(
            StoreError::InvalidDateRange { id: 3 }.to_string(),
            "Event 3 ends before it starts"
        );
        assert_eq!(
            StoreError::IdsExhausted { last: u64::MAX }.to_string(),
            "No event IDs left after 18446744073709551615"
        );
    }

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors(vec![
            FieldError::new(FormField::Title, "Title is required"),
            FieldError::new(FormField::Color, "Color is required"),
        ]);
        assert_eq!(
            errors.to_string(),
            "Invalid event form: title: Title is required; color: Color is required"
        );
        assert_eq!(errors.message_for(FormField::Color), Some("Color is required"));
        assert_eq!(errors.message_for(FormField::User), None);
    }
}
