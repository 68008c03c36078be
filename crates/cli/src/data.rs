//! Dataset loading.

use std::fs;
use std::path::Path;

use bigcal_core::calendar::{generate_mock_events, mock_users, Event, EventStore, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Users and events as stored in a dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Dataset {
    /// Reads a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|source| CliError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            users = dataset.users.len(),
            events = dataset.events.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Demo users with `count` events around `center`.
    pub fn mock(center: NaiveDate, count: u32) -> Self {
        let users = mock_users();
        let events = generate_mock_events(&users, center, count);
        tracing::info!(events = events.len(), %center, "Generated mock dataset");
        Self { users, events }
    }

    /// Builds a store focused on `date`.
    ///
    /// A dataset with duplicate IDs or inverted ranges is rejected. Event
    /// owners missing from `users` are registered.
    pub fn into_store(self, date: NaiveDate) -> Result<EventStore> {
        let Dataset { mut users, events } = self;
        for event in &events {
            if !users.iter().any(|u| u.id == event.user.id) {
                users.push(event.user.clone());
            }
        }

        let mut store = EventStore::new(date);
        store
            .initialize(users, events)
            .map_err(CliError::Dataset)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigcal_core::calendar::StoreError;
    use std::path::PathBuf;

    fn make_date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    const DATASET: &str = r#"{
        "users": [
            {"id": "00000000-0000-0000-0000-000000000001", "name": "Alice", "picturePath": null}
        ],
        "events": [
            {
                "id": 1,
                "startDate": "2025-01-15T09:00:00",
                "endDate": "2025-01-15T10:00:00",
                "title": "Standup",
                "description": "Daily",
                "color": "blue",
                "user": {"id": "00000000-0000-0000-0000-000000000001", "name": "Alice"}
            },
            {
                "id": 2,
                "startDate": "2025-01-14T08:00:00.000Z",
                "endDate": "2025-01-16T18:00:00.000Z",
                "title": "Offsite",
                "description": "Planning",
                "color": "green",
                "user": {"id": "00000000-0000-0000-0000-000000000002", "name": "Bob"}
            }
        ]
    }"#;

    #[test]
    fn test_into_store_registers_owners() {
        let dataset: Dataset = serde_json::from_str(DATASET).unwrap();
        let store = dataset.into_store(make_date(15)).unwrap();

        assert_eq!(store.events().len(), 2);
        assert_eq!(store.users().len(), 2);
        assert_eq!(store.users()[1].name, "Bob");
        assert_eq!(store.selected_date(), make_date(15));
    }

    #[test]
    fn test_into_store_rejects_duplicates() {
        let mut dataset: Dataset = serde_json::from_str(DATASET).unwrap();
        let duplicate = dataset.events[0].clone();
        dataset.events.push(duplicate);

        let result = dataset.into_store(make_date(15));
        assert!(matches!(
            result,
            Err(CliError::Dataset(StoreError::AlreadyExists { .. }))
        ));
    }

    #[test]
    fn test_into_store_rejects_inverted_range() {
        let mut dataset: Dataset = serde_json::from_str(DATASET).unwrap();
        dataset.events[0].end = dataset.events[0].start - chrono::TimeDelta::hours(1);

        let result = dataset.into_store(make_date(15));
        assert!(matches!(
            result,
            Err(CliError::Dataset(StoreError::InvalidDateRange { id: 1 }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dataset::load(&PathBuf::from("/definitely/not/here.json"));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }

    #[test]
    fn test_mock_dataset() {
        let dataset = Dataset::mock(make_date(15), 12);
        assert_eq!(dataset.users.len(), 4);
        assert_eq!(dataset.events.len(), 12);
        assert!(dataset.into_store(make_date(15)).is_ok());
    }
}
