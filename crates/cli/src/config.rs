use std::env;
use std::path::PathBuf;

use bigcal_core::calendar::{LayoutConfig, DEFAULT_CACHE_ENTRIES, DEFAULT_MAX_ROWS_PER_WEEK};

const DEFAULT_MOCK_EVENTS: u32 = 40;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dataset file; mock data is generated when unset.
    pub data_path: Option<PathBuf>,
    /// Bar rows per week in the month view (default: 3)
    pub max_rows_per_week: usize,
    /// Snapshot cache capacity (default: 16)
    pub cache_entries: usize,
    /// Number of mock events to generate (default: 40)
    pub mock_events: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BIGCAL_DATA` - Path to a JSON dataset (default: mock data)
    /// - `BIGCAL_MAX_ROWS` - Bar rows per week in the month view (default: 3)
    /// - `BIGCAL_CACHE_ENTRIES` - Snapshot cache capacity (default: 16)
    /// - `BIGCAL_MOCK_EVENTS` - Mock events to generate (default: 40)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_path: lookup("BIGCAL_DATA")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            max_rows_per_week: lookup("BIGCAL_MAX_ROWS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ROWS_PER_WEEK),
            cache_entries: lookup("BIGCAL_CACHE_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_ENTRIES),
            mock_events: lookup("BIGCAL_MOCK_EVENTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MOCK_EVENTS),
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, max_rows: Option<usize>) -> Self {
        if let Some(path) = data_path {
            self.data_path = Some(path);
        }
        if let Some(rows) = max_rows {
            self.max_rows_per_week = rows;
        }
        self
    }

    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            max_rows_per_week: self.max_rows_per_week,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.data_path, None);
        assert_eq!(config.max_rows_per_week, 3);
        assert_eq!(config.cache_entries, 16);
        assert_eq!(config.mock_events, 40);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("BIGCAL_DATA", "events.json"),
            ("BIGCAL_MAX_ROWS", "5"),
            ("BIGCAL_CACHE_ENTRIES", "not-a-number"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_path, Some(PathBuf::from("events.json")));
        assert_eq!(config.max_rows_per_week, 5);
        assert_eq!(config.cache_entries, 16);
        assert_eq!(config.layout().max_rows_per_week, 5);
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("a.json")), Some(2));
        assert_eq!(config.data_path, Some(PathBuf::from("a.json")));
        assert_eq!(config.max_rows_per_week, 2);

        let config = Config::default().with_overrides(None, None);
        assert_eq!(config, Config::default());
    }
}
