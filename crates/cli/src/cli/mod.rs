//! CLI command definitions.

pub mod events;
pub mod view;

use std::path::PathBuf;

use bigcal_core::calendar::{Direction, UserFilter};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

pub use view::ViewKind;

/// Terminal calendar over a JSON dataset.
#[derive(Debug, Parser)]
#[command(name = "bigcal")]
#[command(about = "Browse calendar events from the terminal", long_about = None)]
pub struct Cli {
    /// JSON dataset with `users` and `events` (default: generated mock data).
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Bar rows per week in the month view.
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Selected date (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Show only events owned by this user ID, or `all`.
    #[arg(long, default_value = "all")]
    pub user: UserFilter,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Navigation step for the `navigate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Step {
    #[value(alias = "prev")]
    Previous,
    Next,
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Previous => Direction::Previous,
            Step::Next => Direction::Next,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a calendar view around the selected date.
    View(view::ViewCommand),
    /// Event queries.
    Events(events::EventsCommand),
    /// List known users.
    Users,
    /// Move the selected date one period and print the new range.
    Navigate {
        /// View whose period is stepped.
        view: ViewKind,
        /// Direction to move.
        step: Step,
    },
    /// Validate an event form submission (JSON file).
    Validate {
        /// Path to the form JSON.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "bigcal",
            "--format",
            "json",
            "--date",
            "2025-01-15",
            "--max-rows",
            "2",
            "users",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(cli.max_rows, Some(2));
        assert_eq!(cli.user, UserFilter::All);
        assert!(matches!(cli.command, Commands::Users));
    }

    #[test]
    fn test_parse_user_filter() {
        let cli = Cli::try_parse_from([
            "bigcal",
            "--user",
            "00000000-0000-0000-0000-000000000001",
            "users",
        ])
        .unwrap();
        assert!(matches!(cli.user, UserFilter::User(_)));

        let result = Cli::try_parse_from(["bigcal", "--user", "nobody", "users"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_navigate() {
        let cli = Cli::try_parse_from(["bigcal", "navigate", "week", "prev"]).unwrap();
        match cli.command {
            Commands::Navigate { view, step } => {
                assert_eq!(view, ViewKind::Week);
                assert_eq!(Direction::from(step), Direction::Previous);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
