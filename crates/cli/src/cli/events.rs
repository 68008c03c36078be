//! Event CLI commands.

use bigcal_core::serde::parse_local_datetime;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use super::ViewKind;

/// Event query commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List events visible in a view around the selected date.
    List {
        /// View whose window is listed.
        #[arg(long, default_value = "month")]
        view: ViewKind,
    },
    /// Show events happening at a given moment.
    Current {
        /// Moment to check (YYYY-MM-DDTHH:MM, default: now).
        #[arg(long, value_parser = parse_moment)]
        at: Option<NaiveDateTime>,
    },
    /// Show a single event.
    Get {
        /// Event ID.
        id: u64,
    },
}

fn parse_moment(s: &str) -> Result<NaiveDateTime, String> {
    parse_local_datetime(s).ok_or_else(|| format!("invalid date-time: {s}"))
}
