//! Command execution.

use bigcal_core::calendar::{
    current_events, navigate_date, CalendarView, EventFormData, EventStore, SnapshotCache,
};
use chrono::{Local, NaiveDate};

use crate::cli::events::EventsAction;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::data::Dataset;
use crate::error::{CliError, Result};
use crate::output::{pretty, render};
use crate::report::ViewReport;

/// Loads the dataset and selection described by `cli` and `config`.
pub fn load_store(cli: &Cli, config: &Config) -> Result<EventStore> {
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let dataset = match &config.data_path {
        Some(path) => Dataset::load(path)?,
        None => Dataset::mock(date, config.mock_events),
    };
    let mut store = dataset.into_store(date)?;
    store.set_selected_user(cli.user);
    Ok(store)
}

/// Runs one command and returns the text to print.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let mut store = load_store(cli, config)?;
    let mut cache = SnapshotCache::new(config.cache_entries, config.layout());

    let format = cli.format;
    let output = match &cli.command {
        Commands::View(command) => {
            let snapshot = cache.get(&store, command.kind.into());
            let report = ViewReport::build(&snapshot, store.settings());
            render(&report, format, |report| {
                pretty::format_view(report, store.settings())
            })
        }
        Commands::Events(events_cmd) => match &events_cmd.action {
            EventsAction::List { view } => {
                let snapshot = cache.get(&store, (*view).into());
                render(&snapshot.events, format, |events| {
                    pretty::format_events(&events.iter().collect::<Vec<_>>())
                })
            }
            EventsAction::Current { at } => {
                let now = at.unwrap_or_else(|| Local::now().naive_local());
                let visible: Vec<_> = store
                    .events()
                    .iter()
                    .filter(|event| store.selected_user().matches(event))
                    .collect();
                let current = current_events(&visible, now);
                render(&current, format, |current| pretty::format_events(current))
            }
            EventsAction::Get { id } => {
                let event = store.event(*id).ok_or_else(|| CliError::NotFound {
                    resource: format!("event {}", id),
                })?;
                render(event, format, pretty::format_event)
            }
        },
        Commands::Users => render(store.users(), format, pretty::format_users),
        Commands::Navigate { view, step } => {
            let view = CalendarView::from(*view);
            let date = navigate_date(store.selected_date(), view, (*step).into());
            store.set_selected_date(Some(date));
            render(&navigation_json(view, date), format, |_| {
                pretty::format_navigation(view, date)
            })
        }
        Commands::Validate { path } => {
            let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            let form: EventFormData =
                serde_json::from_str(&content).map_err(|source| CliError::Parse {
                    path: path.clone(),
                    source,
                })?;
            let valid = form.validate()?;
            let event = valid.into_event(store.next_event_id()?, store.users())?;
            store.add_event(event.clone())?;
            tracing::info!(id = event.id, title = %event.title, "Event form accepted");
            render(&event, format, |event| {
                if cli.quiet {
                    pretty::format_event(event)
                } else {
                    format!("Valid:\n{}", pretty::format_event(event))
                }
            })
        }
    };

    tracing::debug!(
        hits = cache.hits(),
        misses = cache.misses(),
        revision = store.revision(),
        "Command finished"
    );
    Ok(output)
}

fn navigation_json(view: CalendarView, date: NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "view": view,
        "date": date,
        "range": bigcal_core::calendar::range_text(view, date),
    })
}
