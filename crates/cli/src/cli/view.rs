//! View CLI command.

use bigcal_core::calendar::CalendarView;
use clap::{Parser, ValueEnum};

/// Render a calendar view.
#[derive(Debug, Parser)]
pub struct ViewCommand {
    /// Which view to render.
    #[arg(default_value = "month")]
    pub kind: ViewKind,
}

/// CLI view kind (with clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    Day,
    Week,
    Month,
    Year,
    Agenda,
}

impl From<ViewKind> for CalendarView {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Day => CalendarView::Day,
            ViewKind::Week => CalendarView::Week,
            ViewKind::Month => CalendarView::Month,
            ViewKind::Year => CalendarView::Year,
            ViewKind::Agenda => CalendarView::Agenda,
        }
    }
}
