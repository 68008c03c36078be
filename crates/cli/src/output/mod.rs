//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Renders `value` as compact JSON or through its pretty formatter.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigcal_core::calendar::CalendarView;

    #[test]
    fn test_render_dispatches_on_format() {
        let view = CalendarView::Week;
        assert_eq!(render(&view, OutputFormat::Json, |_| unreachable!()), "\"week\"");
        assert_eq!(
            render(&view, OutputFormat::Pretty, |v| v.as_str().to_uppercase()),
            "WEEK"
        );
    }
}
