mod error;
mod filter;
mod form;
mod grid;
mod layout;
mod mock_data;
mod navigation;
mod snapshot;
mod store;
mod timeline;
mod types;
mod window;

pub use error::{FieldError, FormField, Result, StoreError, ValidationErrors};
pub use filter::{
    event_start_dates, filter_events, is_event_in_range, partition_events, PartitionedEvents,
};
pub use form::{EventFormData, ValidEventForm};
pub use grid::{calendar_cells, grid_range, grid_week_starts, CalendarCell};
pub use layout::{
    calculate_month_layout, month_cell_events, CellEvent, EventBar, LayoutConfig, MonthLayout,
    WeekLayout, DEFAULT_MAX_ROWS_PER_WEEK,
};
pub use mock_data::{generate_mock_events, mock_users};
pub use navigation::{
    current_events, events_count, is_same_period, navigate_date, range_text, Direction,
};
pub use snapshot::{SnapshotCache, ViewSnapshot, DEFAULT_CACHE_ENTRIES};
pub use store::EventStore;
pub use timeline::{
    event_block_style, group_events, is_working_hour, visible_hours, BlockStyle, HourAxis,
};
pub use types::{
    BadgeVariant, CalendarSettings, CalendarView, Event, EventColor, HourRange, User, UserFilter,
    VisibleHours, WorkingHours,
};
pub use window::{
    end_of_day, end_of_month, end_of_week, end_of_year, last_second_of_day, resolve_view_window,
    start_of_day, start_of_month, start_of_week, start_of_year, ViewWindow,
};
