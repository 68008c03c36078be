//! bigcal_core - Calendar engine for day, week, month, year and agenda views.
//!
//! Everything in this crate is pure and synchronous. The [`calendar::EventStore`]
//! owns the data; the remaining modules derive view data from it.

pub mod calendar;
pub mod serde;
