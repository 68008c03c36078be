//! bigcal_cli - terminal front-end for the bigcal calendar engine.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod report;

pub use config::Config;
pub use error::{CliError, Result};
