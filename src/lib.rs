//! Job pilot library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod jobs;
pub mod output;
pub mod processing;
pub mod submission;

pub use config::Preferences;
pub use error::{JobPilotError, Result};
