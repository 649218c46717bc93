//! Console reporting for ranked matches

pub mod formatter;

pub use formatter::MatchReporter;
