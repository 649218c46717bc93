//! Error handling for the job pilot application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobPilotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document unreadable: {0}")]
    DocumentUnreadable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Job source error: {0}")]
    JobSource(String),

    #[error("Submission error: {0}")]
    Submission(String),
}

pub type Result<T> = std::result::Result<T, JobPilotError>;
