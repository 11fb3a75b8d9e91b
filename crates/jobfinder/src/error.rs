use std::path::PathBuf;
use thiserror::Error;

use crate::api::FetchError;
use crate::validation::FormErrors;

/// Message shown to the user whenever a refresh fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch jobs. Please try again later.";

#[derive(Error, Debug)]
pub enum JobFinderError {
    #[error("{message}")]
    FetchFailed {
        message: String,
        #[source]
        source: FetchError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Application form is invalid: {0}")]
    InvalidForm(FormErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl JobFinderError {
    pub fn fetch_failed(source: FetchError) -> Self {
        JobFinderError::FetchFailed {
            message: FETCH_FAILED_MESSAGE.to_string(),
            source,
        }
    }

    /// Returns true if retrying the same operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, JobFinderError::FetchFailed { .. })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, JobFinderError>;
