//! Error type for the command-line front end.

use std::path::PathBuf;

use sf_engine::EngineError;
use sf_project::ProjectError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Calculation error: {0}")]
    Engine(#[from] EngineError),

    #[error("Missing fields for {items}: {fields}")]
    MissingFields { items: String, fields: String },

    #[error("Invalid steam rate in {case}: {message}")]
    InvalidRate { case: String, message: String },

    #[error("Failed to write {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Serialize(err.to_string())
    }
}
