//! Engine errors.

use sf_core::SfError;
use sf_tables::TableError;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Failures of a calculation call. Degenerate divisions are not errors;
/// they zero the dependent quantity instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A field the pipeline reads is absent (non-finite).
    #[error("Missing required input field: {field}")]
    MissingInput { field: &'static str },

    #[error("No steam rate cases to calculate")]
    EmptyCases,

    #[error("Reference table error: {0}")]
    Table(#[from] TableError),

    #[error("Numeric error: {0}")]
    Core(#[from] SfError),
}

impl From<EngineError> for SfError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::MissingInput { field } => SfError::InvalidArg { what: field },
            EngineError::EmptyCases => SfError::InvalidArg {
                what: "empty case list",
            },
            EngineError::Table(e) => e.into(),
            EngineError::Core(e) => e,
        }
    }
}
