//! Reference table errors.

use sf_core::SfError;
use thiserror::Error;

/// Result type for table construction.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while building a table from caller-supplied rows.
///
/// Lookups themselves never fail: out-of-range keys clamp.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Table '{table}' has no rows")]
    Empty { table: &'static str },

    #[error("Table '{table}' key '{key}' is not strictly increasing at row {index}")]
    NotMonotonic {
        table: &'static str,
        key: &'static str,
        index: usize,
    },

    #[error("Table '{table}' has a non-finite value at row {index}")]
    NonFinite { table: &'static str, index: usize },
}

impl From<TableError> for SfError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::Empty { .. } => SfError::InvalidArg {
                what: "empty reference table",
            },
            TableError::NotMonotonic { .. } => SfError::Invariant {
                what: "reference table keys must be strictly increasing",
            },
            TableError::NonFinite { .. } => SfError::InvalidArg {
                what: "non-finite reference table value",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::NotMonotonic {
            table: "steam",
            key: "pressure",
            index: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("steam"));
        assert!(msg.contains("row 3"));
    }

    #[test]
    fn error_to_sf_error() {
        let err: SfError = TableError::Empty { table: "fhv_tcd" }.into();
        assert!(matches!(err, SfError::InvalidArg { .. }));
    }
}
