//! Error types for vspace operations.
//!
//! Every failure aborts the whole run: the boundary computer never hands
//! back a partially updated hypothesis.

use thiserror::Error;

/// Result type for vspace operations.
pub type Result<T> = std::result::Result<T, VspaceError>;

/// Errors that can occur while loading a table or computing a boundary.
#[derive(Debug, Error)]
pub enum VspaceError {
    /// No example rows were supplied, so there is nothing to seed the
    /// specific hypothesis from.
    #[error("input table has no rows")]
    EmptyInput,

    /// The requested target column is not one of the table's columns.
    #[error("unknown attribute '{name}' (available: {})", .available.join(", "))]
    UnknownAttribute { name: String, available: Vec<String> },

    /// A row's width differs from the established width.
    #[error("row {row} has {found} fields, expected {expected}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The source has no header record to name the columns.
    #[error("table has no header row")]
    MissingHeader,

    /// Two columns share one header name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text parse errors (wrapped).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// Convenience constructors
impl VspaceError {
    pub fn unknown_attribute(name: impl Into<String>, available: &[String]) -> Self {
        VspaceError::UnknownAttribute {
            name: name.into(),
            available: available.to_vec(),
        }
    }

    pub fn schema_mismatch(row: usize, expected: usize, found: usize) -> Self {
        VspaceError::SchemaMismatch {
            row,
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attribute_lists_columns() {
        let err = VspaceError::unknown_attribute(
            "Play",
            &["Outlook".to_string(), "Temp".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "unknown attribute 'Play' (available: Outlook, Temp)"
        );
    }

    #[test]
    fn schema_mismatch_message() {
        let err = VspaceError::schema_mismatch(3, 4, 2);
        assert_eq!(err.to_string(), "row 3 has 2 fields, expected 4");
    }
}
