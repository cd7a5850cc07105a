//! Core error types for the report document model.
//!
//! Everything here is a local construction error: it means the report
//! logic driving the builder is wrong, so callers propagate it with `?`
//! instead of swallowing it.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the document model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Table builder misuse: {0}")]
    Table(#[from] TableError),

    #[error("Element tag cannot be empty")]
    EmptyTag,
}

/// Errors raised by [`crate::table::TableBuilder`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A column with the same key was already declared.
    #[error("Column '{0}' is already declared")]
    DuplicateColumnKey(String),

    /// A row, the id column or the sort column names an undeclared column.
    #[error("Column '{key}' is not declared ({context})")]
    UnknownColumnKey { key: String, context: String },

    /// The builder was mutated after `materialize()`.
    #[error("Table '{0}' was already materialized and cannot be modified")]
    ReuseAfterMaterialize(String),
}

impl TableError {
    /// Creates an UnknownColumnKey error.
    pub fn unknown_column(key: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownColumnKey {
            key: key.into(),
            context: context.into(),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
