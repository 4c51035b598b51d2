use thiserror::Error;

/// Errors produced at the row/record boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A data row did not have exactly four fields.
    #[error("malformed row: expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A quoted field was not terminated before the end of the row.
    #[error("malformed row: unterminated quoted field")]
    UnterminatedQuote,

    /// A stored amount could not be parsed as a decimal number.
    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),
}
