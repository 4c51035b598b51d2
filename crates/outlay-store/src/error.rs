/// Errors from ledger store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A filter or delete matched no records.
    #[error("no matching expense records")]
    NoMatches,

    /// The ledger holds no data rows.
    #[error("ledger has no expense records")]
    Empty,

    /// A data row could not be parsed.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// A stored amount could not be parsed as a decimal number where one was
    /// required (aggregation, stats, delete comparison).
    #[error("malformed amount {value:?} in ledger")]
    MalformedAmount { value: String },

    /// I/O error from the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
