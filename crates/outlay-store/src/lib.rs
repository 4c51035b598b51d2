//! Flat-file expense ledger store.
//!
//! This crate owns the on-disk record collection: a single comma-separated
//! UTF-8 text file whose first row is always the literal header naming the
//! four record fields. On top of that file it provides append, full-scan
//! read, filtered read, aggregation, and delete-by-match.
//!
//! # Design Rules
//!
//! 1. Every operation opens, fully consumes, and closes the file within the
//!    call. No handle and no in-memory view of the ledger outlives a call.
//! 2. There is no locking and no isolation between concurrent callers. The
//!    store is a thin layer over the file; races between callers can
//!    interleave or lose writes, and that is accepted behavior.
//! 3. A record is never updated in place. Rows are created by append and
//!    destroyed by being excluded from a full rewrite during delete.
//! 4. Malformed stored amounts are never silently skipped: operations that
//!    interpret amounts numerically fail on the first unparsable value.
//! 5. All I/O errors are propagated, never retried.

pub mod error;
pub mod ledger;

pub use error::{StoreError, StoreResult};
pub use ledger::{LedgerStats, LedgerStore, MonthSummary};
