//! Foundation types for Outlay.
//!
//! This crate provides the expense record type and the delimited row format
//! it is persisted in. Every other Outlay crate depends on `outlay-types`.
//!
//! # Key Types
//!
//! - [`ExpenseRecord`] — One row of the expense ledger
//! - [`TypeError`] — Parse failures at the row/record boundary
//!
//! The ledger file is plain UTF-8 text, one comma-separated row per record,
//! with a fixed header row naming the four fields. All numeric interpretation
//! of the `Amount` field happens lazily via [`ExpenseRecord::amount_value`] so
//! that reading a ledger never fails on a row whose amount no consumer needs.

pub mod error;
pub mod record;
pub mod row;

pub use error::TypeError;
pub use record::{ExpenseRecord, LEDGER_HEADER};
pub use row::{render_row, split_row};
