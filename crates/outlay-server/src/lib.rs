//! HTTP server for Outlay.
//!
//! Exposes the expense ledger over a small REST surface: append, list,
//! category filter, month summary, stats, and delete-by-match. The routing
//! layer owns request parsing and validation and translates store-signaled
//! conditions into status codes; all ledger semantics live in
//! [`outlay_store`].

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod validation;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::OutlayServer;
pub use validation::{ExpenseRequest, ValidExpense, ValidationError};
