use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use outlay_store::{LedgerStats, LedgerStore, MonthSummary, StoreError};
use outlay_types::ExpenseRecord;

use crate::error::{ServerError, ServerResult};
use crate::validation::ExpenseRequest;

/// Validate and append one expense.
pub async fn add_expense(
    State(store): State<LedgerStore>,
    Json(request): Json<ExpenseRequest>,
) -> ServerResult<Json<Value>> {
    let expense = request.validate()?;
    store.append(&expense.category, expense.amount, &expense.description)?;
    Ok(Json(json!({ "message": "expense recorded" })))
}

/// Every record, in file order.
pub async fn list_expenses(
    State(store): State<LedgerStore>,
) -> ServerResult<Json<Vec<ExpenseRecord>>> {
    Ok(Json(store.read_all()?))
}

/// Case-insensitive category filter; 404 when nothing matches.
pub async fn expenses_by_category(
    State(store): State<LedgerStore>,
    Path(category): Path<String>,
) -> ServerResult<Json<Vec<ExpenseRecord>>> {
    match store.filter_by_category(&category) {
        Ok(records) => Ok(Json(records)),
        Err(StoreError::NoMatches) => Err(ServerError::NotFound(format!(
            "no expenses found in category {category:?}"
        ))),
        Err(err) => Err(err.into()),
    }
}

/// Prefix-matched rows for a month plus their total. An empty match is
/// success with total 0, never 404.
pub async fn month_summary(
    State(store): State<LedgerStore>,
    Path(month): Path<String>,
) -> ServerResult<Json<MonthSummary>> {
    Ok(Json(store.month_summary(&month)?))
}

/// Highest and lowest expense; 404 on an empty ledger.
pub async fn ledger_stats(
    State(store): State<LedgerStore>,
) -> ServerResult<Json<LedgerStats>> {
    match store.stats() {
        Ok(stats) => Ok(Json(stats)),
        Err(StoreError::Empty) => Err(ServerError::NotFound("no expenses recorded".into())),
        Err(err) => Err(err.into()),
    }
}

/// Query parameters identifying the exact rows to delete.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

/// Remove every row matching the full tuple.
pub async fn delete_expense(
    State(store): State<LedgerStore>,
    Query(params): Query<DeleteParams>,
) -> ServerResult<Json<Value>> {
    match store.delete_matching(
        &params.date,
        &params.category,
        params.amount,
        &params.description,
    ) {
        Ok(removed) => Ok(Json(json!({ "message": "expense deleted", "removed": removed }))),
        Err(StoreError::NoMatches) => {
            Err(ServerError::NotFound("no matching expense found".into()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
