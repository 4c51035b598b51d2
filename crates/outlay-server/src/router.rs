use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use outlay_store::LedgerStore;

use crate::handler;

/// Build the axum router over the given store.
pub fn build_router(store: LedgerStore) -> Router {
    Router::new()
        .route(
            "/expenses",
            get(handler::list_expenses)
                .post(handler::add_expense)
                .delete(handler::delete_expense),
        )
        .route(
            "/expenses/category/:category",
            get(handler::expenses_by_category),
        )
        .route("/expenses/summary/:month", get(handler::month_summary))
        .route("/expenses/stats", get(handler::ledger_stats))
        .route("/v1/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
