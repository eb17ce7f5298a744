use axum::{Json, Router, routing::get};
use tracing::debug;

use crate::models::ListResponse;
use crate::models::finance::{TRANSACTIONS, Transaction};

pub fn router() -> Router {
    Router::new().route("/transactions", get(list_transactions))
}

async fn list_transactions() -> Json<ListResponse<'static, Transaction>> {
    debug!(count = TRANSACTIONS.len(), "Serving transactions");
    Json(ListResponse::ok(&TRANSACTIONS))
}
