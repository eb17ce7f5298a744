use axum::{Json, Router, routing::get};
use tracing::debug;

use crate::models::ListResponse;
use crate::models::finance::{ACCOUNTS, Account};

pub fn router() -> Router {
    Router::new().route("/accounts", get(list_accounts))
}

async fn list_accounts() -> Json<ListResponse<'static, Account>> {
    debug!(count = ACCOUNTS.len(), "Serving accounts");
    Json(ListResponse::ok(&ACCOUNTS))
}
