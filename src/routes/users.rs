use axum::{Json, Router, routing::get};
use tracing::debug;

use crate::models::ListResponse;
use crate::models::finance::{USERS, User};

pub fn router() -> Router {
    Router::new().route("/users", get(list_users))
}

async fn list_users() -> Json<ListResponse<'static, User>> {
    debug!(count = USERS.len(), "Serving users");
    Json(ListResponse::ok(&USERS))
}
