use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Serialize)]
pub struct PingResponse {
    message: &'static str,
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

pub fn router() -> Router {
    Router::new().route("/ping", get(ping))
}
