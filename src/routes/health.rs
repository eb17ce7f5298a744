use axum::{Json, Router, routing::get};
use serde::Serialize;

pub const SERVICE_NAME: &str = "finance-api";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
