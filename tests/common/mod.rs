#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use finance_api::config::Config;
use http::{HeaderMap, Method, Request, StatusCode};
use tower::ServiceExt;

pub fn test_app() -> Router {
    finance_api::app(&Config::default())
}

pub fn test_app_with_config(config: Config) -> Router {
    finance_api::app(&config)
}

pub async fn send_raw_request(
    app: Router,
    request: Request<Body>,
) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();

    (status, headers, body)
}

pub async fn send_request_with_method(
    app: Router,
    uri: &str,
    method: Method,
) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send_raw_request(app, request).await;
    (status, body)
}

pub async fn send_request(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send_request_with_method(app, uri, Method::GET).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}
