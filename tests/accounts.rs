mod common;

use common::{send_request, send_request_with_method, test_app};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_should_list_accounts_in_order() {
    let (status, body) = send_request(test_app(), "/api/v1/accounts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": [
                { "id": 1, "name": "現金", "type": "cash", "balance": 10000 },
                { "id": 2, "name": "銀行", "type": "bank", "balance": 50000 },
            ]
        })
    );
}

#[tokio::test]
async fn test_account_names_are_raw_utf8() {
    let (status, body) = send_request_with_method(test_app(), "/api/v1/accounts", Method::GET).await;

    assert_eq!(status, StatusCode::OK);
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("\"name\":\"現金\""));
    assert!(!text.contains("\\u"));
}

#[tokio::test]
async fn test_should_reject_post_to_accounts() {
    let (status, _) = send_request_with_method(test_app(), "/api/v1/accounts", Method::POST).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
