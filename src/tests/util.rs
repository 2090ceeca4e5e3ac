use crate::models::PingResponse;

use crate::tests::test_util::get_client;
use axum::http::{header, StatusCode};

#[tokio::test]
async fn test_ping() {
    // Setup
    let client = get_client().await;

    // Send a request to the ping endpoint
    let response = client.get("/ping").send().await;

    // Verify the response
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: PingResponse = response.json().await;
    assert_eq!(body.message, "pong");
}

#[tokio::test]
async fn test_ping_body_is_stable() {
    let client = get_client().await;

    let first = client.get("/ping").send().await.text().await;
    let second = client.get("/ping").send().await.text().await;

    assert_eq!(first, r#"{"message":"pong"}"#);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_ping_ignores_request_headers() {
    let client = get_client().await;

    let response = client
        .get("/ping")
        .header(header::ACCEPT, "text/plain")
        .header(header::AUTHORIZATION, "Bearer whatever")
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await, r#"{"message":"pong"}"#);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let client = get_client().await;

    let response = client
        .get("/unknown")
        .header(header::ORIGIN, "https://example.com")
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*",
    );
}

#[tokio::test]
async fn test_ping_rejects_other_methods() {
    let client = get_client().await;

    let response = client
        .post("/ping")
        .header(header::ORIGIN, "https://example.com")
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*",
    );
}
