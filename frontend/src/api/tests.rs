#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use serde_json::json;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url(""))
}

#[tokio::test]
async fn send_otp_posts_email_and_accepts_empty_success_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/sendotp");
        then.status(200).json_body(json!({}));
    });

    client(&server).send_otp("user@example.com").await.unwrap();

    assert_eq!(server.hits(POST, "/api/sendotp"), 1);
    assert_eq!(server.hits(GET, "/api/sendotp"), 0);
    assert_eq!(
        server.last_body(POST, "/api/sendotp"),
        Some(json!({ "email": "user@example.com" }))
    );
}

#[tokio::test]
async fn send_otp_accepts_any_2xx_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/sendotp");
        then.status(204);
    });

    assert!(client(&server).send_otp("user@example.com").await.is_ok());
}

#[tokio::test]
async fn send_otp_surfaces_backend_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/sendotp");
        then.status(429).json_body(json!({
            "error": "too many requests",
            "code": "RATE_LIMITED"
        }));
    });

    let error = client(&server)
        .send_otp("user@example.com")
        .await
        .expect_err("non-2xx must fail");
    assert_eq!(error.code, "RATE_LIMITED");
    assert_eq!(error.error, "too many requests");
}

#[tokio::test]
async fn non_2xx_without_error_body_maps_to_status_code() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/sendotp");
        then.status(500).json_body(json!({ "unexpected": true }));
    });

    let error = client(&server)
        .send_otp("user@example.com")
        .await
        .expect_err("500 must fail");
    assert_eq!(error.code, "HTTP_500");
}

#[tokio::test]
async fn verify_otp_returns_backend_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/verifyotp");
        then.status(200)
            .json_body(json!({ "message": "OTP verified" }));
    });

    let response = client(&server)
        .verify_otp("user@example.com", "000000")
        .await
        .unwrap();
    assert!(response.is_otp_verified());
    assert_eq!(
        server.last_body(POST, "/api/verifyotp"),
        Some(json!({ "email": "user@example.com", "otp": "000000" }))
    );
}

#[tokio::test]
async fn verify_otp_without_message_field_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/verifyotp");
        then.status(200).json_body(json!({ "ok": true }));
    });

    let error = client(&server)
        .verify_otp("user@example.com", "000000")
        .await
        .expect_err("missing message must fail");
    assert_eq!(error.code, "UNKNOWN");
}

#[tokio::test]
async fn register_admin_returns_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/register");
        then.status(201).json_body(json!({ "token": "abc123" }));
    });

    let response = client(&server)
        .register_admin("user@example.com", "Pass123!")
        .await
        .unwrap();
    assert_eq!(response.token, "abc123");
    assert_eq!(
        server.last_body(POST, "/api/admin/register"),
        Some(json!({ "email": "user@example.com", "password": "Pass123!" }))
    );
}

#[tokio::test]
async fn unrouted_request_fails_like_a_transport_error() {
    let server = MockServer::start_async().await;

    let error = client(&server)
        .register_admin("user@example.com", "Pass123!")
        .await
        .expect_err("no route registered");
    assert!(error.error.contains("No mock for POST /api/admin/register"));
    assert_eq!(server.total_hits(), 1);
}
