use httpmock::prelude::*;
use serde_json::json;

use super::{AccountsClient, SignupError, SignupRequest};

fn request() -> SignupRequest {
    SignupRequest {
        username: "satoshi21".to_string(),
        email: "satoshi@example.com".to_string(),
        password: "Abcdefg1!".to_string(),
    }
}

#[tokio::test]
async fn sign_up_posts_payload_and_decodes_message() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            // The body is matched for equality: exactly these three keys,
            // no confirmation value.
            when.method(POST)
                .path("/signup")
                .header("content-type", "application/json")
                .json_body(json!({
                    "username": "satoshi21",
                    "email": "satoshi@example.com",
                    "password": "Abcdefg1!",
                }));
            then.status(200).json_body(json!({ "message": "Welcome!" }));
        })
        .await;

    let client = AccountsClient::with_base_url(server.base_url());
    let response = client.sign_up(&request()).await.unwrap();

    assert_eq!(response.message, "Welcome!");
    mock.assert_async().await;
}

#[tokio::test]
async fn sign_up_rejection_carries_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/signup");
            then.status(409)
                .json_body(json!({ "message": "Email already in use" }));
        })
        .await;

    let client = AccountsClient::with_base_url(server.base_url());
    match client.sign_up(&request()).await {
        Err(SignupError::Rejected(info)) => {
            assert_eq!(info.status_code, 409);
            assert_eq!(info.message().as_deref(), Some("Email already in use"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn sign_up_malformed_success_body_is_a_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/signup");
            then.status(200).body("not json");
        })
        .await;

    let client = AccountsClient::with_base_url(server.base_url());
    assert!(matches!(
        client.sign_up(&request()).await,
        Err(SignupError::Transport(_))
    ));
}

#[tokio::test]
async fn sign_up_connection_failure_is_a_transport_error() {
    // Nothing listens on port 1.
    let client = AccountsClient::with_base_url("http://127.0.0.1:1".to_string());
    assert!(matches!(
        client.sign_up(&request()).await,
        Err(SignupError::Transport(_))
    ));
}
