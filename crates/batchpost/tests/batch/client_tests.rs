use axum::http::StatusCode;
use batchpost::{Payload, PostClient, SendError};
use serde_json::json;

use super::test_utilities::{MockEndpoint, unreachable_endpoint};

fn hello_payload() -> Payload {
    Payload {
        user_id: "42".to_string(),
        title: "Hello".to_string(),
        body: "World".to_string(),
    }
}

#[tokio::test]
async fn test_send_returns_decoded_response() {
    let endpoint = MockEndpoint::echo().await;
    let client = PostClient::new(endpoint.url.clone()).unwrap();

    let response = client.send(&hello_payload()).await.unwrap();

    assert_eq!(response["userId"], "42");
    assert_eq!(response["title"], "Hello");
    assert_eq!(response["body"], "World");
    assert_eq!(response["id"], 101);
    assert_eq!(
        endpoint.received(),
        vec![json!({"userId": "42", "title": "Hello", "body": "World"})]
    );
}

#[tokio::test]
async fn test_success_range_bounds() {
    for (code, succeeds) in [(200, true), (299, true), (300, false), (404, false)] {
        let status = StatusCode::from_u16(code).unwrap();
        let endpoint =
            MockEndpoint::start(move |payload| (status, payload.to_string())).await;
        let client = PostClient::new(endpoint.url.clone()).unwrap();

        let result = client.send(&hello_payload()).await;
        if succeeds {
            assert!(result.is_ok(), "status {code} should succeed, got {result:?}");
        } else {
            assert_eq!(result, Err(SendError::Status { status: code }));
        }
    }
}

#[tokio::test]
async fn test_server_error_is_status_failure() {
    let endpoint = MockEndpoint::with_status(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = PostClient::new(endpoint.url.clone()).unwrap();

    let err = client.send(&hello_payload()).await.unwrap_err();

    assert_eq!(err, SendError::Status { status: 500 });
    assert_eq!(err.to_string(), "Request failed with status code: 500");
}

#[tokio::test]
async fn test_non_json_body_is_decode_failure() {
    let endpoint = MockEndpoint::start(|_| (StatusCode::OK, "not json".to_string())).await;
    let client = PostClient::new(endpoint.url.clone()).unwrap();

    match client.send(&hello_payload()).await {
        Err(SendError::Decode { .. }) => {}
        other => panic!("Expected decode failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_json_array_body_is_decode_failure() {
    let endpoint =
        MockEndpoint::start(|payload| (StatusCode::OK, json!([payload]).to_string())).await;
    let client = PostClient::new(endpoint.url.clone()).unwrap();

    match client.send(&hello_payload()).await {
        Err(SendError::Decode { .. }) => {}
        other => panic!("Expected decode failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_failure() {
    let url = unreachable_endpoint();
    let client = PostClient::new(url.clone()).unwrap();

    match client.send(&hello_payload()).await {
        Err(SendError::Transport { endpoint, .. }) => assert_eq!(endpoint, url),
        other => panic!("Expected transport failure, got {other:?}"),
    }
}
