//! Failure-path tests for the resilient fetch boundary: every transport,
//! status and parse failure must become the caller-supplied default.

use serde_json::{json, Value};
use tokio::net::TcpListener;

use preview_unfurler::FetchClient;

mod common;

#[tokio::test]
async fn successful_json_is_returned() {
    let addr = common::start_mock_api(|_| (200, r#"{"ok":true}"#.to_string())).await;

    let client = FetchClient::new();
    let value = client.json(&format!("http://{addr}/anything")).await;
    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn non_success_status_yields_default() {
    let addr = common::start_mock_api(|_| (503, r#"{"ok":true}"#.to_string())).await;

    let client = FetchClient::new();
    let value = client
        .json_or(&format!("http://{addr}/x"), json!({"fallback": 1}))
        .await;
    assert_eq!(value, json!({"fallback": 1}));
}

#[tokio::test]
async fn unparseable_body_yields_default() {
    let addr = common::start_mock_api(|_| (200, "definitely not json".to_string())).await;

    let client = FetchClient::new();
    let value = client.json(&format!("http://{addr}/x")).await;
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn transport_failure_yields_default() {
    // Bind then drop to get an address nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FetchClient::new();
    let value = client.json_or(&format!("http://{addr}/x"), json!([])).await;
    assert_eq!(value, json!([]));

    let text = client
        .text_or(&format!("http://{addr}/x"), "unresolved".to_string())
        .await;
    assert_eq!(text, "unresolved");
}

#[tokio::test]
async fn text_fetch_returns_body_on_success() {
    let addr = common::start_mock_api(|path| {
        if path == "/block-height/1" {
            (
                200,
                "00000000839a8e6886ab5951d76f411475428afc90947ee320161bbf18eb6048".to_string(),
            )
        } else {
            (404, "Not Found".to_string())
        }
    })
    .await;

    let client = FetchClient::new();
    let text = client
        .text_or(&format!("http://{addr}/block-height/1"), String::new())
        .await;
    assert_eq!(
        text,
        "00000000839a8e6886ab5951d76f411475428afc90947ee320161bbf18eb6048"
    );
}
