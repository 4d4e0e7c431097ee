//! WebSocket tests over a real HTTP transport.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use albhed_quiz::config::AppConfig;
use albhed_quiz::routes::build_router;
use albhed_quiz::state::AppState;

fn server() -> TestServer {
    let state = AppState::new(AppConfig::default()).unwrap();
    TestServer::builder()
        .http_transport()
        .build(build_router(Arc::new(state)))
        .unwrap()
}

/// One reply per message, in order, over a single connection.
#[tokio::test]
async fn test_ws_quiz_round() {
    let server = server();
    let mut ws = server.get_websocket("/ws").await.into_websocket().await;

    ws.send_json(&json!({ "type": "start_quiz", "mode": "cipher_to_english" })).await;
    let quiz: Value = ws.receive_json().await;
    assert_eq!(quiz["type"], "quiz");
    assert_eq!(quiz["letters"].as_array().unwrap().len(), 26);

    ws.send_json(&json!({ "type": "check_answer", "mode": "cipher_to_english", "letter": "Y", "answer": "a" }))
        .await;
    let verdict: Value = ws.receive_json().await;
    assert_eq!(
        verdict,
        json!({ "type": "answer_result", "correct": true, "correct_answer": "A", "question_letter": "Y" })
    );
}

/// Unparseable text gets an `invalid_json` error and the socket stays usable.
#[tokio::test]
async fn test_ws_invalid_json_reply() {
    let server = server();
    let mut ws = server.get_websocket("/ws").await.into_websocket().await;

    ws.send_text("{not json").await;
    let reply: Value = ws.receive_json().await;
    assert_eq!(reply["type"], "error");
    assert_eq!(reply["error"], "invalid_json");

    ws.send_json(&json!({ "type": "ping" })).await;
    let reply: Value = ws.receive_json().await;
    assert_eq!(reply, json!({ "type": "pong" }));
}
