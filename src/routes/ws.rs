//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::error::QuizError;
use crate::logic::*;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "albhed_quiz", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "albhed_quiz", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "albhed_quiz", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state)
          }
          Err(e) => ServerWsMessage::Error { error: "invalid_json".into(), message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "error": "internal", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "albhed_quiz", error = %e, "WS send error");
          break;
        }
      }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "albhed_quiz", "WebSocket disconnected");
}

fn rejection(e: QuizError) -> ServerWsMessage {
  ServerWsMessage::Error { error: e.kind().into(), message: e.to_string() }
}

/// Dispatch one parsed client message. Synchronous: every quiz operation is.
pub fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::StartQuiz { mode } => ServerWsMessage::Quiz(do_start_quiz(state, mode.as_deref())),

    ClientWsMessage::CheckAnswer { mode, letter, answer } => {
      let (letter, answer) = (letter.as_deref().unwrap_or(""), answer.as_deref().unwrap_or(""));
      match do_check_answer(state, mode.as_deref(), letter, answer) {
        Ok(out) => ServerWsMessage::AnswerResult(out),
        Err(e) => rejection(e),
      }
    }

    ClientWsMessage::Mapping => ServerWsMessage::Mapping(do_mapping(state)),

    ClientWsMessage::Summary { score, total } => match do_summary(state, score, total) {
      Ok(summary) => ServerWsMessage::Summary(summary),
      Err(e) => rejection(e),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::AppConfig;
  use serde_json::{json, Value};

  fn roundtrip(state: &AppState, incoming: Value) -> Value {
    let msg: ClientWsMessage = serde_json::from_value(incoming).unwrap();
    serde_json::to_value(handle_client_ws(msg, state)).unwrap()
  }

  #[test]
  fn test_ws_ping() {
    let state = AppState::new(AppConfig::default()).unwrap();
    assert_eq!(roundtrip(&state, json!({ "type": "ping" })), json!({ "type": "pong" }));
  }

  #[test]
  fn test_ws_start_quiz_reply() {
    let state = AppState::new(AppConfig::default()).unwrap();
    let reply = roundtrip(&state, json!({ "type": "start_quiz", "mode": "albhed_to_english" }));
    assert_eq!(reply["type"], "quiz");
    assert_eq!(reply["mode"], "cipher_to_english");
    assert_eq!(reply["letters"].as_array().unwrap().len(), 26);
  }

  #[test]
  fn test_ws_check_answer_reply() {
    let state = AppState::new(AppConfig::default()).unwrap();
    let reply = roundtrip(&state, json!({ "type": "check_answer", "letter": "a", "answer": "y" }));
    assert_eq!(reply, json!({ "type": "answer_result", "correct": true, "correct_answer": "Y", "question_letter": "A" }));
  }

  #[test]
  fn test_ws_rejection_is_error_message() {
    let state = AppState::new(AppConfig::default()).unwrap();
    let reply = roundtrip(&state, json!({ "type": "check_answer", "letter": "1", "answer": "Y" }));
    assert_eq!(reply["type"], "error");
    assert_eq!(reply["error"], "invalid_symbol");

    let reply = roundtrip(&state, json!({ "type": "summary", "score": 3, "total": 0 }));
    assert_eq!(reply["error"], "invalid_score");
  }

  #[test]
  fn test_ws_null_fields_are_missing_input() {
    let state = AppState::new(AppConfig::default()).unwrap();
    let reply = roundtrip(&state, json!({ "type": "check_answer", "letter": null, "answer": "Y" }));
    assert_eq!(reply["error"], "missing_input");

    let reply = roundtrip(&state, json!({ "type": "check_answer", "letter": "A" }));
    assert_eq!(reply["error"], "missing_input");
  }
}
