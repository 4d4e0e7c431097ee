//! Error types: cipher table construction, per-request quiz validation, and
//! the HTTP rejection wrapper.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::cipher::Alphabet;

/// Raised while building a `CipherMap`. A bad table is a programming error,
/// so these only ever surface at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
  #[error("cipher table must have 26 pairs, got {0}")]
  WrongSize(usize),

  #[error("'{0}' is not an ASCII letter")]
  NotALetter(char),

  #[error("English letter '{0}' is mapped more than once")]
  DuplicateEnglish(char),

  #[error("cipher letter '{0}' is the image of more than one English letter")]
  DuplicateCipher(char),
}

/// Local validation failures for a single quiz request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
  #[error("missing required field '{field}'")]
  MissingInput { field: &'static str },

  #[error("'{symbol}' is not a valid {alphabet} letter")]
  InvalidSymbol { symbol: String, alphabet: Alphabet },

  #[error("score {score} out of {total} is not a valid round result")]
  InvalidScore { score: u32, total: u32 },
}

impl QuizError {
  /// Stable machine-readable kind, used as the `error` field on the wire.
  pub fn kind(&self) -> &'static str {
    match self {
      QuizError::MissingInput { .. } => "missing_input",
      QuizError::InvalidSymbol { .. } => "invalid_symbol",
      QuizError::InvalidScore { .. } => "invalid_score",
    }
  }
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Quiz(#[from] QuizError),
}

#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, kind) = match &self {
      ApiError::Quiz(e) => (StatusCode::BAD_REQUEST, e.kind()),
    };

    let body = Json(ErrorResponse {
      error: kind.to_string(),
      message: self.to_string(),
    });

    (status, body).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_input_is_bad_request() {
    let error = ApiError::from(QuizError::MissingInput { field: "letter" });
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn test_invalid_symbol_is_bad_request() {
    let error = ApiError::from(QuizError::InvalidSymbol { symbol: "1".into(), alphabet: Alphabet::English });
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn test_error_display() {
    let error = QuizError::InvalidSymbol { symbol: "1".into(), alphabet: Alphabet::English };
    assert_eq!(error.to_string(), "'1' is not a valid English letter");
    assert_eq!(error.kind(), "invalid_symbol");

    let error = QuizError::MissingInput { field: "answer" };
    assert_eq!(error.to_string(), "missing required field 'answer'");
  }

  #[test]
  fn test_cipher_error_display() {
    assert_eq!(CipherError::WrongSize(25).to_string(), "cipher table must have 26 pairs, got 25");
    assert_eq!(CipherError::DuplicateCipher('Y').to_string(), "cipher letter 'Y' is the image of more than one English letter");
  }
}
