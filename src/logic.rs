//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! Each function resolves the wire-level mode, calls into `quiz`, and shapes
//! the result as a protocol DTO.

use tracing::{info, instrument};

use crate::error::QuizError;
use crate::protocol::{mapping_out, CheckAnswerOut, MappingOut, StartQuizOut};
use crate::quiz::{check_answer, start_quiz, summarize, Mode, RoundSummary};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub fn do_start_quiz(state: &AppState, mode: Option<&str>) -> StartQuizOut {
  let mode = Mode::from_wire(mode);
  let set = start_quiz(&state.cipher, mode);
  info!(target: "quiz", ?mode, count = set.letters.len(), "Quiz started");
  set.into()
}

#[instrument(level = "info", skip(state, answer), fields(answer_len = answer.len()))]
pub fn do_check_answer(state: &AppState, mode: Option<&str>, letter: &str, answer: &str) -> Result<CheckAnswerOut, QuizError> {
  let mode = Mode::from_wire(mode);
  let check = check_answer(&state.cipher, mode, letter, answer)?;
  info!(target: "quiz", ?mode, question = %check.question_letter, correct = check.correct, "Answer checked");
  Ok(check.into())
}

pub fn do_mapping(state: &AppState) -> MappingOut {
  mapping_out(&state.cipher)
}

#[instrument(level = "info", skip(_state))]
pub fn do_summary(_state: &AppState, score: u32, total: u32) -> Result<RoundSummary, QuizError> {
  let summary = summarize(score, total)?;
  info!(target: "quiz", score, total, percentage = summary.percentage, performance = ?summary.performance, "Round summarized");
  Ok(summary)
}
