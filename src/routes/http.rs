//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::logic::*;
use crate::protocol::*;
use crate::quiz::RoundSummary;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

/// Body is optional: older clients POST with no body at all.
#[instrument(level = "info", skip_all)]
pub async fn http_start_quiz(
  State(state): State<Arc<AppState>>,
  body: Option<Json<StartQuizIn>>,
) -> Json<StartQuizOut> {
  let Json(body) = body.unwrap_or_default();
  Json(do_start_quiz(&state, body.mode.as_deref()))
}

/// A missing or unparseable body is graded like an empty one, so the caller
/// always gets the structured `missing_input` rejection.
#[instrument(level = "info", skip_all)]
pub async fn http_check_answer(
  State(state): State<Arc<AppState>>,
  body: Option<Json<CheckAnswerIn>>,
) -> Result<Json<CheckAnswerOut>, ApiError> {
  let Json(body) = body.unwrap_or_default();
  match do_check_answer(&state, body.mode.as_deref(), body.letter(), body.answer()) {
    Ok(out) => Ok(Json(out)),
    Err(e) => {
      info!(target: "quiz", error = %e, "HTTP check_answer rejected");
      Err(e.into())
    }
  }
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_mapping(State(state): State<Arc<AppState>>) -> Json<MappingOut> {
  Json(do_mapping(&state))
}

#[instrument(level = "info", skip(state, body), fields(score = body.score, total = body.total))]
pub async fn http_post_summary(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SummaryIn>,
) -> Result<Json<RoundSummary>, ApiError> {
  Ok(Json(do_summary(&state, body.score, body.total)?))
}
