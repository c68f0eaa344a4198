//! HTTP endpoint handlers. These are thin wrappers that forward to the session
//! store or straight to the scoring core.
//! Each handler is instrumented; failures become `{ "error": message }` bodies.

use std::sync::Arc;
use axum::{
  extract::{rejection::JsonRejection, Path, State},
  http::StatusCode,
  response::IntoResponse,
  Json,
};
use tracing::{debug, info, instrument};

use crate::domain::LearningStyle;
use crate::error::Error;
use crate::logic::score;
use crate::protocol::*;
use crate::seeds::style_description;
use crate::state::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn error_response(status: StatusCode, msg: &str) -> ApiError {
  (status, Json(serde_json::json!({ "error": msg })))
}

fn status_for(e: &Error) -> StatusCode {
  match e {
    Error::UnknownSession(_) => StatusCode::NOT_FOUND,
    Error::IncompleteResponses { .. }
    | Error::EmptyResponseSet
    | Error::WrongQuestionCount { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    Error::QuestionOutOfRange { .. } | Error::RankOutOfRange(_) => StatusCode::BAD_REQUEST,
    Error::WrongPhase { .. } => StatusCode::CONFLICT,
    Error::SessionLimit(_) => StatusCode::SERVICE_UNAVAILABLE,
  }
}

impl From<Error> for (StatusCode, Json<serde_json::Value>) {
  fn from(e: Error) -> Self {
    error_response(status_for(&e), &e.to_string())
  }
}

/// Unwrap a JSON body, turning axum's plain-text rejection into the same
/// `{ "error": message }` shape as every other failure.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
  match payload {
    Ok(Json(body)) => Ok(body),
    Err(rejection) => Err(error_response(rejection.status(), &rejection.body_text())),
  }
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_questionnaire() -> impl IntoResponse {
  Json(questionnaire_out())
}

#[instrument(level = "info")]
pub async fn http_get_styles() -> impl IntoResponse {
  let styles: Vec<StyleOut> = LearningStyle::ALL
    .into_iter()
    .map(|style| StyleOut { style, description: style_description(style) })
    .collect();
  Json(styles)
}

/// Stateless check for callers that keep the answers themselves.
#[instrument(level = "info", skip(payload))]
pub async fn http_post_validate(payload: Result<Json<ResponsesIn>, JsonRejection>) -> ApiResult<ValidationOut> {
  let responses = json_body(payload)?.into_responses()?;
  Ok(Json(validation_out(&responses)))
}

#[instrument(level = "info", skip(payload))]
pub async fn http_post_score(payload: Result<Json<ResponsesIn>, JsonRejection>) -> ApiResult<ResultOut> {
  let responses = json_body(payload)?.into_responses()?;
  let result = score(&responses)?;
  info!(target: "scoring", style = %result.style, "HTTP stateless score served");
  Ok(Json(result_out(&result)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_session(State(state): State<Arc<AppState>>) -> ApiResult<SessionOut> {
  let session = state.create_session().await?;
  Ok(Json(session_out(&session)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_session(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> ApiResult<SessionOut> {
  let session = state.get_session(&id).await?;
  Ok(Json(session_out(&session)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_delete_session(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
  state.remove_session(&id).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_start(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> ApiResult<SessionOut> {
  let session = state.start(&id).await?;
  Ok(Json(session_out(&session)))
}

#[instrument(level = "info", skip(state, payload))]
pub async fn http_post_rank(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  payload: Result<Json<RankIn>, JsonRejection>,
) -> ApiResult<SessionOut> {
  let body = json_body(payload)?;
  debug!(target: "session", %id, question_index = body.question_index, tag = %body.tag, value = body.value, "HTTP rank received");
  let session = state.record_rank(&id, body.question_index, body.tag, body.value).await?;
  Ok(Json(session_out(&session)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_submit(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> ApiResult<ResultOut> {
  let (_, result) = state.submit(&id).await?;
  Ok(Json(result_out(&result)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_reset(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> ApiResult<SessionOut> {
  let session = state.reset(&id).await?;
  Ok(Json(session_out(&session)))
}
