//! Chat endpoint handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::{Value, json};

use superior_types::chat::ChatRequest;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/superior_chat/ - run one turn of the chat pipeline.
///
/// Validation failures come back as 400 with a `{"response": ...}` body;
/// an unparseable request body is treated like any other unexpected
/// failure and answered with the generic 500 envelope.
pub async fn superior_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = body.map_err(|e| AppError::Internal(e.body_text()))?;

    let turn = state.chat_service.handle_message(request).await?;

    Ok(Json(json!({ "response": turn.response })))
}
