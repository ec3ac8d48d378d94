//! Axum route handlers for the interview relay.

use axum::{body::Bytes, extract::State, Json};

use crate::errors::AppError;
use crate::models::chat::{ChatReply, ChatRequest};
use crate::relay::relay_chat;
use crate::state::AppState;

/// POST /api/chat
///
/// The body is read raw and default-filled, so malformed input never yields a 4xx.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let req = ChatRequest::from_body(&body);
    let reply = relay_chat(state.llm.as_ref(), &state.config.system_prompt, &req).await?;
    Ok(Json(ChatReply { reply }))
}
