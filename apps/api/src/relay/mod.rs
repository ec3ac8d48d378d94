//! Interview relay — turns a caller's conversation into one upstream completion.

pub mod handlers;
pub mod prompts;

use crate::llm_client::{ChatCompletion, LlmError};
use crate::models::chat::ChatRequest;

/// Assembles the upstream conversation and makes exactly one completion call.
pub async fn relay_chat(
    llm: &dyn ChatCompletion,
    system_prompt: &str,
    req: &ChatRequest,
) -> Result<String, LlmError> {
    let messages = prompts::build_messages(system_prompt, req);
    tracing::debug!(
        role = %req.role,
        turns = req.messages.len(),
        "Relaying interview turn"
    );
    llm.complete(&messages).await
}
