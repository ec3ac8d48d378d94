// Prompt assembly for the interview relay.

use crate::models::chat::{ChatMessage, ChatRequest, SpeakerRole};

/// Per-request context message. `{role}` is replaced with the interview role.
pub const ROLE_CONTEXT_TEMPLATE: &str = "The candidate is interviewing for the role: {role}. \
This is a voice-only mock interview. Begin or continue the interview based on the conversation.";

pub fn role_context(role: &str) -> String {
    ROLE_CONTEXT_TEMPLATE.replace("{role}", role)
}

/// Builds the upstream message list: system prompt, role context, then the
/// caller's conversation in its original order.
pub fn build_messages(system_prompt: &str, req: &ChatRequest) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(req.messages.len() + 2);
    messages.push(ChatMessage::new(SpeakerRole::System, system_prompt));
    messages.push(ChatMessage::new(SpeakerRole::User, role_context(&req.role)));
    messages.extend(req.messages.iter().cloned());
    messages
}
