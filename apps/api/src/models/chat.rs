use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Interview role used when the caller does not name one.
pub const DEFAULT_INTERVIEW_ROLE: &str = "software engineer";

/// Speaker of a single conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    User,
    Assistant,
    System,
}

impl SpeakerRole {
    /// Maps a free-form label onto a speaker. Anything unrecognized is `User`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("assistant") => SpeakerRole::Assistant,
            Some("system") => SpeakerRole::System,
            _ => SpeakerRole::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: SpeakerRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: SpeakerRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Inbound body of `POST /api/chat`, after default-filling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    /// Interview role label, e.g. "data scientist". Never empty.
    pub role: String,
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            role: DEFAULT_INTERVIEW_ROLE.to_string(),
        }
    }
}

impl ChatRequest {
    /// Parses a request body without ever rejecting it.
    ///
    /// Bodies that are not JSON objects collapse to the defaults. Within
    /// `messages`, non-object entries are skipped, unknown speaker roles become
    /// `user`, and missing content becomes the empty string.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let role = obj
            .get("role")
            .and_then(Value::as_str)
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_INTERVIEW_ROLE)
            .to_string();

        let messages = obj
            .get("messages")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(message_from_value).collect())
            .unwrap_or_default();

        Self { messages, role }
    }
}

fn message_from_value(value: &Value) -> Option<ChatMessage> {
    let obj = value.as_object()?;
    let role = SpeakerRole::from_label(obj.get("role").and_then(Value::as_str));
    let content = match obj.get("content") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Some(ChatMessage { role, content })
}

/// Successful body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
