use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the symptom-chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Hospital summary injected into the system prompt.
///
/// Deserializes from the cached facility JSON; only the fields the prompt
/// needs are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// Last known user position, forwarded with the request for context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-conversation state: the active language and the append-only message
/// sequence.
///
/// There is no ambient language global; a session value is threaded through
/// the components that need it. Switching language resets the transcript to
/// the localized greeting.
#[derive(Debug, Clone)]
pub struct ChatSession {
    language: String,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(language: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Switch the active language, discarding the transcript.
    pub fn set_language(&mut self, language: impl Into<String>, greeting: impl Into<String>) {
        self.language = language.into();
        self.messages = vec![ChatMessage::assistant(greeting)];
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }
}
