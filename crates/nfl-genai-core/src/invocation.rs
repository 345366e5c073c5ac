//! Invocation requests and streamed responses.
//!
//! The UI posts a JSON payload per chat turn and receives a stream of
//! [`StreamEvent`]s: `start`, any number of `token`s, optionally an `error`,
//! then `done`.

use serde::{Deserialize, Serialize};

use crate::agent::{AgentBuilder, AgentConfig};
use crate::config::AppConfig;
use crate::error::Result;
use crate::prompt::PromptLoader;
use crate::session::SessionRoute;

const DEFAULT_PROMPT: &str = "No prompt found in input...";
const DEFAULT_REQUEST_MODEL: &str = "us.amazon.nova-micro-v1:0";
const DEFAULT_REQUEST_PERSONALITY: &str = "basic";
const DEFAULT_SESSION_ID: &str = "default-session";

/// One chat turn as sent by the UI.
///
/// Missing fields take the backend defaults, which differ from the catalog
/// defaults the UI preselects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_personality")]
    pub personality: String,
    #[serde(default = "default_session_id")]
    pub session_id: String,
    #[serde(rename = "s3sessionbucket", default)]
    pub session_bucket: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_model() -> String {
    DEFAULT_REQUEST_MODEL.to_string()
}

fn default_personality() -> String {
    DEFAULT_REQUEST_PERSONALITY.to_string()
}

fn default_session_id() -> String {
    DEFAULT_SESSION_ID.to_string()
}

impl InvocationRequest {
    /// Decodes a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Conversation-store route for this request.
    pub fn route(&self) -> SessionRoute {
        SessionRoute::resolve(&self.session_id, &self.model)
    }

    /// Resolves the agent settings for this request.
    pub fn agent_config(&self, config: &AppConfig, prompts: &PromptLoader) -> Result<AgentConfig> {
        let route = self.route();
        tracing::info!(
            model = %self.model,
            personality = %self.personality,
            session = %self.session_id,
            prefix = %route.storage_prefix,
            "Resolving invocation"
        );

        AgentBuilder::from_config(config)
            .with_model(self.model.as_str())
            .with_personality(&self.personality)
            .with_remote_session(
                route.conversation_id,
                self.session_bucket.as_str(),
                route.storage_prefix,
            )
            .build(prompts)
    }
}

/// Event streamed back to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Tells the UI to reset its response area
    Start,
    /// A chunk of generated text
    Token { text: String },
    /// Generation failed; `done` still follows
    Error { message: String },
    /// Stream finished
    Done,
}

impl StreamEvent {
    pub fn token(text: impl Into<String>) -> Self {
        Self::Token { text: text.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Serializes the event as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_uses_backend_defaults() {
        let request = InvocationRequest::from_json("{}").unwrap();

        assert_eq!(request.prompt, "No prompt found in input...");
        assert_eq!(request.model, "us.amazon.nova-micro-v1:0");
        assert_eq!(request.personality, "basic");
        assert_eq!(request.session_id, "default-session");
        assert_eq!(request.session_bucket, "");
    }

    #[test]
    fn test_full_payload() {
        let request = InvocationRequest::from_json(
            r#"{
                "prompt": "Recap the last Chiefs game",
                "model": "us.anthropic.claude-sonnet-4-20250514-v1:0",
                "personality": "game_recap",
                "session_id": "alice-TravisKelce0123456789abcdefghij",
                "s3sessionbucket": "sessions"
            }"#,
        )
        .unwrap();

        assert_eq!(request.session_bucket, "sessions");
        let route = request.route();
        assert_eq!(route.user.as_deref(), Some("alice"));
        assert_eq!(route.storage_prefix, "alice/sonnet-4");
    }

    #[test]
    fn test_invalid_payload() {
        let err = InvocationRequest::from_json("[1, 2]").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_stream_event_wire_format() {
        assert_eq!(StreamEvent::Start.to_json_line().unwrap(), r#"{"type":"start"}"#);
        assert_eq!(
            StreamEvent::token("Touchdown").to_json_line().unwrap(),
            r#"{"type":"token","text":"Touchdown"}"#
        );
        assert_eq!(
            StreamEvent::error("Agent error: timeout").to_json_line().unwrap(),
            r#"{"type":"error","message":"Agent error: timeout"}"#
        );
        assert_eq!(StreamEvent::Done.to_json_line().unwrap(), r#"{"type":"done"}"#);
    }

    #[test]
    fn test_stream_event_decodes() {
        let event: StreamEvent = serde_json::from_str(r#"{"type":"token","text":"hi"}"#).unwrap();
        assert_eq!(event, StreamEvent::token("hi"));
        assert!(!event.is_terminal());
        assert!(StreamEvent::Done.is_terminal());
    }
}
