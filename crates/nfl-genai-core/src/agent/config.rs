//! Agent configuration structures.

use serde::Serialize;

use super::tools::ToolSet;
use crate::config::GenerationSettings;
use crate::prompt::Personality;

/// Remote conversation store used to persist history across invocations.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteSessionStore {
    /// Conversation key inside the store
    pub session_id: String,
    pub bucket: String,
    /// Key prefix, `<user>/<model alias>`
    pub prefix: String,
    pub region: String,
}

impl RemoteSessionStore {
    /// Returns a store only when session id, bucket and prefix are all non-empty.
    ///
    /// # Example
    /// ```
    /// use nfl_genai_core::agent::RemoteSessionStore;
    ///
    /// assert!(RemoteSessionStore::new("abc", "bucket", "alice/nova-pro", "us-east-1").is_some());
    /// assert!(RemoteSessionStore::new("abc", "", "alice/nova-pro", "us-east-1").is_none());
    /// ```
    pub fn new(
        session_id: impl Into<String>,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        region: impl Into<String>,
    ) -> Option<Self> {
        let session_id = session_id.into();
        let bucket = bucket.into();
        let prefix = prefix.into();
        if session_id.is_empty() || bucket.is_empty() || prefix.is_empty() {
            return None;
        }
        Some(Self {
            session_id,
            bucket,
            prefix,
            region: region.into(),
        })
    }
}

/// Everything needed to instantiate an agent for one invocation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Backend model identifier
    pub model_id: String,
    pub personality: Personality,
    /// Fully resolved system prompt
    pub system_prompt: String,
    pub generation: GenerationSettings,
    /// Sliding conversation window, in messages
    pub window_size: usize,
    pub tools: ToolSet,
    /// `None` keeps history in the sliding window only
    pub session_store: Option<RemoteSessionStore>,
}

impl AgentConfig {
    /// Whether history survives beyond this process.
    pub fn is_persistent(&self) -> bool {
        self.session_store.is_some()
    }
}
