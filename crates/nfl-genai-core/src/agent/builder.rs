//! Fluent API builder for agent configurations.

use super::config::{AgentConfig, RemoteSessionStore};
use super::tools::ToolSet;
use crate::catalog::{DEFAULT_MODEL, DEFAULT_PERSONALITY};
use crate::config::{AppConfig, GenerationSettings, StorageSettings};
use crate::error::Result;
use crate::prompt::{Personality, PromptLoader};

/// Fluent builder for [`AgentConfig`].
///
/// Unset values fall back to the catalog defaults and the built-in
/// generation settings.
///
/// # Example
/// ```no_run
/// use nfl_genai_core::agent::AgentBuilder;
/// use nfl_genai_core::prompt::PromptLoader;
///
/// let config = AgentBuilder::new()
///     .with_model("us.amazon.nova-micro-v1:0")
///     .with_personality("nfl_stats")
///     .build(&PromptLoader::new("prompts"))
///     .unwrap();
///
/// assert_eq!(config.tools.names().last(), Some(&"nfl_kb_search"));
/// ```
#[derive(Debug, Clone)]
pub struct AgentBuilder {
    model_id: String,
    personality: Personality,
    generation: GenerationSettings,
    window_size: usize,
    storage: StorageSettings,
    remote: Option<(String, String, String)>,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AgentBuilder {
    /// Creates a builder with built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model_id: DEFAULT_MODEL.to_string(),
            personality: Personality::parse(DEFAULT_PERSONALITY),
            generation: config.generation,
            window_size: config.conversation.window_size,
            storage: config.storage.clone(),
            remote: None,
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Sets the personality: a catalog id or custom prompt text.
    pub fn with_personality(mut self, personality: &str) -> Self {
        self.personality = Personality::parse(personality);
        self
    }

    pub fn with_generation(mut self, generation: GenerationSettings) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.storage.region = region.into();
        self
    }

    /// Persists history in the remote store.
    ///
    /// An empty `bucket` falls back to the configured default bucket. The
    /// store is only used if session id, bucket and prefix end up non-empty.
    pub fn with_remote_session(
        mut self,
        session_id: impl Into<String>,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        self.remote = Some((session_id.into(), bucket.into(), prefix.into()));
        self
    }

    /// Resolves the system prompt and builds the final AgentConfig.
    ///
    /// # Errors
    ///
    /// Fails if a required prompt file cannot be loaded.
    pub fn build(self, prompts: &PromptLoader) -> Result<AgentConfig> {
        let system_prompt = prompts.system_prompt(&self.personality, &self.model_id)?;
        let tools = ToolSet::for_personality(&self.personality);

        let session_store = match self.remote {
            Some((session_id, bucket, prefix)) => {
                let bucket = if bucket.is_empty() {
                    self.storage.bucket.clone().unwrap_or_default()
                } else {
                    bucket
                };
                let store =
                    RemoteSessionStore::new(session_id, bucket, prefix, self.storage.region);
                if store.is_none() {
                    tracing::debug!(
                        "Incomplete remote session settings, using sliding window only"
                    );
                }
                store
            }
            None => None,
        };

        Ok(AgentConfig {
            model_id: self.model_id,
            personality: self.personality,
            system_prompt,
            generation: self.generation,
            window_size: self.window_size,
            tools,
            session_store,
        })
    }
}
