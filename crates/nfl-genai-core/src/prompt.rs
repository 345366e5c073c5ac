//! System prompt resolution.
//!
//! A personality either names a preset (prompt text in `<prompts_dir>/<id>.md`)
//! or is itself the prompt text. The resolved system prompt is the base prompt
//! with [`MODEL_PLACEHOLDER`] replaced by the model id, followed by a blank
//! line and the shared rules from `<prompts_dir>/rules.md`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::{PersonalityOption, find_personality};
use crate::error::{GenAiError, Result};

/// Placeholder in prompt files substituted with the active model id.
pub const MODEL_PLACEHOLDER: &str = "[current model name]";

/// Prompt file appended to every system prompt.
pub const RULES_PROMPT: &str = "rules";

const PROMPT_EXTENSION: &str = "md";

/// The personality requested for a conversation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Personality {
    /// A catalog personality with a prompt file
    Preset(PersonalityOption),
    /// Caller-supplied system prompt text
    Custom(String),
}

impl Personality {
    /// Interprets `value` as a catalog id, falling back to custom prompt text.
    pub fn parse(value: &str) -> Self {
        match find_personality(value) {
            Some(option) => Self::Preset(*option),
            None => Self::Custom(value.to_string()),
        }
    }

    /// Catalog id for presets, `None` for custom prompts.
    pub fn preset_id(&self) -> Option<&'static str> {
        match self {
            Self::Preset(option) => Some(option.id),
            Self::Custom(_) => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &str {
        match self {
            Self::Preset(option) => option.id,
            Self::Custom(_) => "custom",
        }
    }
}

/// Reads prompt files from a directory.
#[derive(Debug, Clone)]
pub struct PromptLoader {
    prompts_dir: PathBuf,
}

impl PromptLoader {
    pub fn new(prompts_dir: impl Into<PathBuf>) -> Self {
        Self {
            prompts_dir: prompts_dir.into(),
        }
    }

    pub fn prompts_dir(&self) -> &Path {
        &self.prompts_dir
    }

    /// Path of the prompt file called `name`.
    pub fn prompt_path(&self, name: &str) -> PathBuf {
        self.prompts_dir.join(format!("{}.{}", name, PROMPT_EXTENSION))
    }

    /// Loads `<prompts_dir>/<name>.md`, trimmed.
    ///
    /// # Errors
    ///
    /// `NotFound` if the file is missing, `Io` if it cannot be read.
    pub fn load(&self, name: &str) -> Result<String> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(GenAiError::invalid_input(format!(
                "Invalid prompt name '{}'",
                name
            )));
        }

        let path = self.prompt_path(name);
        if !path.exists() {
            return Err(GenAiError::not_found(
                "prompt file",
                path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            GenAiError::io(format!(
                "Error loading prompt file '{}': {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!("Loaded prompt '{}' from {}", name, path.display());

        Ok(content.trim().to_string())
    }

    /// Builds the complete system prompt for `personality` running on `model_id`.
    ///
    /// # Example
    /// ```no_run
    /// use nfl_genai_core::prompt::{Personality, PromptLoader};
    ///
    /// let loader = PromptLoader::new("prompts");
    /// let prompt = loader
    ///     .system_prompt(&Personality::parse("game_recap"), "us.amazon.nova-pro-v1:0")
    ///     .unwrap();
    /// assert!(!prompt.is_empty());
    /// ```
    pub fn system_prompt(&self, personality: &Personality, model_id: &str) -> Result<String> {
        let rules = self.load(RULES_PROMPT)?;

        let base = match personality {
            Personality::Preset(option) => self.load(option.id)?,
            Personality::Custom(text) => text.clone(),
        };

        Ok(compose_system_prompt(&base, model_id, &rules))
    }
}

/// Substitutes the model placeholder and appends the rules.
pub fn compose_system_prompt(base: &str, model_id: &str, rules: &str) -> String {
    let base = base.replace(MODEL_PLACEHOLDER, model_id);
    format!("{}\n\n{}", base, rules)
}
