use std::path::PathBuf;

use anyhow::{Context, Result};
use nfl_genai_core::catalog::DEFAULT_MODEL;
use nfl_genai_core::config::AppConfig;
use nfl_genai_core::prompt::{Personality, PromptLoader};

pub fn show(
    config: &AppConfig,
    personality: &str,
    model: Option<&str>,
    prompts_dir: Option<PathBuf>,
) -> Result<()> {
    let loader = PromptLoader::new(prompts_dir.unwrap_or_else(|| config.prompts_dir.clone()));
    let model = model.unwrap_or(DEFAULT_MODEL);
    let personality = Personality::parse(personality);

    tracing::debug!(
        "Resolving prompt for '{}' from {}",
        personality.label(),
        loader.prompts_dir().display()
    );

    let prompt = loader
        .system_prompt(&personality, model)
        .with_context(|| format!("Failed to resolve prompt for '{}'", personality.label()))?;
    println!("{}", prompt);

    Ok(())
}
