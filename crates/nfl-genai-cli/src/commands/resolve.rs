use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nfl_genai_core::agent::AgentConfig;
use nfl_genai_core::config::AppConfig;
use nfl_genai_core::invocation::InvocationRequest;
use nfl_genai_core::prompt::PromptLoader;
use nfl_genai_core::session::SessionRoute;
use serde::Serialize;

/// What the agent runtime would be started with.
#[derive(Serialize)]
struct ResolvedInvocation {
    prompt: String,
    route: SessionRoute,
    agent: AgentConfig,
}

pub fn run(config: &AppConfig, file: Option<&Path>, prompts_dir: Option<PathBuf>) -> Result<()> {
    let payload = read_payload(file)?;
    let request = InvocationRequest::from_json(&payload).context("Invalid invocation payload")?;

    let loader = PromptLoader::new(prompts_dir.unwrap_or_else(|| config.prompts_dir.clone()));
    let agent = request
        .agent_config(config, &loader)
        .context("Failed to resolve agent settings")?;

    if !agent.is_persistent() {
        tracing::warn!("No session bucket configured, history will not be persisted");
    }

    let resolved = ResolvedInvocation {
        route: request.route(),
        prompt: request.prompt,
        agent,
    };
    println!("{}", serde_json::to_string_pretty(&resolved)?);

    Ok(())
}

fn read_payload(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("Failed to read payload from stdin")?;
            Ok(payload)
        }
    }
}
