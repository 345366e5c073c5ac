use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nfl_genai_core::config::AppConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "nfl-genai")]
#[command(about = "NFL GenAI CLI - session ids, model catalogs and agent settings", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a session identifier for a display name
    SessionId {
        /// User display name used as the identifier prefix
        name: String,
        /// Seed the generator for a reproducible identifier
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List selectable models
    Models {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List selectable personalities
    Personalities {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved system prompt
    Prompt {
        /// Catalog personality id or custom prompt text
        #[arg(long)]
        personality: String,
        /// Model id substituted into the prompt
        #[arg(long)]
        model: Option<String>,
        /// Override the configured prompts directory
        #[arg(long)]
        prompts_dir: Option<PathBuf>,
    },
    /// Resolve an invocation payload into agent settings
    Resolve {
        /// JSON payload file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Override the configured prompts directory
        #[arg(long)]
        prompts_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.log_level);

    match cli.command {
        Commands::SessionId { name, seed } => commands::session::generate(&name, seed)?,
        Commands::Models { json } => commands::catalog::models(json)?,
        Commands::Personalities { json } => commands::catalog::personalities(json)?,
        Commands::Prompt {
            personality,
            model,
            prompts_dir,
        } => commands::prompt::show(&config, &personality, model.as_deref(), prompts_dir)?,
        Commands::Resolve { file, prompts_dir } => {
            commands::resolve::run(&config, file.as_deref(), prompts_dir)?
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => AppConfig::load().context("Failed to load config"),
    }
}

/// Logs go to stderr so command output on stdout stays pipeable.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
