//! Agent configuration and builder utilities.
//!
//! Computes the settings an external agent runtime needs for one
//! invocation: model, resolved system prompt, sampling parameters,
//! conversation window, tools and optional remote history store.
//!
//! # Example
//! ```no_run
//! use nfl_genai_core::agent::AgentBuilder;
//! use nfl_genai_core::prompt::PromptLoader;
//!
//! let config = AgentBuilder::new()
//!     .with_personality("game_recap")
//!     .build(&PromptLoader::new("prompts"))
//!     .unwrap();
//!
//! assert!(!config.is_persistent());
//! ```

mod builder;
mod config;
mod tools;

pub use builder::AgentBuilder;
pub use config::{AgentConfig, RemoteSessionStore};
pub use tools::{AgentTool, ToolSet, BASE_TOOLS, GATEWAY_PERSONALITY};
