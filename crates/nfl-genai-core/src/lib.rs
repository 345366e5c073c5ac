//! NFL GenAI core library.
//!
//! Session identifiers, the model/personality catalogs, and the agent
//! settings resolved for each chat invocation. Inference, authentication and
//! conversation storage are performed by external services that consume
//! the values computed here.

pub mod agent;
pub mod catalog;
pub mod config;
pub mod error;
pub mod invocation;
pub mod prompt;
pub mod session;
pub mod time;

// Re-export common types
pub use error::{GenAiError, Result};
pub use session::{generate_session_id, SessionId};
