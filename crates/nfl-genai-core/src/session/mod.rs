//! Session domain module.
//!
//! # Module Structure
//!
//! - `id`: Session identifier generation (`SessionId`, `generate`)
//! - `route`: Mapping a transmitted session id onto the conversation store

mod id;
mod route;

pub use id::{
    generate, generate_session_id, generate_with_rng, SessionId, MAX_PREFIX_LEN, SESSION_ID_LEN,
};
pub use route::{SessionRoute, DEFAULT_ROUTE_USER};
