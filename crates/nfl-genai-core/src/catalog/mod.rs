//! Model and personality catalogs.
//!
//! Immutable, process-wide option tables consumed by selector UIs and by the
//! agent settings. There is no setter surface; adding an option means
//! editing `preset.rs`.
//!
//! # Module Structure
//!
//! - `model`: Catalog entry types (`ModelOption`, `PersonalityOption`)
//! - `preset`: The built-in tables, defaults, lookups and model aliases

mod model;
mod preset;

pub use model::{ModelOption, PersonalityOption};
pub use preset::{
    default_model_id, default_personality_id, find_model, find_personality, list_models,
    list_personalities, model_alias, DEFAULT_MODEL, DEFAULT_PERSONALITY, MODEL_OPTIONS,
    PERSONALITY_OPTIONS, UNKNOWN_MODEL_ALIAS,
};
