//! Built-in model and personality catalogs.
//!
//! Declaration order is display order. Entries are only ever appended.

use super::model::{ModelOption, PersonalityOption};

/// Model preselected when the user has not picked one.
pub const DEFAULT_MODEL: &str = "us.amazon.nova-pro-v1:0";

/// Personality preselected when the user has not picked one.
pub const DEFAULT_PERSONALITY: &str = "game_recap";

/// Alias used in storage prefixes for models missing from [`MODEL_ALIASES`].
pub const UNKNOWN_MODEL_ALIAS: &str = "unknown-model";

pub const MODEL_OPTIONS: &[ModelOption] = &[
    ModelOption {
        id: "us.amazon.nova-micro-v1:0",
        name: "Amazon Nova Micro",
        description: "Fast and efficient for simple tasks",
    },
    ModelOption {
        id: "us.amazon.nova-pro-v1:0",
        name: "Amazon Nova Pro",
        description: "Balanced performance and capability",
    },
    ModelOption {
        id: "us.amazon.nova-premier-v1:0",
        name: "Amazon Nova Premier",
        description: "Most capable Nova model",
    },
    ModelOption {
        id: "us.anthropic.claude-3-5-haiku-20241022-v1:0",
        name: "Claude Haiku 3.5",
        description: "Quick advanced reasoning and analysis",
    },
    ModelOption {
        id: "us.anthropic.claude-sonnet-4-20250514-v1:0",
        name: "Claude Sonnet 4",
        description: "Advanced reasoning and analysis",
    },
];

pub const PERSONALITY_OPTIONS: &[PersonalityOption] = &[
    PersonalityOption {
        id: "game_recap",
        name: "Game Recap Expert",
        description: "Specializes in creating detailed game recaps and summaries",
    },
    PersonalityOption {
        id: "nfl_stats",
        name: "NFL Stats Analyst",
        description: "Deep statistical knowledge with access to NFL knowledge base",
    },
];

/// Short model names used in conversation-store prefixes.
const MODEL_ALIASES: &[(&str, &str)] = &[
    ("us.amazon.nova-micro-v1:0", "nova-micro"),
    ("us.amazon.nova-pro-v1:0", "nova-pro"),
    ("us.amazon.nova-premier-v1:0", "nova-premier"),
    ("us.anthropic.claude-3-5-haiku-20241022-v1:0", "haiku-3-5"),
    ("us.anthropic.claude-sonnet-4-20250514-v1:0", "sonnet-4"),
];

/// Returns all selectable models in display order.
pub fn list_models() -> &'static [ModelOption] {
    MODEL_OPTIONS
}

/// Returns all selectable personalities in display order.
pub fn list_personalities() -> &'static [PersonalityOption] {
    PERSONALITY_OPTIONS
}

pub fn default_model_id() -> &'static str {
    DEFAULT_MODEL
}

pub fn default_personality_id() -> &'static str {
    DEFAULT_PERSONALITY
}

/// Looks up a model by backend identifier.
pub fn find_model(id: &str) -> Option<&'static ModelOption> {
    MODEL_OPTIONS.iter().find(|m| m.id == id)
}

/// Looks up a personality by identifier.
pub fn find_personality(id: &str) -> Option<&'static PersonalityOption> {
    PERSONALITY_OPTIONS.iter().find(|p| p.id == id)
}

/// Returns the storage alias for `model_id`, or [`UNKNOWN_MODEL_ALIAS`].
pub fn model_alias(model_id: &str) -> &'static str {
    MODEL_ALIASES
        .iter()
        .find(|(id, _)| *id == model_id)
        .map(|(_, alias)| *alias)
        .unwrap_or(UNKNOWN_MODEL_ALIAS)
}
