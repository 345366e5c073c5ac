//! Catalog entry models.
//!
//! Both catalogs hold the same identifier/name/description triple; the `id`
//! is the value actually sent to the inference backend.

use serde::Serialize;

/// A selectable generative model.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    /// Backend model identifier
    pub id: &'static str,
    /// Display name shown in the model selector
    pub name: &'static str,
    /// One-line description of the model's strengths
    pub description: &'static str,
}

/// A selectable assistant personality (behavior preset).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityOption {
    /// Personality identifier, also the name of its prompt file
    pub id: &'static str,
    /// Display name shown in the personality selector
    pub name: &'static str,
    /// One-line description of the personality
    pub description: &'static str,
}
