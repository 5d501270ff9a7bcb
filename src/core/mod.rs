//! The prompt composer: four pure components over the schema types.

pub mod character_format;
pub mod emotion;
pub mod image_prompt;
pub mod narrative_prompt;

/// Treat absent and whitespace-only optional fields the same: omit them.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
