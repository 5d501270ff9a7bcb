use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::character::CharacterStoryDetails;

/// Request-scoped narrative preferences for one generation call. Nothing
/// here is persisted with the characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryDetails {
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub setting: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub specific_elements: Vec<String>,
    /// Keyed by [`Character::lookup_key`](super::character::Character::lookup_key).
    #[serde(default)]
    pub character_details: HashMap<String, CharacterStoryDetails>,
}
