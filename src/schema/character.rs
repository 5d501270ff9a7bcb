use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SchemaError;

/// The kind of story participant a character is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterType {
    Child,
    Toy,
    Pet,
    Fantasy,
    Other,
}

impl Default for CharacterType {
    fn default() -> Self {
        Self::Child
    }
}

impl CharacterType {
    /// Spanish display label used inside generated prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Child => "niño",
            Self::Toy => "juguete",
            Self::Pet => "mascota",
            Self::Fantasy => "criatura fantástica",
            Self::Other => "personaje",
        }
    }

    /// True for types whose age reads as "de N años" in image prompts.
    pub fn is_person(&self) -> bool {
        matches!(self, Self::Child)
    }
}

/// A persisted story participant: a child, a toy, a pet, or an invented
/// creature. Owned by a user and reused across books, so prompt building
/// never mutates it.
///
/// `favorites` stays as raw JSON because upstream clients send it either
/// as an object or as a serialized JSON string; see [`parse_favorites`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    // Serialized as "type" for upstream clients; RON fixtures use the
    // "character_type" alias because `type` is a keyword there.
    #[serde(default, rename = "type", alias = "character_type")]
    pub character_type: CharacterType,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub physical_description: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub likes: Option<String>,
    #[serde(default)]
    pub dislikes: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub favorites: Option<serde_json::Value>,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl Character {
    /// The key used to look this character up in request-scoped
    /// `character_details` maps: the persisted id when present, the name
    /// otherwise.
    pub fn lookup_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// Story-specific fields supplied for one generation request. Kept apart
/// from [`Character`] so ephemeral per-request data is never persisted
/// with the entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterStoryDetails {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub abilities: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub relation_to_main: Option<String>,
}

/// A character viewed through one generation request: the persisted base
/// plus an optional request-scoped overlay. Explicit composition — the
/// base is borrowed, never copied into or mutated.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedCharacter<'a> {
    pub base: &'a Character,
    pub story: Option<&'a CharacterStoryDetails>,
}

impl<'a> ExtendedCharacter<'a> {
    /// A character with no story overlay.
    pub fn plain(base: &'a Character) -> Self {
        Self { base, story: None }
    }

    /// A character with a story overlay attached.
    pub fn with_story(base: &'a Character, story: &'a CharacterStoryDetails) -> Self {
        Self {
            base,
            story: Some(story),
        }
    }
}

/// Parse the `favorites` field into ordered `(category, value)` pairs.
///
/// Accepts either a JSON object or a string containing serialized JSON.
/// Scalar values are stringified; entries with empty keys or values are
/// dropped. Returns `None` when the field is missing, unparseable, not an
/// object, or empty after filtering — callers omit the favorites line in
/// that case rather than failing the whole prompt.
pub fn parse_favorites(favorites: Option<&serde_json::Value>) -> Option<Vec<(String, String)>> {
    let object = match favorites? {
        serde_json::Value::Object(map) => map.clone(),
        serde_json::Value::String(raw) => match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return None,
        },
        _ => return None,
    };

    let pairs: Vec<(String, String)> = object
        .into_iter()
        .filter_map(|(category, value)| {
            let rendered = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            if category.trim().is_empty() || rendered.trim().is_empty() {
                None
            } else {
                Some((category, rendered))
            }
        })
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

/// Load a cast (a RON list of characters) from a file. The first entry is
/// the main character by convention.
pub fn load_cast_from_ron(path: &Path) -> Result<Vec<Character>, SchemaError> {
    let contents = std::fs::read_to_string(path)?;
    let cast: Vec<Character> = ron::from_str(&contents)?;
    Ok(cast)
}
