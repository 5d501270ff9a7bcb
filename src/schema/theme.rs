use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SchemaError;

/// Age range used when a theme does not declare one, and for books with
/// no explicit target age.
pub const DEFAULT_AGE_RANGE: &str = "5-10 años";

/// A named narrative category with a recommended age range. Read-only
/// during generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookTheme {
    pub name: String,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl BookTheme {
    /// The theme's age range, falling back to [`DEFAULT_AGE_RANGE`].
    pub fn age_range_or_default(&self) -> &str {
        self.age_range.as_deref().unwrap_or(DEFAULT_AGE_RANGE)
    }

    /// Load a theme definition from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<BookTheme, SchemaError> {
        let contents = std::fs::read_to_string(path)?;
        let theme: BookTheme = ron::from_str(&contents)?;
        Ok(theme)
    }
}
