use serde::{Deserialize, Serialize};

/// One generated page: narrative prose plus the scene description the
/// text model produced for it. The image prompt builder consumes both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// 1-based; page 1 is the cover.
    pub page_number: u32,
    pub text: String,
    #[serde(default)]
    pub image_prompt: String,
}

/// A complete generated book as returned by the text model. This crate
/// only consumes it; persistence belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookContent {
    pub title: String,
    pub pages: Vec<Page>,
    #[serde(default)]
    pub target_age: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// The minimal book metadata the image prompt builder needs.
#[derive(Debug, Clone, Default)]
pub struct BookMeta {
    pub title: String,
    pub target_age: Option<String>,
    pub theme: Option<String>,
}

impl From<&BookContent> for BookMeta {
    fn from(book: &BookContent) -> Self {
        Self {
            title: book.title.clone(),
            target_age: book.target_age.clone(),
            theme: book.theme.clone(),
        }
    }
}
