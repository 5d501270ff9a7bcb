//! Plain data shapes consumed by the prompt composer.

pub mod book;
pub mod character;
pub mod story;
pub mod theme;

use thiserror::Error;

/// Errors from loading schema data files. The prompt-composition functions
/// themselves are total and never fail; only file loading is fallible.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}
