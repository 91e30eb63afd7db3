//! Overlay catalog: named categories of image URLs.

use crate::error::PickerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl Category {
    pub fn new(title: impl Into<String>, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            title: title.into(),
            items: urls
                .into_iter()
                .map(|url| CatalogItem {
                    source_url: url.into(),
                })
                .collect(),
        }
    }
}

/// Decode a JSON array of categories.
///
/// # Errors
/// Malformed JSON or a category without a `title`.
pub fn parse_catalog(text: &str) -> Result<Vec<Category>, PickerError> {
    let categories: Vec<Category> = serde_json::from_str(text)?;
    log::debug!("parsed catalog with {} categories", categories.len());
    Ok(categories)
}
