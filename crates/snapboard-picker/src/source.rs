//! Where overlay categories come from.
//!
//! The picker never performs I/O itself; hosts hand it an [`OverlaySource`].

use crate::catalog::{Category, parse_catalog};
use crate::error::PickerError;
use std::path::PathBuf;

// ─── Source Trait ────────────────────────────────────────────────────────

/// Provides the overlay categories to show in the picker.
pub trait OverlaySource {
    /// # Errors
    /// The catalog could not be read or decoded.
    fn fetch_overlays(&self) -> Result<Vec<Category>, PickerError>;
}

// ─── Implementations ─────────────────────────────────────────────────────

/// An in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticOverlaySource {
    categories: Vec<Category>,
}

impl StaticOverlaySource {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl OverlaySource for StaticOverlaySource {
    fn fetch_overlays(&self) -> Result<Vec<Category>, PickerError> {
        Ok(self.categories.clone())
    }
}

/// A JSON catalog file on disk, read on every fetch.
#[derive(Debug, Clone)]
pub struct FileOverlaySource {
    path: PathBuf,
}

impl FileOverlaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OverlaySource for FileOverlaySource {
    fn fetch_overlays(&self) -> Result<Vec<Category>, PickerError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| PickerError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        parse_catalog(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_its_categories() {
        let source = StaticOverlaySource::new(vec![Category::new("Shapes", ["circle.png"])]);
        let fetched = source.fetch_overlays().unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].title, "Shapes");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = FileOverlaySource::new("/nonexistent/snapboard/catalog.json");
        let err = source.fetch_overlays().unwrap_err();
        assert!(matches!(err, PickerError::Io { .. }));
        assert!(err.to_string().contains("catalog.json"));
    }
}
