//! Overlay picker for Snapboard.
//!
//! Loads overlay categories from an [`OverlaySource`] and arranges them
//! into the sections a picker grid shows, with "+N" overflow labels.

pub mod catalog;
pub mod error;
pub mod picker;
pub mod source;

pub use catalog::{CatalogItem, Category, parse_catalog};
pub use error::PickerError;
pub use picker::{Content, NavigationAction, PickerConfig, PickerModel, Section};
pub use source::{FileOverlaySource, OverlaySource, StaticOverlaySource};
