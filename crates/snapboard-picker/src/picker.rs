//! Picker view model.
//!
//! Turns overlay categories into grid sections. With several categories
//! on screen each section is a short preview whose last cell links to the
//! full category; a single category is shown in full.

use crate::catalog::Category;
use crate::error::PickerError;
use crate::source::OverlaySource;
use serde::{Deserialize, Serialize};

// ─── Config ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Cells per section when more than one category is shown, including
    /// the overflow label. Default: **12**.
    pub preview_limit: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self { preview_limit: 12 }
    }
}

impl PickerConfig {
    /// # Errors
    /// `preview_limit` is zero.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.preview_limit == 0 {
            return Err(PickerError::Invalid {
                field: "preview_limit",
                reason: "expected at least one cell per section".into(),
            });
        }
        Ok(())
    }
}

// ─── Sections ────────────────────────────────────────────────────────────

/// One cell of a picker section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// An overlay image, by source URL.
    Image(String),
    /// Overflow cell, e.g. `"+4"`.
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<Content>,
}

/// What the host should present after a cell is chosen.
///
/// `I` is the host's decoded image type; the picker only passes it through.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction<I> {
    /// Add the chosen image to the canvas.
    ShowImage(I),
    /// Open a picker scoped to one category.
    ShowCategory(PickerModel),
}

// ─── Model ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PickerModel {
    categories: Vec<Category>,
    config: PickerConfig,
    sections: Vec<Section>,
}

impl PickerModel {
    pub fn new(categories: Vec<Category>, config: PickerConfig) -> Self {
        let sections = build_sections(&categories, config);
        Self {
            categories,
            config,
            sections,
        }
    }

    /// Fetch categories from `source` and build the model.
    ///
    /// # Errors
    /// Invalid `config`, or the source failed.
    pub fn load(source: &dyn OverlaySource, config: PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;
        let categories = source.fetch_overlays()?;
        Ok(Self::new(categories, config))
    }

    /// A picker showing only `category`, untruncated.
    pub fn for_category(category: Category, config: PickerConfig) -> Self {
        Self::new(vec![category], config)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve a tap on cell `item` of `section`.
    ///
    /// Image cells need the host's loaded image and yield `None` without
    /// one. Label cells open the section's full category. Out-of-range
    /// indices yield `None`.
    pub fn navigation_action<I>(
        &self,
        section: usize,
        item: usize,
        selected_image: Option<I>,
    ) -> Option<NavigationAction<I>> {
        let content = self.sections.get(section)?.items.get(item)?;
        match content {
            Content::Image(_) => selected_image.map(NavigationAction::ShowImage),
            Content::Label(_) => {
                let category = self.categories.get(section)?.clone();
                log::debug!("opening category {:?}", category.title);
                Some(NavigationAction::ShowCategory(Self::for_category(
                    category,
                    self.config,
                )))
            }
        }
    }
}

fn build_sections(categories: &[Category], config: PickerConfig) -> Vec<Section> {
    let limit = if categories.len() > 1 {
        config.preview_limit.max(1)
    } else {
        usize::MAX
    };

    categories
        .iter()
        .map(|category| {
            let count = category.items.len();
            let mut items: Vec<Content> = category
                .items
                .iter()
                .take(limit)
                .map(|item| Content::Image(item.source_url.clone()))
                .collect();
            if count > limit {
                items[limit - 1] = Content::Label(format!("+{}", count - limit + 1));
            }
            Section {
                title: category.title.clone(),
                items,
            }
        })
        .collect()
}
