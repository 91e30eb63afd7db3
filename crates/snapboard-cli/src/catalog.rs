//! Catalog preview.

use snapboard_picker::{Content, PickerModel};

/// Section titles with their cells, indented one level.
pub fn render_catalog(model: &PickerModel) -> String {
    model
        .sections()
        .iter()
        .flat_map(|section| {
            let header = format!("{} ({})\n", section.title, section.items.len());
            let cells = section.items.iter().map(|item| match item {
                Content::Image(url) => format!("  image {url}\n"),
                Content::Label(text) => format!("  label {text}\n"),
            });
            std::iter::once(header).chain(cells)
        })
        .collect()
}
