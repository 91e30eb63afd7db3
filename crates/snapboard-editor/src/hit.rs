//! Hit testing: point → item lookup.
//!
//! Walks the canvas front to back so the item drawn on top wins.

use snapboard_core::{Canvas, ItemId};

/// Find the topmost item at (px, py).
/// Returns `None` when the point lands on empty canvas.
pub fn hit_test(canvas: &Canvas, px: f32, py: f32) -> Option<ItemId> {
    canvas
        .items()
        .iter()
        .rev()
        .find(|item| item.frame.contains(px, py))
        .map(|item| item.id)
}
