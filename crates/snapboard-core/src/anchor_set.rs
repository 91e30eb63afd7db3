//! Derivation of snap targets from the canvas and the items on it.

use crate::anchor::{Anchor, Axis};
use crate::geometry::Rect;

/// Build the candidate anchors for dragging one item.
///
/// `others` must exclude the item being dragged and any guide overlays.
/// The output lists every x anchor before any y anchor: canvas min, mid,
/// max first, then the min, mid, max of each other rect in iteration order.
/// Duplicate coordinates are kept.
pub fn build_anchors<'a>(canvas: &Rect, others: impl IntoIterator<Item = &'a Rect>) -> Vec<Anchor> {
    let others: Vec<&Rect> = others.into_iter().collect();
    let mut anchors = Vec::with_capacity((others.len() + 1) * 6);

    for axis in Axis::ALL {
        for rect in std::iter::once(canvas).chain(others.iter().copied()) {
            anchors.extend(
                [rect.min(axis), rect.mid(axis), rect.max(axis)]
                    .map(|coordinate| Anchor::new(coordinate, axis)),
            );
        }
    }

    log::debug!(
        "built {} anchors from canvas and {} items",
        anchors.len(),
        others.len()
    );
    anchors
}
