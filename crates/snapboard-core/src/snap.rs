//! Snapping engine.
//!
//! Given a proposed rectangle and a set of anchors, find how far to nudge the
//! rectangle so one of its edges or its center lands exactly on the nearest
//! anchor within a threshold. The two axes are resolved independently.
//!
//! ## Candidate order
//!
//! For each axis the candidates are enumerated anchor by anchor, in input
//! order, and for each anchor feature by feature: leading edge, trailing
//! edge, center. The first candidate with the smallest absolute distance
//! wins, so equal-distance ties always resolve the same way.

use crate::anchor::{Anchor, Axis};
use crate::geometry::{Offset, Rect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Outcome of a snap query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapResult {
    /// Offset to add to the proposed rectangle's origin.
    pub delta: Offset,
    /// Anchors the delta aligns to: at most one per axis, horizontal first.
    pub snapped_anchors: SmallVec<[Anchor; 2]>,
}

impl SnapResult {
    /// A result that leaves the rectangle untouched and reports no guides.
    pub fn none() -> Self {
        Self::default()
    }

    /// The anchor used on `axis`, if that axis snapped.
    pub fn anchor_for(&self, axis: Axis) -> Option<Anchor> {
        self.snapped_anchors.iter().copied().find(|a| a.axis == axis)
    }

    pub fn is_snapped(&self) -> bool {
        !self.snapped_anchors.is_empty()
    }

    /// Apply the delta to `rect`.
    #[must_use]
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.offset_by(self.delta.dx, self.delta.dy)
    }
}

/// A snapping strategy.
///
/// Implementations must be pure: identical inputs give identical results.
pub trait Snapper {
    fn calculate_snap(&self, proposed: &Rect, anchors: &[Anchor], threshold: f32) -> SnapResult;
}

impl<S: Snapper + ?Sized> Snapper for &S {
    fn calculate_snap(&self, proposed: &Rect, anchors: &[Anchor], threshold: f32) -> SnapResult {
        (**self).calculate_snap(proposed, anchors, threshold)
    }
}

impl<S: Snapper + ?Sized> Snapper for Box<S> {
    fn calculate_snap(&self, proposed: &Rect, anchors: &[Anchor], threshold: f32) -> SnapResult {
        (**self).calculate_snap(proposed, anchors, threshold)
    }
}

/// Edge and center snapping, each axis on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisSnapper;

impl Snapper for AxisSnapper {
    fn calculate_snap(&self, proposed: &Rect, anchors: &[Anchor], threshold: f32) -> SnapResult {
        calculate_snap(proposed, anchors, threshold)
    }
}

/// Closest anchor on one axis and the signed distance that reaches it.
#[derive(Debug, Clone, Copy)]
struct AxisMatch {
    anchor: Anchor,
    delta: f32,
}

/// Snap `proposed` against `anchors` using edge and center alignment.
///
/// Never fails: an empty anchor set, or one with nothing within `threshold`,
/// yields a zero delta and no anchors. A negative or NaN threshold disables
/// snapping.
pub fn calculate_snap(proposed: &Rect, anchors: &[Anchor], threshold: f32) -> SnapResult {
    if threshold.is_nan() || threshold < 0.0 {
        log::warn!("snap threshold must be non-negative, got {threshold}; snapping disabled");
        return SnapResult::none();
    }

    let mut result = SnapResult::none();
    for axis in Axis::ALL {
        let Some(found) = closest_on_axis(proposed, anchors, axis) else {
            continue;
        };
        if found.delta.abs() > threshold {
            log::trace!(
                "no {axis} snap: nearest {} is {} away (threshold {threshold})",
                found.anchor,
                found.delta.abs()
            );
            continue;
        }
        match axis {
            Axis::Horizontal => result.delta.dx = found.delta,
            Axis::Vertical => result.delta.dy = found.delta,
        }
        log::trace!("{axis} snapped to {} by {}", found.anchor, found.delta);
        result.snapped_anchors.push(found.anchor);
    }
    result
}

fn closest_on_axis(rect: &Rect, anchors: &[Anchor], axis: Axis) -> Option<AxisMatch> {
    let features = [rect.min(axis), rect.max(axis), rect.mid(axis)];
    let mut best: Option<AxisMatch> = None;

    for anchor in anchors.iter().filter(|a| a.axis == axis) {
        for feature in features {
            let delta = anchor.coordinate - feature;
            if delta.is_nan() {
                continue;
            }
            // Strict comparison: on ties the earlier candidate stays.
            if best.is_none_or(|b| delta.abs() < b.delta.abs()) {
                best = Some(AxisMatch {
                    anchor: *anchor,
                    delta,
                });
            }
        }
    }
    best
}
