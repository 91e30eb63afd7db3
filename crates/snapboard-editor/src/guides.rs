//! Alignment guide lines shown while an item is snapped.
//!
//! An x anchor becomes a vertical line across the full canvas height; a y
//! anchor becomes a horizontal line across the full canvas width.

use serde::{Deserialize, Serialize};
use snapboard_core::{Anchor, Axis, Rect, SnapResult, Size};

/// A full-length guide line at an anchor's coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    /// Axis of the anchor this line visualizes.
    pub axis: Axis,
    /// x for vertical lines, y for horizontal lines.
    pub position: f32,
    /// Canvas extent the line spans.
    pub length: f32,
}

impl GuideLine {
    pub fn for_anchor(anchor: Anchor, canvas: Size) -> Self {
        let length = match anchor.axis {
            Axis::Horizontal => canvas.height,
            Axis::Vertical => canvas.width,
        };
        Self {
            axis: anchor.axis,
            position: anchor.coordinate,
            length,
        }
    }

    /// Start and end points in canvas coordinates.
    pub fn endpoints(&self) -> ((f32, f32), (f32, f32)) {
        match self.axis {
            Axis::Horizontal => ((self.position, 0.0), (self.position, self.length)),
            Axis::Vertical => ((0.0, self.position), (self.length, self.position)),
        }
    }

    /// The line as a thin rectangle, for hosts that draw guides as views.
    pub fn frame(&self, thickness: f32) -> Rect {
        match self.axis {
            Axis::Horizontal => Rect::new(self.position, 0.0, thickness, self.length),
            Axis::Vertical => Rect::new(0.0, self.position, self.length, thickness),
        }
    }
}

/// The pair of guide lines the renderer should currently show.
/// `None` means that line is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideOverlay {
    /// Vertical line, from an x anchor.
    pub vertical: Option<GuideLine>,
    /// Horizontal line, from a y anchor.
    pub horizontal: Option<GuideLine>,
}

impl GuideOverlay {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn from_snap(result: &SnapResult, canvas: Size) -> Self {
        Self {
            vertical: result
                .anchor_for(Axis::Horizontal)
                .map(|a| GuideLine::for_anchor(a, canvas)),
            horizontal: result
                .anchor_for(Axis::Vertical)
                .map(|a| GuideLine::for_anchor(a, canvas)),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }

    /// Visible lines, vertical first.
    pub fn lines(&self) -> impl Iterator<Item = &GuideLine> {
        self.vertical.iter().chain(self.horizontal.iter())
    }
}
