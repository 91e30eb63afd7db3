//! Axis-aligned geometry shared by the engine and the editor.
//!
//! Coordinates are canvas units with the origin at the top-left corner,
//! x growing right and y growing down.

use crate::anchor::Axis;
use serde::{Deserialize, Serialize};

/// Width and height of a canvas or an image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Translation applied to a rectangle's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// An axis-aligned rectangle. `width` and `height` are expected to be >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Leading edge along `axis` (`min_x` for horizontal, `min_y` for vertical).
    pub fn min(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.min_x(),
            Axis::Vertical => self.min_y(),
        }
    }

    pub fn mid(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.mid_x(),
            Axis::Vertical => self.mid_y(),
        }
    }

    pub fn max(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.max_x(),
            Axis::Vertical => self.max_y(),
        }
    }

    #[must_use]
    pub fn offset_by(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Inclusive point containment, edges count as inside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.max_x() && py >= self.y && py <= self.max_y()
    }
}
