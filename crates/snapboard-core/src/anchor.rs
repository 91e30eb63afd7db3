//! Alignment anchors: single-axis snap targets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which coordinate an anchor constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Constrains x. Rendered as a vertical guide line at `x = coordinate`.
    Horizontal,
    /// Constrains y. Rendered as a horizontal guide line at `y = coordinate`.
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("x"),
            Axis::Vertical => f.write_str("y"),
        }
    }
}

/// A coordinate on one axis that item edges and centers may align to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub coordinate: f32,
    pub axis: Axis,
}

impl Anchor {
    pub const fn new(coordinate: f32, axis: Axis) -> Self {
        Self { coordinate, axis }
    }

    /// Anchor constraining x.
    pub const fn x(coordinate: f32) -> Self {
        Self::new(coordinate, Axis::Horizontal)
    }

    /// Anchor constraining y.
    pub const fn y(coordinate: f32) -> Self {
        Self::new(coordinate, Axis::Vertical)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.axis, self.coordinate)
    }
}
