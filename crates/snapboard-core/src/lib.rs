pub mod anchor;
pub mod anchor_set;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;
pub mod model;
pub mod snap;

pub use anchor::{Anchor, Axis};
pub use anchor_set::build_anchors;
pub use config::EditorConfig;
pub use error::ConfigError;
pub use geometry::{Offset, Rect, Size};
pub use id::ItemId;
pub use model::{Canvas, CanvasItem};
pub use snap::{AxisSnapper, SnapResult, Snapper, calculate_snap};
