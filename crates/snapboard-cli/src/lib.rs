//! Snapboard command-line tooling.
//!
//! `replay` runs a recorded drag gesture through an editing session and
//! reports every snapped frame; `picker` prints the sections a catalog
//! would show.

pub mod catalog;
pub mod replay;

pub use catalog::render_catalog;
pub use replay::{ReplayStep, Scene, render_replay, replay};
