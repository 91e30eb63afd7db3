//! Tactile feedback gating.
//!
//! A drag produces a snap result on every pointer move. The host should
//! pulse once when a new alignment is reached, not on every frame that
//! stays aligned.

use smallvec::SmallVec;
use snapboard_core::{Anchor, SnapResult};

#[derive(Debug, Clone, Default)]
pub struct FeedbackTracker {
    previous: SmallVec<[Anchor; 2]>,
}

impl FeedbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` and report whether it reached an alignment that the
    /// previous observation did not have.
    pub fn observe(&mut self, result: &SnapResult) -> bool {
        let pulse = result
            .snapped_anchors
            .iter()
            .any(|anchor| !self.previous.contains(anchor));
        self.previous = result.snapped_anchors.clone();
        if pulse {
            log::trace!("new alignment: {:?}", self.previous);
        }
        pulse
    }

    /// Forget the last alignment, e.g. when a drag ends.
    pub fn reset(&mut self) {
        self.previous.clear();
    }
}
