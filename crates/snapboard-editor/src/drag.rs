//! Drag tool: turns pointer events into snapped item moves.
//!
//! The tool is a two-state machine. `PointerDown` with an item selected
//! enters `Dragging`, remembering where the pointer and the item started.
//! Each `PointerMove` proposes `start frame + pointer travel`, snaps it, and
//! writes the result back to the session. `PointerUp` or `PointerCancel`
//! returns to `Idle` and hides the guides.
//!
//! Proposals are always computed from the start of the gesture, never from
//! the previous snapped frame, so an item can be dragged out of a snap.

use crate::feedback::FeedbackTracker;
use crate::guides::GuideOverlay;
use crate::input::InputEvent;
use crate::session::EditorSession;
use snapboard_core::{ItemId, Rect, Snapper};

/// What the host should do after an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum DragUpdate {
    /// Nothing changed.
    Ignored,
    /// A tap changed or cleared the selection.
    Selection(Option<ItemId>),
    /// A drag of `id` began.
    Started { id: ItemId },
    /// The dragged item moved to `frame`.
    Moved {
        id: ItemId,
        frame: Rect,
        guides: GuideOverlay,
        /// Fire a tactile pulse: a new alignment was just reached.
        pulse: bool,
    },
    /// The drag is over. `guides` is always hidden.
    Ended { id: ItemId, guides: GuideOverlay },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        id: ItemId,
        start_pointer: (f32, f32),
        start_frame: Rect,
    },
}

pub struct DragTool {
    state: DragState,
    feedback: FeedbackTracker,
}

impl Default for DragTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTool {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            feedback: FeedbackTracker::new(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Handle one input event against `session`.
    pub fn handle<S: Snapper>(
        &mut self,
        event: &InputEvent,
        session: &mut EditorSession<S>,
    ) -> DragUpdate {
        match *event {
            InputEvent::Tap { x, y } => {
                if self.is_dragging() {
                    return DragUpdate::Ignored;
                }
                DragUpdate::Selection(session.tap(x, y))
            }
            InputEvent::PointerDown { x, y } => {
                let Some(id) = session.selected() else {
                    return DragUpdate::Ignored;
                };
                let Some(start_frame) = session.frame_of(id) else {
                    return DragUpdate::Ignored;
                };
                self.state = DragState::Dragging {
                    id,
                    start_pointer: (x, y),
                    start_frame,
                };
                self.feedback.reset();
                log::debug!("drag start {id} at ({x}, {y})");
                DragUpdate::Started { id }
            }
            InputEvent::PointerMove { x, y } => {
                let DragState::Dragging {
                    id,
                    start_pointer,
                    start_frame,
                } = self.state
                else {
                    return DragUpdate::Ignored;
                };
                let proposed = start_frame.offset_by(x - start_pointer.0, y - start_pointer.1);
                let snapped = session.snap_frame(proposed);
                if !session.set_frame(id, snapped.frame) {
                    // Item vanished mid-drag.
                    return self.finish();
                }
                let guides = GuideOverlay::from_snap(&snapped.result, session.canvas().size);
                let pulse = self.feedback.observe(&snapped.result);
                DragUpdate::Moved {
                    id,
                    frame: snapped.frame,
                    guides,
                    pulse,
                }
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerCancel => self.finish(),
        }
    }

    fn finish(&mut self) -> DragUpdate {
        let previous = std::mem::replace(&mut self.state, DragState::Idle);
        self.feedback.reset();
        match previous {
            DragState::Dragging { id, .. } => {
                log::debug!("drag end {id}");
                DragUpdate::Ended {
                    id,
                    guides: GuideOverlay::hidden(),
                }
            }
            DragState::Idle => DragUpdate::Ignored,
        }
    }
}
