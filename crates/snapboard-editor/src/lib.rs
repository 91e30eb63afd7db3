pub mod drag;
pub mod feedback;
pub mod guides;
pub mod hit;
pub mod input;
pub mod session;

pub use drag::{DragTool, DragUpdate};
pub use feedback::FeedbackTracker;
pub use guides::{GuideLine, GuideOverlay};
pub use input::InputEvent;
pub use session::{EditorSession, SnappedFrame};
