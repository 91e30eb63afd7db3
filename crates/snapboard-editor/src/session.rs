//! Editing session: the canvas, the current selection, and the cached
//! anchor set used while dragging.
//!
//! Anchors are rebuilt explicitly by `recompute_anchors`, which the session
//! calls itself whenever the selection or the canvas membership changes.
//! Drag updates only read the cached set.

use crate::hit::hit_test;
use snapboard_core::{
    Anchor, Axis, AxisSnapper, Canvas, EditorConfig, ItemId, Rect, Size, SnapResult,
    Snapper, build_anchors,
};

/// A proposed frame after snapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SnappedFrame {
    /// Proposed frame with the snap delta applied.
    pub frame: Rect,
    pub result: SnapResult,
}

impl SnappedFrame {
    /// x coordinate of the active vertical guide, if any.
    pub fn x_guide(&self) -> Option<f32> {
        self.result.anchor_for(Axis::Horizontal).map(|a| a.coordinate)
    }

    /// y coordinate of the active horizontal guide, if any.
    pub fn y_guide(&self) -> Option<f32> {
        self.result.anchor_for(Axis::Vertical).map(|a| a.coordinate)
    }
}

pub struct EditorSession<S: Snapper = AxisSnapper> {
    snapper: S,
    canvas: Canvas,
    config: EditorConfig,
    selected: Option<ItemId>,
    /// Snap targets for the selected item (empty when nothing is selected).
    anchors: Vec<Anchor>,
}

impl EditorSession<AxisSnapper> {
    pub fn new(canvas_size: Size, config: EditorConfig) -> Self {
        Self::with_snapper(AxisSnapper, canvas_size, config)
    }
}

impl<S: Snapper> EditorSession<S> {
    pub fn with_snapper(snapper: S, canvas_size: Size, config: EditorConfig) -> Self {
        Self {
            snapper,
            canvas: Canvas::new(canvas_size),
            config,
            selected: None,
            anchors: Vec::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn frame_of(&self, id: ItemId) -> Option<Rect> {
        self.canvas.frame_of(id)
    }

    // ─── Items ───────────────────────────────────────────────────────────

    /// Add an image to the canvas and select it.
    ///
    /// The item is placed at the origin, `item_height_ratio` of the canvas
    /// height tall, with the image's aspect ratio. Images without a usable
    /// height get zero width.
    pub fn add_item(&mut self, image_size: Size) -> ItemId {
        let height = self.canvas.size.height * self.config.item_height_ratio;
        let width = if image_size.height > 0.0 && image_size.height.is_finite() {
            image_size.width * height / image_size.height
        } else {
            log::warn!("image has no usable height ({image_size:?}); adding zero-width item");
            0.0
        };
        let id = self.insert_item(Rect::new(0.0, 0.0, width, height));
        self.select(id);
        id
    }

    /// Place an item with an explicit frame on top of the canvas.
    /// The selection is left unchanged.
    pub fn insert_item(&mut self, frame: Rect) -> ItemId {
        let id = self.canvas.insert(frame);
        log::debug!("inserted {id} at {frame:?}");
        self.recompute_anchors();
        id
    }

    /// Move an item without snapping. Returns false if it is not on the canvas.
    ///
    /// Moving any item other than the selected one changes the snap targets,
    /// so the anchor set is rebuilt.
    pub fn set_frame(&mut self, id: ItemId, frame: Rect) -> bool {
        if !self.canvas.set_frame(id, frame) {
            return false;
        }
        if self.selected.is_some_and(|selected| selected != id) {
            self.recompute_anchors();
        }
        true
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Select `id`, bring it to the front and rebuild the anchor set.
    ///
    /// Returns false and does nothing if `id` is already selected or is not
    /// on the canvas.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.selected == Some(id) || !self.canvas.contains(id) {
            return false;
        }
        self.deselect();
        self.canvas.bring_to_front(id);
        self.selected = Some(id);
        self.recompute_anchors();
        log::debug!("selected {id}");
        true
    }

    pub fn deselect(&mut self) {
        if let Some(id) = self.selected.take() {
            log::debug!("deselected {id}");
        }
        self.anchors.clear();
    }

    /// Select the topmost item under the point, or clear the selection when
    /// the tap lands on empty canvas.
    pub fn tap(&mut self, px: f32, py: f32) -> Option<ItemId> {
        match hit_test(&self.canvas, px, py) {
            Some(id) => {
                self.select(id);
                Some(id)
            }
            None => {
                self.deselect();
                None
            }
        }
    }

    // ─── Snapping ────────────────────────────────────────────────────────

    /// Rebuild the anchors for the current selection from the canvas bounds
    /// and every other item.
    pub fn recompute_anchors(&mut self) {
        self.anchors = match self.selected {
            Some(id) => build_anchors(&self.canvas.bounds(), self.canvas.frames_except(id)),
            None => Vec::new(),
        };
    }

    /// Snap a proposed frame for the selected item against the cached
    /// anchors using the configured threshold.
    pub fn snap_frame(&self, proposed: Rect) -> SnappedFrame {
        let result =
            self.snapper
                .calculate_snap(&proposed, &self.anchors, self.config.snap_threshold);
        SnappedFrame {
            frame: result.apply(&proposed),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use snapboard_core::Offset;

    const CANVAS: Size = Size::new(400.0, 240.0);

    fn session() -> EditorSession {
        EditorSession::new(CANVAS, EditorConfig::default())
    }

    #[test]
    fn add_item_scales_to_quarter_height_and_selects() {
        let mut s = session();
        let id = s.add_item(Size::new(200.0, 100.0));
        assert_eq!(s.frame_of(id), Some(Rect::new(0.0, 0.0, 120.0, 60.0)));
        assert_eq!(s.selected(), Some(id));
    }

    #[test]
    fn add_item_keeps_aspect_for_inexact_ratios() {
        let mut s = session();
        // 60 / 70 has no exact f32 form; the width must still be 300 * 60 / 70.
        let id = s.add_item(Size::new(300.0, 70.0));
        let frame = s.frame_of(id).unwrap();
        assert_eq!(frame.height, 60.0);
        assert!((frame.width - 257.142_86).abs() < 1e-3, "width {}", frame.width);
        assert!((frame.width / frame.height - 300.0 / 70.0).abs() < 1e-5);
    }

    #[test]
    fn add_item_with_degenerate_image_has_zero_width() {
        let mut s = session();
        let id = s.add_item(Size::new(50.0, 0.0));
        assert_eq!(s.frame_of(id), Some(Rect::new(0.0, 0.0, 0.0, 60.0)));
    }

    #[test]
    fn first_item_snaps_only_to_canvas() {
        let mut s = session();
        s.add_item(Size::new(100.0, 100.0));
        assert_eq!(
            s.anchors(),
            &[
                Anchor::x(0.0),
                Anchor::x(200.0),
                Anchor::x(400.0),
                Anchor::y(0.0),
                Anchor::y(120.0),
                Anchor::y(240.0),
            ]
        );
    }

    #[test]
    fn anchors_exclude_selected_item() {
        let mut s = session();
        let a = s.insert_item(Rect::new(10.0, 10.0, 20.0, 20.0));
        let b = s.insert_item(Rect::new(100.0, 100.0, 40.0, 40.0));
        assert!(s.select(a));
        let xs: Vec<f32> = s
            .anchors()
            .iter()
            .filter(|x| x.axis == Axis::Horizontal)
            .map(|x| x.coordinate)
            .collect();
        assert_eq!(xs, vec![0.0, 200.0, 400.0, 100.0, 120.0, 140.0]);

        assert!(s.select(b));
        let xs: Vec<f32> = s
            .anchors()
            .iter()
            .filter(|x| x.axis == Axis::Horizontal)
            .map(|x| x.coordinate)
            .collect();
        assert_eq!(xs, vec![0.0, 200.0, 400.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn inserting_refreshes_anchors_of_current_selection() {
        let mut s = session();
        let a = s.insert_item(Rect::new(0.0, 0.0, 10.0, 10.0));
        s.select(a);
        assert_eq!(s.anchors().len(), 6);
        s.insert_item(Rect::new(50.0, 50.0, 10.0, 10.0));
        assert_eq!(s.anchors().len(), 12);
        assert_eq!(s.selected(), Some(a));
    }

    #[test]
    fn moving_another_item_refreshes_anchors() {
        let mut s = session();
        let a = s.insert_item(Rect::new(10.0, 10.0, 20.0, 20.0));
        let b = s.insert_item(Rect::new(100.0, 100.0, 40.0, 40.0));
        s.select(a);
        assert!(s.set_frame(b, Rect::new(300.0, 100.0, 40.0, 40.0)));

        let xs: Vec<f32> = s
            .anchors()
            .iter()
            .filter(|x| x.axis == Axis::Horizontal)
            .map(|x| x.coordinate)
            .collect();
        assert_eq!(xs, vec![0.0, 200.0, 400.0, 300.0, 320.0, 340.0]);

        let config = EditorConfig {
            snap_threshold: 5.0,
            ..EditorConfig::default()
        };
        let mut s = EditorSession::new(CANVAS, config);
        let a = s.insert_item(Rect::new(10.0, 10.0, 20.0, 20.0));
        let b = s.insert_item(Rect::new(100.0, 100.0, 40.0, 40.0));
        s.select(a);
        s.set_frame(b, Rect::new(300.0, 100.0, 40.0, 40.0));
        // The old left edge at 100 is no longer a target.
        assert_eq!(s.snap_frame(Rect::new(97.0, 30.0, 20.0, 20.0)).x_guide(), None);
    }

    #[test]
    fn moving_selected_item_keeps_anchors() {
        let mut s = session();
        let a = s.insert_item(Rect::new(10.0, 10.0, 20.0, 20.0));
        s.insert_item(Rect::new(100.0, 100.0, 40.0, 40.0));
        s.select(a);
        let before = s.anchors().to_vec();
        s.set_frame(a, Rect::new(50.0, 50.0, 20.0, 20.0));
        assert_eq!(s.anchors(), before.as_slice());
    }

    #[test]
    fn set_frame_on_unknown_item_fails() {
        let mut s = session();
        assert!(!s.set_frame(ItemId::from_raw(999), Rect::default()));
    }

    #[test]
    fn select_is_noop_for_current_or_unknown() {
        let mut s = session();
        let a = s.insert_item(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(s.select(a));
        assert!(!s.select(a));
        assert!(!s.select(ItemId::from_raw(999)));
        assert_eq!(s.selected(), Some(a));
    }

    #[test]
    fn select_brings_item_to_front() {
        let mut s = session();
        let a = s.insert_item(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = s.insert_item(Rect::new(0.0, 0.0, 10.0, 10.0));
        s.select(a);
        let order: Vec<ItemId> = s.canvas().items().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn tap_selects_topmost_or_clears() {
        let mut s = session();
        let a = s.insert_item(Rect::new(0.0, 0.0, 50.0, 50.0));
        let b = s.insert_item(Rect::new(25.0, 25.0, 50.0, 50.0));
        assert_eq!(s.tap(30.0, 30.0), Some(b));
        assert_eq!(s.selected(), Some(b));
        assert_eq!(s.tap(5.0, 5.0), Some(a));
        assert_eq!(s.tap(300.0, 200.0), None);
        assert_eq!(s.selected(), None);
        assert!(s.anchors().is_empty());
    }

    #[test]
    fn snap_frame_uses_configured_threshold() {
        let config = EditorConfig {
            snap_threshold: 5.0,
            ..EditorConfig::default()
        };
        let build = |config: EditorConfig| {
            let mut s = EditorSession::new(CANVAS, config);
            s.insert_item(Rect::new(100.0, 100.0, 50.0, 50.0));
            let moving = s.insert_item(Rect::new(0.0, 0.0, 20.0, 20.0));
            s.select(moving);
            s
        };
        let proposed = Rect::new(153.0, 30.0, 20.0, 20.0);

        let snapped = build(config).snap_frame(proposed);
        assert_eq!(snapped.result.delta, Offset::new(-3.0, 0.0));
        assert_eq!(snapped.frame, Rect::new(150.0, 30.0, 20.0, 20.0));
        assert_eq!(snapped.x_guide(), Some(150.0));
        assert_eq!(snapped.y_guide(), None);

        // The default threshold of 1 does not reach 3 units.
        let tight = build(EditorConfig::default()).snap_frame(proposed);
        assert!(!tight.result.is_snapped());
        assert_eq!(tight.frame, proposed);
    }

    struct NoSnap;

    impl Snapper for NoSnap {
        fn calculate_snap(&self, _: &Rect, _: &[Anchor], _: f32) -> SnapResult {
            SnapResult::none()
        }
    }

    #[test]
    fn custom_snapper_is_used() {
        let mut s = EditorSession::with_snapper(NoSnap, CANVAS, EditorConfig::default());
        s.add_item(Size::new(10.0, 10.0));
        let proposed = Rect::new(0.5, 0.5, 60.0, 60.0);
        assert_eq!(s.snap_frame(proposed).frame, proposed);
    }
}
