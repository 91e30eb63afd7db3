//! Canvas data model.
//!
//! The canvas is a fixed-size surface holding a flat list of items in
//! back-to-front order: the last item is drawn on top and wins hit tests.
//! The canvas also issues the [`ItemId`]s of the items it holds.

use crate::geometry::{Rect, Size};
use crate::id::ItemId;
use serde::{Deserialize, Serialize};

/// An image placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    pub id: ItemId,
    pub frame: Rect,
}

impl CanvasItem {
    pub fn new(id: ItemId, frame: Rect) -> Self {
        Self { id, frame }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Canvas {
    pub size: Size,
    items: Vec<CanvasItem>,
    /// Lower bound for the next id handed out.
    #[serde(default)]
    next_id: u32,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            items: Vec::new(),
            next_id: 0,
        }
    }

    /// The canvas bounds in its own coordinate space (origin at 0, 0).
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Items back to front.
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Allocate a fresh id and place an item with `frame` on top.
    pub fn insert(&mut self, frame: Rect) -> ItemId {
        let above_items = self
            .items
            .iter()
            .map(|i| i.id.raw().saturating_add(1))
            .max()
            .unwrap_or(0);
        let id = ItemId::from_raw(self.next_id.max(above_items));
        self.next_id = id.raw().saturating_add(1);
        self.items.push(CanvasItem::new(id, frame));
        id
    }

    /// Place an existing item on top of everything else.
    pub fn push(&mut self, item: CanvasItem) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: ItemId) -> Option<CanvasItem> {
        let pos = self.position(id)?;
        Some(self.items.remove(pos))
    }

    pub fn frame_of(&self, id: ItemId) -> Option<Rect> {
        self.items.iter().find(|i| i.id == id).map(|i| i.frame)
    }

    /// Returns false if `id` is not on the canvas.
    pub fn set_frame(&mut self, id: ItemId, frame: Rect) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.frame = frame;
                true
            }
            None => false,
        }
    }

    /// Move an item to the top of the stack. Returns false if absent.
    pub fn bring_to_front(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let item = self.items.remove(pos);
        self.items.push(item);
        true
    }

    /// Frames of every item except `excluded`, back to front.
    pub fn frames_except(&self, excluded: ItemId) -> impl Iterator<Item = &Rect> {
        self.items
            .iter()
            .filter(move |i| i.id != excluded)
            .map(|i| &i.frame)
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn canvas_with(n: usize) -> (Canvas, Vec<ItemId>) {
        let mut canvas = Canvas::new(Size::new(300.0, 200.0));
        let ids = (0..n)
            .map(|i| {
                let offset = i as f32 * 10.0;
                canvas.insert(Rect::new(offset, offset, 20.0, 20.0))
            })
            .collect();
        (canvas, ids)
    }

    #[test]
    fn insert_allocates_distinct_ids() {
        let (mut canvas, ids) = canvas_with(2);
        assert_ne!(ids[0], ids[1]);
        canvas.remove(ids[1]);
        let again = canvas.insert(Rect::default());
        assert!(!ids.contains(&again), "removed ids are not reused");
    }

    #[test]
    fn pushed_items_advance_the_counter() {
        let mut canvas = Canvas::new(Size::new(10.0, 10.0));
        canvas.push(CanvasItem::new(ItemId::from_raw(5), Rect::default()));
        assert_eq!(canvas.insert(Rect::default()), ItemId::from_raw(6));
    }

    #[test]
    fn deserialized_canvas_does_not_reissue_ids() {
        let mut canvas: Canvas = serde_json::from_str(
            r#"{ "size": { "width": 10, "height": 10 },
                 "items": [{ "id": 3, "frame": { "x": 0, "y": 0, "width": 1, "height": 1 } }] }"#,
        )
        .unwrap();
        assert_eq!(canvas.insert(Rect::default()), ItemId::from_raw(4));
    }

    #[test]
    fn bring_to_front_reorders() {
        let (mut canvas, ids) = canvas_with(3);
        assert!(canvas.bring_to_front(ids[0]));
        let order: Vec<ItemId> = canvas.items().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
        assert!(!canvas.bring_to_front(ItemId::from_raw(99)));
    }

    #[test]
    fn frames_except_skips_one_item() {
        let (canvas, ids) = canvas_with(2);
        let frames: Vec<&Rect> = canvas.frames_except(ids[0]).collect();
        assert_eq!(frames, vec![&Rect::new(10.0, 10.0, 20.0, 20.0)]);
    }

    #[test]
    fn set_frame_and_remove() {
        let (mut canvas, ids) = canvas_with(1);
        let id = ids[0];
        assert!(canvas.set_frame(id, Rect::new(5.0, 5.0, 1.0, 1.0)));
        assert_eq!(canvas.frame_of(id), Some(Rect::new(5.0, 5.0, 1.0, 1.0)));
        assert!(canvas.remove(id).is_some());
        assert!(canvas.is_empty());
        assert!(!canvas.set_frame(id, Rect::default()));
    }

    #[test]
    fn bounds_start_at_origin() {
        let canvas = Canvas::new(Size::new(300.0, 200.0));
        assert_eq!(canvas.bounds(), Rect::new(0.0, 0.0, 300.0, 200.0));
    }
}
