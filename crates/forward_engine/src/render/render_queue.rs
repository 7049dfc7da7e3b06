//! Render queue for one frame
//!
//! Collects draw items during traversal and orders them so that opaque
//! geometry is drawn before transparent geometry, and transparent geometry
//! is drawn from the farthest item to the nearest.

use std::cmp::Ordering;

use super::DrawItem;

/// Draw items collected for a single frame
#[derive(Debug, Default)]
pub struct RenderQueue<'a> {
    items: Vec<DrawItem<'a>>,
}

impl<'a> RenderQueue<'a> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item
    pub fn push(&mut self, item: DrawItem<'a>) {
        self.items.push(item);
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Queued items in their current order
    pub fn items(&self) -> &[DrawItem<'a>] {
        &self.items
    }

    /// Iterate queued items in their current order
    pub fn iter(&self) -> impl Iterator<Item = &DrawItem<'a>> {
        self.items.iter()
    }

    /// Sort into draw order
    ///
    /// The sort is stable: opaque items keep the order they were collected in.
    pub fn sort(&mut self) {
        self.items.sort_by(draw_order);
    }

    /// Remove all items
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Opaque before transparent; transparent items farthest first
pub fn draw_order(a: &DrawItem<'_>, b: &DrawItem<'_>) -> Ordering {
    match (a.is_transparent, b.is_transparent) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => b.distance_to_camera.total_cmp(&a.distance_to_camera),
    }
}
