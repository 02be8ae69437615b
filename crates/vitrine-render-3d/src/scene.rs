//! Collections of items drawn together.

use vitrine_core::BoundingBox;

use crate::canvas::Canvas;
use crate::error::{ItemError, PrimitiveError};
use crate::item::Item;

/// An ordered collection of items.
///
/// Items are independent: there is no parent/child relationship, and
/// drawing visits them in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    items: Vec<Item>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the scene.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw every item onto the canvas, stopping at the first failure.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), ItemError> {
        log::debug!("drawing scene with {} items", self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            if let Err(err) = item.draw(canvas) {
                log::warn!("item {index} ({}) failed to draw: {err}", item.kind());
                return Err(err);
            }
        }
        Ok(())
    }

    /// Get the combined world bounds of all items.
    pub fn bounding_box(&self) -> Result<Option<BoundingBox>, PrimitiveError> {
        let mut combined: Option<BoundingBox> = None;
        for item in &self.items {
            let bounds = item.world_bounds()?;
            combined = Some(match combined {
                Some(acc) => acc.union(&bounds),
                None => bounds,
            });
        }
        Ok(combined)
    }
}

impl FromIterator<Item> for Scene {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl Extend<Item> for Scene {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{MeshCanvas, RecordingCanvas};
    use crate::item::ItemKind;
    use glam::DVec3;
    use vitrine_core::{Dimension, Pose};

    fn item_at(kind: ItemKind, x: f64) -> Item {
        Item::new(
            kind,
            Pose::from_translation(DVec3::new(x, 0.0, 0.0)).unwrap(),
            Dimension::new(0.1, 0.1, 0.1).unwrap(),
        )
    }

    #[test]
    fn test_scene_new() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.bounding_box().unwrap(), None);
    }

    #[test]
    fn test_draw_in_insertion_order() {
        let scene: Scene = [item_at(ItemKind::Cheese, 0.0), item_at(ItemKind::Mug, 1.0)]
            .into_iter()
            .collect();
        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas).unwrap();

        // cheese: 1 primitive, mug: 2
        assert_eq!(canvas.len(), 3);
        assert_eq!(canvas.commands()[0].pose, *scene.items()[0].pose());
        assert_eq!(canvas.commands()[1].pose, *scene.items()[1].pose());
        assert_eq!(canvas.commands()[2].pose, *scene.items()[1].pose());
    }

    #[test]
    fn test_bounding_box_spans_items() {
        let mut scene = Scene::new();
        scene.add_item(item_at(ItemKind::Cheese, 0.0));
        scene.extend([item_at(ItemKind::Cheese, 2.0)]);

        let bounds = scene.bounding_box().unwrap().unwrap();
        assert!((bounds.min.x + 0.04).abs() < 1e-12);
        assert!((bounds.max.x - 2.04).abs() < 1e-12);
    }

    #[test]
    fn test_draw_to_mesh() {
        let scene: Scene = ItemKind::ALL.iter().map(|&k| item_at(k, 0.0)).collect();
        let mut canvas = MeshCanvas::default();
        scene.draw(&mut canvas).unwrap();

        // 1 + 2 + 3 + 1 + 1
        assert_eq!(canvas.primitive_count(), 8);
        assert!(!canvas.mesh().is_empty());
    }
}
