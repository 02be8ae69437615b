//! Posed, dimensioned scene items.
//!
//! An [`Item`] pairs a [`Pose`] and a [`Dimension`] with an [`ItemKind`].
//! The kind decides which primitives represent the object; the item draws
//! them, in order, with its own pose.

use std::fmt;

use glam::DVec3;
use vitrine_core::{pose_from_scalars, BoundingBox, Dimension, Pose};

use crate::canvas::Canvas;
use crate::error::{ItemError, PrimitiveError};
use crate::primitive::Primitive;

/// The object an item represents.
///
/// Each variant lays out its primitives in [`ItemKind::primitives`].
/// Fixed-shape variants use literal local-frame constants; the others
/// scale with the item's dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    /// Wheel of cheese: one short wide cylinder for its lower part.
    Cheese,
    /// Cylindrical body with a side handle.
    Mug,
    /// Body, tapered shoulder, cap.
    Bottle,
    /// A box filling the item's dimension, resting on the local origin.
    Carton,
    /// The largest sphere fitting the item's dimension, resting on the local origin.
    Ball,
}

impl ItemKind {
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Cheese,
        ItemKind::Mug,
        ItemKind::Bottle,
        ItemKind::Carton,
        ItemKind::Ball,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Cheese => "cheese",
            ItemKind::Mug => "mug",
            ItemKind::Bottle => "bottle",
            ItemKind::Carton => "carton",
            ItemKind::Ball => "ball",
        }
    }

    /// Build this kind's primitives in draw order.
    pub fn primitives(&self, dimension: &Dimension) -> Result<Vec<Primitive>, PrimitiveError> {
        let primitives = match self {
            ItemKind::Cheese => vec![Primitive::cylinder(
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 0.0, 0.05),
                0.04,
            )?],
            ItemKind::Mug => vec![
                Primitive::cylinder(DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 0.1), 0.04)?,
                Primitive::cuboid(DVec3::new(0.05, 0.0, 0.05), DVec3::new(0.02, 0.01, 0.06))?,
            ],
            ItemKind::Bottle => vec![
                Primitive::cylinder(DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 0.2), 0.035)?,
                Primitive::cone(
                    DVec3::new(0.0, 0.0, 0.2),
                    DVec3::new(0.0, 0.0, 0.25),
                    0.035,
                    0.012,
                )?,
                Primitive::cylinder(DVec3::new(0.0, 0.0, 0.25), DVec3::new(0.0, 0.0, 0.28), 0.013)?,
            ],
            ItemKind::Carton => {
                let size = dimension.extents();
                vec![Primitive::cuboid(DVec3::new(0.0, 0.0, size.z / 2.0), size)?]
            }
            ItemKind::Ball => {
                let radius = dimension.min_extent() / 2.0;
                vec![Primitive::sphere(DVec3::new(0.0, 0.0, radius), radius)?]
            }
        };
        Ok(primitives)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A visualizable object placed in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    kind: ItemKind,
    pose: Pose,
    dimension: Dimension,
}

impl Item {
    /// Create an item from validated pose and dimension values.
    pub fn new(kind: ItemKind, pose: Pose, dimension: Dimension) -> Self {
        Self { kind, pose, dimension }
    }

    /// Create an item from a row-major pose matrix and three extents.
    pub fn from_scalars(
        kind: ItemKind,
        matrix: &[f64; 16],
        extents: [f64; 3],
    ) -> Result<Self, ItemError> {
        let pose = pose_from_scalars(matrix)?;
        let dimension = Dimension::try_from(extents)?;
        Ok(Self::new(kind, pose, dimension))
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// A copy of this item at another pose.
    pub fn with_pose(&self, pose: Pose) -> Self {
        Self { pose, ..*self }
    }

    /// The item's primitives in its local frame, in draw order.
    pub fn primitives(&self) -> Result<Vec<Primitive>, PrimitiveError> {
        self.kind.primitives(&self.dimension)
    }

    /// Draw the item onto a canvas.
    ///
    /// All primitives are built before the first one is emitted, so a
    /// failure leaves the canvas untouched.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), ItemError> {
        let count = emit_all(&self.pose, self.primitives(), canvas)?;
        log::trace!("drew {} ({count} primitives)", self.kind);
        Ok(())
    }

    /// Bounds of the item's primitives in its local frame.
    pub fn local_bounds(&self) -> Result<BoundingBox, PrimitiveError> {
        let bounds = self
            .primitives()?
            .iter()
            .map(Primitive::bounding_box)
            .reduce(|a, b| a.union(&b))
            .unwrap_or(BoundingBox::new(DVec3::ZERO, DVec3::ZERO));
        Ok(bounds)
    }

    /// Bounds of the item's primitives in world space.
    pub fn world_bounds(&self) -> Result<BoundingBox, PrimitiveError> {
        Ok(self.local_bounds()?.transformed(&self.pose))
    }
}

/// Emit a fully built primitive list with `pose`.
///
/// A build error is returned before anything reaches the canvas.
fn emit_all<C: Canvas + ?Sized>(
    pose: &Pose,
    primitives: Result<Vec<Primitive>, PrimitiveError>,
    canvas: &mut C,
) -> Result<usize, PrimitiveError> {
    let primitives = primitives?;
    for primitive in &primitives {
        primitive.draw(pose, canvas);
    }
    Ok(primitives.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::primitive::PrimitiveKind;
    use vitrine_core::TransformError;

    #[rustfmt::skip]
    const LIFTED: [f64; 16] = [
        1.0, 0.0, 0.0, 0.5,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.8,
        0.0, 0.0, 0.0, 1.0,
    ];

    fn dimension() -> Dimension {
        Dimension::new(0.08, 0.08, 0.05).unwrap()
    }

    #[test]
    fn test_constructors_agree() {
        let from_scalars = Item::from_scalars(ItemKind::Mug, &LIFTED, [0.08, 0.08, 0.05]).unwrap();
        let pose = Pose::from_translation(DVec3::new(0.5, 0.0, 0.8)).unwrap();
        let canonical = Item::new(ItemKind::Mug, pose, dimension());

        assert_eq!(from_scalars, canonical);
        assert_eq!(from_scalars.pose(), canonical.pose());
        assert_eq!(from_scalars.dimension(), canonical.dimension());
    }

    #[test]
    fn test_from_scalars_errors() {
        let singular = [0.0; 16];
        assert!(matches!(
            Item::from_scalars(ItemKind::Cheese, &singular, [0.1, 0.1, 0.1]),
            Err(ItemError::Transform(_))
        ));
        assert!(matches!(
            Item::from_scalars(ItemKind::Cheese, &LIFTED, [0.1, -0.1, 0.1]),
            Err(ItemError::Dimension(_))
        ));
    }

    #[test]
    fn test_from_scalars_rejects_projective_pose() {
        #[rustfmt::skip]
        let projective = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 1.0, 1.0,
        ];
        assert_eq!(
            Item::from_scalars(ItemKind::Carton, &projective, [1.0, 1.0, 2.0]),
            Err(ItemError::Transform(TransformError::NotAffine {
                bottom_row: [0.0, 0.0, 1.0, 1.0],
            }))
        );
    }

    #[test]
    fn test_failed_build_emits_nothing() {
        let primitives = [
            Primitive::cylinder(DVec3::ZERO, DVec3::Z, 0.04),
            Primitive::sphere(DVec3::ZERO, -1.0),
        ]
        .into_iter()
        .collect::<Result<Vec<_>, _>>();

        let mut canvas = RecordingCanvas::new();
        let result = emit_all(&Pose::IDENTITY, primitives, &mut canvas);

        assert_eq!(result, Err(PrimitiveError::Negative { parameter: "radius", value: -1.0 }));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_emit_all_keeps_order() {
        let primitives = vec![
            Primitive::cylinder(DVec3::ZERO, DVec3::Z, 0.04).unwrap(),
            Primitive::sphere(DVec3::ZERO, 1.0).unwrap(),
        ];

        let mut canvas = RecordingCanvas::new();
        let count = emit_all(&Pose::IDENTITY, Ok(primitives.clone()), &mut canvas).unwrap();

        assert_eq!(count, 2);
        assert_eq!(canvas.primitives().copied().collect::<Vec<_>>(), primitives);
    }

    #[test]
    fn test_cheese_draws_single_cylinder() {
        let item = Item::from_scalars(ItemKind::Cheese, &LIFTED, [0.08, 0.08, 0.05]).unwrap();
        let mut canvas = RecordingCanvas::new();
        item.draw(&mut canvas).unwrap();

        assert_eq!(canvas.len(), 1);
        assert_eq!(
            canvas.commands()[0].primitive,
            Primitive::Cylinder {
                start: DVec3::new(0.0, 0.0, 0.0),
                end: DVec3::new(0.0, 0.0, 0.05),
                radius: 0.04,
            }
        );
        assert_eq!(&canvas.commands()[0].pose, item.pose());
    }

    #[test]
    fn test_draw_order_per_kind() {
        let expected = [
            (ItemKind::Cheese, vec![PrimitiveKind::Cylinder]),
            (ItemKind::Mug, vec![PrimitiveKind::Cylinder, PrimitiveKind::Cuboid]),
            (
                ItemKind::Bottle,
                vec![PrimitiveKind::Cylinder, PrimitiveKind::Cone, PrimitiveKind::Cylinder],
            ),
            (ItemKind::Carton, vec![PrimitiveKind::Cuboid]),
            (ItemKind::Ball, vec![PrimitiveKind::Sphere]),
        ];

        for (kind, kinds) in expected {
            let item = Item::new(kind, Pose::IDENTITY, dimension());
            let mut canvas = RecordingCanvas::new();
            item.draw(&mut canvas).unwrap();

            let drawn: Vec<_> = canvas.primitives().map(Primitive::kind).collect();
            assert_eq!(drawn, kinds, "{kind}");
        }
    }

    #[test]
    fn test_draw_is_repeatable() {
        let item = Item::new(ItemKind::Bottle, Pose::IDENTITY, dimension());
        let mut canvas = RecordingCanvas::new();

        item.draw(&mut canvas).unwrap();
        let first = canvas.take();
        item.draw(&mut canvas).unwrap();

        assert_eq!(first, canvas.commands());
    }

    #[test]
    fn test_carton_fills_dimension() {
        let dim = Dimension::new(0.2, 0.1, 0.3).unwrap();
        let item = Item::new(ItemKind::Carton, Pose::IDENTITY, dim);
        let bounds = item.local_bounds().unwrap();

        assert!((bounds.size() - dim.extents()).length() < 1e-12);
        assert_eq!(bounds.min.z, 0.0);
    }

    #[test]
    fn test_ball_fits_smallest_extent() {
        let dim = Dimension::new(0.3, 0.2, 0.4).unwrap();
        let item = Item::new(ItemKind::Ball, Pose::IDENTITY, dim);

        match item.primitives().unwrap().as_slice() {
            [Primitive::Sphere { center, radius }] => {
                assert_eq!(*radius, 0.1);
                assert_eq!(*center, DVec3::new(0.0, 0.0, 0.1));
            }
            other => panic!("unexpected primitives: {other:?}"),
        }
    }

    #[test]
    fn test_world_bounds_follow_pose() {
        let item = Item::from_scalars(ItemKind::Cheese, &LIFTED, [0.08, 0.08, 0.05]).unwrap();
        let bounds = item.world_bounds().unwrap();

        assert!((bounds.min - DVec3::new(0.46, -0.04, 0.8)).length() < 1e-12);
        assert!((bounds.max - DVec3::new(0.54, 0.04, 0.85)).length() < 1e-12);
    }

    #[test]
    fn test_with_pose_keeps_shape() {
        let item = Item::new(ItemKind::Mug, Pose::IDENTITY, dimension());
        let moved = item.with_pose(Pose::from_translation(DVec3::X).unwrap());

        assert_eq!(moved.kind(), item.kind());
        assert_eq!(moved.dimension(), item.dimension());
        assert_eq!(moved.primitives(), item.primitives());
        assert_ne!(moved, item);
    }
}
