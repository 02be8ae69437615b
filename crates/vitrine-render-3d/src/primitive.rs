//! Primitive solids positioned in an item's local frame.

use std::fmt;

use glam::DVec3;
use vitrine_core::{BoundingBox, Pose};

use crate::canvas::Canvas;
use crate::error::PrimitiveError;

/// A drawable solid in item-local coordinates.
///
/// Primitives are plain values: they know nothing about the item that
/// created them. The pose they are drawn with is supplied at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Primitive {
    /// Circular cylinder whose axis runs from `start` to `end`.
    Cylinder { start: DVec3, end: DVec3, radius: f64 },
    /// Truncated cone: radius `start_radius` at `start`, `end_radius` at `end`.
    Cone {
        start: DVec3,
        end: DVec3,
        start_radius: f64,
        end_radius: f64,
    },
    /// Axis-aligned box given by its center and full edge lengths.
    Cuboid { center: DVec3, size: DVec3 },
    Sphere { center: DVec3, radius: f64 },
}

/// The shape of a primitive, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cylinder,
    Cone,
    Cuboid,
    Sphere,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Cone => "cone",
            PrimitiveKind::Cuboid => "cuboid",
            PrimitiveKind::Sphere => "sphere",
        };
        f.write_str(name)
    }
}

fn check_point(parameter: &'static str, point: DVec3) -> Result<(), PrimitiveError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(PrimitiveError::NonFinite { parameter })
    }
}

fn check_size(parameter: &'static str, value: f64) -> Result<(), PrimitiveError> {
    if !value.is_finite() {
        return Err(PrimitiveError::NonFinite { parameter });
    }
    if value < 0.0 {
        return Err(PrimitiveError::Negative { parameter, value });
    }
    Ok(())
}

impl Primitive {
    /// Create a cylinder along the axis `start` → `end`.
    pub fn cylinder(start: DVec3, end: DVec3, radius: f64) -> Result<Self, PrimitiveError> {
        check_point("start", start)?;
        check_point("end", end)?;
        check_size("radius", radius)?;
        Ok(Primitive::Cylinder { start, end, radius })
    }

    /// Create a truncated cone along the axis `start` → `end`.
    pub fn cone(
        start: DVec3,
        end: DVec3,
        start_radius: f64,
        end_radius: f64,
    ) -> Result<Self, PrimitiveError> {
        check_point("start", start)?;
        check_point("end", end)?;
        check_size("start_radius", start_radius)?;
        check_size("end_radius", end_radius)?;
        Ok(Primitive::Cone { start, end, start_radius, end_radius })
    }

    /// Create an axis-aligned box.
    pub fn cuboid(center: DVec3, size: DVec3) -> Result<Self, PrimitiveError> {
        check_point("center", center)?;
        check_size("size.x", size.x)?;
        check_size("size.y", size.y)?;
        check_size("size.z", size.z)?;
        Ok(Primitive::Cuboid { center, size })
    }

    /// Create a sphere.
    pub fn sphere(center: DVec3, radius: f64) -> Result<Self, PrimitiveError> {
        check_point("center", center)?;
        check_size("radius", radius)?;
        Ok(Primitive::Sphere { center, radius })
    }

    /// Get the primitive kind.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Cylinder { .. } => PrimitiveKind::Cylinder,
            Primitive::Cone { .. } => PrimitiveKind::Cone,
            Primitive::Cuboid { .. } => PrimitiveKind::Cuboid,
            Primitive::Sphere { .. } => PrimitiveKind::Sphere,
        }
    }

    /// Emit this primitive to a canvas, to be composed with `pose`.
    pub fn draw<C: Canvas + ?Sized>(&self, pose: &Pose, canvas: &mut C) {
        canvas.draw_primitive(pose, self);
    }

    /// Local-frame bounds.
    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            Primitive::Cylinder { start, end, radius } => {
                disc_bounds(start, end, radius).union(&disc_bounds(end, start, radius))
            }
            Primitive::Cone { start, end, start_radius, end_radius } => {
                disc_bounds(start, end, start_radius).union(&disc_bounds(end, start, end_radius))
            }
            Primitive::Cuboid { center, size } => {
                BoundingBox::new(center - size * 0.5, center + size * 0.5)
            }
            Primitive::Sphere { center, radius } => {
                BoundingBox::new(center - DVec3::splat(radius), center + DVec3::splat(radius))
            }
        }
    }
}

/// Bounds of a disc at `center` perpendicular to the direction towards `other`.
///
/// Along axis i the disc reaches `radius * sqrt(1 - d_i^2)` for unit axis d.
/// With no usable axis the disc could face any way, so a cube is used.
fn disc_bounds(center: DVec3, other: DVec3, radius: f64) -> BoundingBox {
    let reach = match (other - center).try_normalize() {
        Some(d) => {
            let spread = |c: f64| (1.0 - c * c).max(0.0).sqrt();
            DVec3::new(spread(d.x), spread(d.y), spread(d.z)) * radius
        }
        None => DVec3::splat(radius),
    };
    BoundingBox::new(center - reach, center + reach)
}
