//! Primitive composition and drawing for Vitrine scene items.
//!
//! This crate provides:
//! - Primitive solids (cylinder, cone, cuboid, sphere) in item-local space
//! - Items: a pose, a dimension and a kind that lays out primitives
//! - The `Canvas` trait that receives primitive draw requests
//! - A recording canvas and a tessellating mesh canvas
//! - Scenes of independent items

mod canvas;
mod error;
mod geometry;
mod item;
mod primitive;
mod scene;
mod tessellation;

pub use canvas::{Canvas, DrawCommand, MeshCanvas, RecordingCanvas};
pub use error::{ItemError, PrimitiveError};
pub use geometry::Mesh;
pub use item::{Item, ItemKind};
pub use primitive::{Primitive, PrimitiveKind};
pub use scene::Scene;
pub use tessellation::{tessellate, tessellate_with_options, TessellationOptions};

pub use vitrine_core::{pose_from_scalars, BoundingBox, Dimension, Pose};
