//! Canvas contract and reference canvases.
//!
//! Items never hand a canvas bare local geometry: each request carries the
//! item's world pose, and the canvas composes `pose × local` itself. There
//! is no transform stack to push or pop, so a canvas holds no per-item
//! state between requests.

use vitrine_core::Pose;

use crate::geometry::Mesh;
use crate::primitive::Primitive;
use crate::tessellation::{tessellate_with_options, TessellationOptions};

/// A rendering surface that accepts primitive draw requests.
pub trait Canvas {
    /// Draw `primitive`, whose parameters are in the local frame placed by `pose`.
    fn draw_primitive(&mut self, pose: &Pose, primitive: &Primitive);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_primitive(&mut self, pose: &Pose, primitive: &Primitive) {
        (**self).draw_primitive(pose, primitive);
    }
}

/// One recorded draw request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DrawCommand {
    pub pose: Pose,
    pub primitive: Primitive,
}

/// A canvas that records every request in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Just the primitives, oldest first.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.commands.iter().map(|c| &c.primitive)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_primitive(&mut self, pose: &Pose, primitive: &Primitive) {
        self.commands.push(DrawCommand { pose: *pose, primitive: *primitive });
    }
}

/// A canvas that tessellates primitives into a single world-space mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshCanvas {
    options: TessellationOptions,
    mesh: Mesh,
    primitive_count: usize,
}

impl MeshCanvas {
    pub fn new(options: TessellationOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &TessellationOptions {
        &self.options
    }

    /// The accumulated world-space mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Number of primitives drawn so far.
    pub fn primitive_count(&self) -> usize {
        self.primitive_count
    }
}

impl Canvas for MeshCanvas {
    fn draw_primitive(&mut self, pose: &Pose, primitive: &Primitive) {
        let mut local = tessellate_with_options(primitive, &self.options);
        local.transform(pose.matrix().as_mat4());
        log::trace!(
            "mesh canvas: {} -> {} triangles",
            primitive.kind(),
            local.triangle_count()
        );
        self.mesh.merge(&local);
        self.primitive_count += 1;
    }
}
