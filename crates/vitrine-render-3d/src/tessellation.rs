//! Tessellation of primitives to triangle meshes.

use glam::{DMat4, DQuat, DVec3, Vec3};
use std::f32::consts::PI;

use crate::geometry::Mesh;
use crate::primitive::Primitive;

/// Tessellation quality settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TessellationOptions {
    /// Number of segments around curved surfaces.
    pub curve_segments: u32,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self { curve_segments: 32 }
    }
}

impl TessellationOptions {
    /// Smallest segment count ever used for a curved surface.
    pub const MIN_SEGMENTS: u32 = 8;

    /// Largest segment count ever used for a curved surface.
    pub const MAX_SEGMENTS: u32 = 128;

    /// Options for a deflection tolerance (smaller = more triangles).
    pub fn from_deflection(deflection: f64) -> Self {
        let segments = (1.0 / deflection) as u32;
        Self { curve_segments: segments.clamp(Self::MIN_SEGMENTS, Self::MAX_SEGMENTS) }
    }
}

/// Tessellate a primitive with a deflection tolerance.
pub fn tessellate(primitive: &Primitive, deflection: f64) -> Mesh {
    tessellate_with_options(primitive, &TessellationOptions::from_deflection(deflection))
}

/// Tessellate a primitive into a mesh in the item's local frame.
pub fn tessellate_with_options(primitive: &Primitive, options: &TessellationOptions) -> Mesh {
    let segments = options
        .curve_segments
        .clamp(TessellationOptions::MIN_SEGMENTS, TessellationOptions::MAX_SEGMENTS);

    let (mut mesh, placement) = match *primitive {
        Primitive::Cylinder { start, end, radius } => {
            let length = start.distance(end);
            (
                tessellate_frustum(radius as f32, radius as f32, length as f32, segments),
                axis_placement(start, end),
            )
        }
        Primitive::Cone { start, end, start_radius, end_radius } => {
            let length = start.distance(end);
            (
                tessellate_frustum(start_radius as f32, end_radius as f32, length as f32, segments),
                axis_placement(start, end),
            )
        }
        Primitive::Cuboid { center, size } => (
            tessellate_box(size.x as f32, size.y as f32, size.z as f32),
            DMat4::from_translation(center),
        ),
        Primitive::Sphere { center, radius } => (
            tessellate_sphere(radius as f32, segments),
            DMat4::from_translation(center),
        ),
    };

    mesh.transform(placement.as_mat4());
    mesh
}

/// Map the +Z axis onto the segment `start` → `end`.
fn axis_placement(start: DVec3, end: DVec3) -> DMat4 {
    let rotation = match (end - start).try_normalize() {
        Some(dir) => DQuat::from_rotation_arc(DVec3::Z, dir),
        None => DQuat::IDENTITY,
    };
    DMat4::from_rotation_translation(rotation, start)
}

/// Tessellate a box centered at origin.
fn tessellate_box(width: f32, height: f32, depth: f32) -> Mesh {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;

    let corners = [
        Vec3::new(-hw, -hh, -hd),
        Vec3::new( hw, -hh, -hd),
        Vec3::new( hw,  hh, -hd),
        Vec3::new(-hw,  hh, -hd),
        Vec3::new(-hw, -hh,  hd),
        Vec3::new( hw, -hh,  hd),
        Vec3::new( hw,  hh,  hd),
        Vec3::new(-hw,  hh,  hd),
    ];

    // Corner loops are counter-clockwise seen from outside.
    let faces = [
        ([0, 3, 2, 1], Vec3::NEG_Z),
        ([4, 5, 6, 7], Vec3::Z),
        ([0, 4, 7, 3], Vec3::NEG_X),
        ([1, 2, 6, 5], Vec3::X),
        ([0, 1, 5, 4], Vec3::NEG_Y),
        ([3, 7, 6, 2], Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (corner_indices, normal) in &faces {
        let base = vertices.len() as u32;

        for &ci in corner_indices {
            vertices.push(corners[ci]);
            normals.push(*normal);
        }

        indices.extend_from_slice(&[
            base, base + 1, base + 2,
            base, base + 2, base + 3,
        ]);
    }

    Mesh { vertices, normals, indices }
}

/// Tessellate a capped frustum along +Z from `z = 0` to `z = length`.
///
/// Equal radii give a cylinder; a zero radius gives a pointed cone.
fn tessellate_frustum(start_radius: f32, end_radius: f32, length: f32, segments: u32) -> Mesh {
    let slope = if length > 0.0 { (start_radius - end_radius) / length } else { 0.0 };

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos, sin, slope).normalize();

        vertices.push(Vec3::new(cos * start_radius, sin * start_radius, 0.0));
        normals.push(normal);

        vertices.push(Vec3::new(cos * end_radius, sin * end_radius, length));
        normals.push(normal);
    }

    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[
            base, base + 2, base + 1,
            base + 1, base + 2, base + 3,
        ]);
    }

    push_cap(&mut vertices, &mut normals, &mut indices, end_radius, length, segments, Vec3::Z);
    push_cap(&mut vertices, &mut normals, &mut indices, start_radius, 0.0, segments, Vec3::NEG_Z);

    Mesh { vertices, normals, indices }
}

fn push_cap(
    vertices: &mut Vec<Vec3>,
    normals: &mut Vec<Vec3>,
    indices: &mut Vec<u32>,
    radius: f32,
    z: f32,
    segments: u32,
    normal: Vec3,
) {
    let center = vertices.len() as u32;
    vertices.push(Vec3::new(0.0, 0.0, z));
    normals.push(normal);

    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = angle.sin_cos();
        vertices.push(Vec3::new(cos * radius, sin * radius, z));
        normals.push(normal);
    }

    let facing_up = normal.z > 0.0;
    for i in 0..segments {
        let rim = center + 1 + i;
        if facing_up {
            indices.extend_from_slice(&[center, rim, rim + 1]);
        } else {
            indices.extend_from_slice(&[center, rim + 1, rim]);
        }
    }
}

/// Tessellate a sphere centered at origin.
fn tessellate_sphere(radius: f32, segments: u32) -> Mesh {
    let rings = segments / 2;

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = (ring as f32 / rings as f32) * PI;
        let z = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = (seg as f32 / segments as f32) * 2.0 * PI;
            let normal = Vec3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z)
                .normalize();
            vertices.push(normal * radius);
            normals.push(normal);
        }
    }

    let verts_per_ring = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * verts_per_ring + seg;
            let next = current + verts_per_ring;

            indices.extend_from_slice(&[
                current, next, current + 1,
                current + 1, next, next + 1,
            ]);
        }
    }

    Mesh { vertices, normals, indices }
}
