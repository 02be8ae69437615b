//! Item pose and dimension values.
//!
//! A [`Pose`] places an item's local frame in world space. A [`Dimension`]
//! records the item's bounding extents. Both are validated on construction
//! and immutable afterwards, so an item holding them never needs to
//! re-check them on the draw path.

use glam::{DMat4, DQuat, DVec3, DVec4};

use crate::errors::{DimensionError, TransformError};

/// A 4×4 homogeneous transform from item-local space to world space.
///
/// Every entry is finite, the matrix is invertible, and its bottom row is
/// exactly `[0 0 0 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 16]", into = "[f64; 16]"))]
pub struct Pose {
    matrix: DMat4,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// The identity pose: item frame coincides with world frame.
    pub const IDENTITY: Pose = Pose { matrix: DMat4::IDENTITY };

    /// Determinant magnitude at or below which a matrix counts as singular.
    pub const SINGULARITY_EPSILON: f64 = 1e-12;

    /// Create a pose from a matrix, rejecting non-finite, singular or
    /// projective input.
    pub fn from_matrix(matrix: DMat4) -> Result<Self, TransformError> {
        // glam stores columns; report positions in row/column terms.
        for column in 0..4 {
            let col = matrix.col(column);
            for (row, value) in col.to_array().iter().enumerate() {
                if !value.is_finite() {
                    return Err(TransformError::NonFinite { row, column });
                }
            }
        }

        let determinant = matrix.determinant();
        if determinant.abs() <= Self::SINGULARITY_EPSILON {
            return Err(TransformError::Singular { determinant });
        }

        // Points are mapped with an implicit w = 1, which only holds for
        // an exact [0 0 0 1] bottom row.
        let bottom = matrix.row(3);
        if bottom != DVec4::W {
            return Err(TransformError::NotAffine { bottom_row: bottom.to_array() });
        }

        Ok(Self { matrix })
    }

    /// Create a pose from sixteen scalars in row-major order.
    pub fn from_row_major(values: [f64; 16]) -> Result<Self, TransformError> {
        Self::from_matrix(DMat4::from_cols_array(&values).transpose())
    }

    /// Create a pose from a rotation and a translation.
    ///
    /// The rotation is normalized; a zero-length or non-finite quaternion is
    /// rejected.
    pub fn from_rotation_translation(
        rotation: DQuat,
        translation: DVec3,
    ) -> Result<Self, TransformError> {
        if !rotation.is_finite() || rotation.length_squared() <= f64::EPSILON {
            return Err(TransformError::DegenerateRotation);
        }
        Self::from_matrix(DMat4::from_rotation_translation(rotation.normalize(), translation))
    }

    /// Create a pure translation.
    pub fn from_translation(translation: DVec3) -> Result<Self, TransformError> {
        Self::from_matrix(DMat4::from_translation(translation))
    }

    /// Get the underlying matrix.
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Get the matrix as sixteen row-major scalars.
    pub fn to_row_major(&self) -> [f64; 16] {
        self.matrix.transpose().to_cols_array()
    }

    /// Get the translation part.
    pub fn translation(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
    }

    /// Map a point from item-local space to world space.
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.matrix.transform_point3(point)
    }

    /// Map a direction from item-local space to world space (no translation).
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.matrix.transform_vector3(vector)
    }

    /// The world-to-local transform.
    pub fn inverse(&self) -> Pose {
        Pose { matrix: self.matrix.inverse() }
    }

    /// Compose with a transform expressed in this pose's local frame.
    ///
    /// The product can still underflow to a singular matrix, so it is
    /// validated again.
    pub fn then(&self, local: &Pose) -> Result<Pose, TransformError> {
        Self::from_matrix(self.matrix * local.matrix)
    }
}

/// Convert sixteen row-major scalars into a pose.
pub fn pose_from_scalars(values: &[f64; 16]) -> Result<Pose, TransformError> {
    Pose::from_row_major(*values)
}

impl TryFrom<[f64; 16]> for Pose {
    type Error = TransformError;

    fn try_from(values: [f64; 16]) -> Result<Self, Self::Error> {
        Pose::from_row_major(values)
    }
}

impl From<Pose> for [f64; 16] {
    fn from(pose: Pose) -> Self {
        pose.to_row_major()
    }
}

impl TryFrom<DMat4> for Pose {
    type Error = TransformError;

    fn try_from(matrix: DMat4) -> Result<Self, Self::Error> {
        Pose::from_matrix(matrix)
    }
}

/// Bounding extents of an item along its local x, y and z axes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Dimension {
    extents: DVec3,
}

impl Dimension {
    /// Create a dimension from three extents.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, DimensionError> {
        Self::from_vec(DVec3::new(x, y, z))
    }

    /// Create a dimension from a vector of extents.
    pub fn from_vec(extents: DVec3) -> Result<Self, DimensionError> {
        for (axis, value) in ['x', 'y', 'z'].into_iter().zip(extents.to_array()) {
            if !value.is_finite() {
                return Err(DimensionError::NonFinite { axis });
            }
            if value < 0.0 {
                return Err(DimensionError::Negative { axis, value });
            }
        }
        Ok(Self { extents })
    }

    pub fn x(&self) -> f64 {
        self.extents.x
    }

    pub fn y(&self) -> f64 {
        self.extents.y
    }

    pub fn z(&self) -> f64 {
        self.extents.z
    }

    /// Get the extents as a vector.
    pub fn extents(&self) -> DVec3 {
        self.extents
    }

    /// The smallest of the three extents.
    pub fn min_extent(&self) -> f64 {
        self.extents.min_element()
    }

    /// The largest of the three extents.
    pub fn max_extent(&self) -> f64 {
        self.extents.max_element()
    }
}

impl TryFrom<[f64; 3]> for Dimension {
    type Error = DimensionError;

    fn try_from(values: [f64; 3]) -> Result<Self, Self::Error> {
        Dimension::from_vec(DVec3::from_array(values))
    }
}

impl From<Dimension> for [f64; 3] {
    fn from(dimension: Dimension) -> Self {
        dimension.extents.to_array()
    }
}
