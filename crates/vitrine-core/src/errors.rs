//! Error types for Vitrine core values.

use thiserror::Error;

/// Errors building a pose transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Invalid transform: entry at row {row}, column {column} is not finite")]
    NonFinite { row: usize, column: usize },

    #[error("Invalid transform: matrix is not invertible (determinant {determinant})")]
    Singular { determinant: f64 },

    #[error("Invalid transform: bottom row {bottom_row:?} is not [0, 0, 0, 1]")]
    NotAffine { bottom_row: [f64; 4] },

    #[error("Invalid transform: rotation quaternion is degenerate")]
    DegenerateRotation,
}

/// Errors building an item dimension.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    #[error("Invalid dimension: {axis} extent is not finite")]
    NonFinite { axis: char },

    #[error("Invalid dimension: {axis} extent {value} is negative")]
    Negative { axis: char, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TransformError::NonFinite { row: 2, column: 1 };
        assert_eq!(err.to_string(), "Invalid transform: entry at row 2, column 1 is not finite");

        let err = TransformError::NotAffine { bottom_row: [0.0, 0.0, 1.0, 1.0] };
        assert_eq!(
            err.to_string(),
            "Invalid transform: bottom row [0.0, 0.0, 1.0, 1.0] is not [0, 0, 0, 1]"
        );

        let err = DimensionError::Negative { axis: 'y', value: -0.5 };
        assert_eq!(err.to_string(), "Invalid dimension: y extent -0.5 is negative");
    }
}
