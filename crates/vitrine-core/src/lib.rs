//! Core types and utilities for Vitrine scene items.
//!
//! This crate provides the foundational value types shared by the other
//! vitrine crates:
//! - `Pose`: a validated 4×4 homogeneous item-to-world transform
//! - `Dimension`: the bounding extents of an item
//! - `BoundingBox`: axis-aligned bounds in local or world space
//! - Error types
//! - Logger initialization

pub mod bounds;
pub mod errors;
pub mod logging;
pub mod pose;

pub use bounds::BoundingBox;
pub use errors::*;
pub use pose::{pose_from_scalars, Dimension, Pose};

/// Re-export of the math types used throughout the public API.
pub use glam::{DMat4, DQuat, DVec3};
