//! Math utilities and types
//!
//! Fundamental math types for screen-space input and world-space placement.

pub use nalgebra::{Quaternion, Unit, Vector2, Vector3};

/// 2D vector type (screen-space positions, pixels)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (world-space positions and directions)
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// World-space pose a payload is parented to
///
/// Anchors carry a full pose rather than a bare position so a payload
/// factory can orient the instantiated object without a second query.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position, rotation left at identity
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}
