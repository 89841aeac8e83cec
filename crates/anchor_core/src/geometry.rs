//! Ray and hit-test primitives
//!
//! The typed vocabulary the core shares with the tracking collaborator:
//! camera rays going out, world hits coming back.

use crate::anchor::AnchorHandle;
use crate::foundation::math::Vec3;

/// A ray cast from the camera into the tracked world
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (always normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// The direction is normalized so `point_at(t)` measures world units.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance `t`
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a physical-world hit test
///
/// When the nearest intersected object is a payload parented to a live
/// anchor, `anchor` carries that anchor's handle; plain tracked surfaces
/// leave it empty. The tracking collaborator resolves the tagging — the core
/// never inspects scene objects itself.
#[derive(Debug, Clone, Copy)]
pub struct WorldHit {
    /// The point of intersection in world space
    pub point: Vec3,
    /// The surface normal at the intersection point
    pub normal: Vec3,
    /// The distance from the ray origin to the hit point
    pub distance: f32,
    /// Handle of the anchor whose payload was hit, if any
    pub anchor: Option<AnchorHandle>,
}

impl WorldHit {
    /// Creates a hit against a plain tracked surface
    #[must_use]
    pub fn surface(point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal,
            distance,
            anchor: None,
        }
    }

    /// Creates a hit against the payload of a live anchor
    #[must_use]
    pub fn on_anchor(handle: AnchorHandle, point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal,
            distance,
            anchor: Some(handle),
        }
    }

    /// Whether this hit landed on an anchored payload
    #[must_use]
    pub fn is_anchor(&self) -> bool {
        self.anchor.is_some()
    }
}
