//! Simulated AR backend shared by the scenario tests

use std::collections::HashMap;

use crate::anchor::AnchorHandle;
use crate::backend::{
    AffordancePresenter, OverlayToggle, PayloadFactory, RayProvider, UiHitTester, WorldRaycaster,
};
use crate::foundation::math::{Transform, Vec2, Vec3};
use crate::geometry::{Ray, WorldHit};
use crate::input::PointerEvent;
use crate::spawn::SpawnKind;

/// Radius of the sphere collider stood up for each instantiated payload
const PAYLOAD_RADIUS: f32 = 0.2;

/// Screen height of the UI bar along the top edge
const UI_BAR_HEIGHT: f32 = 60.0;

/// A desk-test backend: pinhole camera at the origin looking down +z,
/// payloads tracked as sphere colliders, UI occupying the top of the screen
pub struct SimBackend {
    width: f32,
    height: f32,
    focal: f32,
    /// Set to false to simulate a missing camera/tracking session
    pub camera_available: bool,
    /// Sphere colliders for live payloads, keyed by owning anchor
    pub colliders: HashMap<AnchorHandle, Vec3>,
    /// Overlay visibility values received, in order
    pub overlay_calls: Vec<bool>,
    /// Latest interactivity per spawn-kind control
    pub interactive: HashMap<SpawnKind, bool>,
}

impl SimBackend {
    pub fn new() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            focal: 600.0,
            camera_available: true,
            colliders: HashMap::new(),
            overlay_calls: Vec::new(),
            interactive: HashMap::new(),
        }
    }

    /// Screen center, which maps to the straight-ahead ray
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// A point inside the UI bar
    pub fn ui_point(&self) -> (f32, f32) {
        (self.width / 2.0, UI_BAR_HEIGHT / 2.0)
    }

    fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
        let oc = ray.origin - center;
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - radius * radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / 2.0;
        let t2 = (-b + sqrt_discriminant) / 2.0;
        if t1 > 0.0 {
            Some(t1)
        } else if t2 > 0.0 {
            Some(t2)
        } else {
            None
        }
    }
}

impl RayProvider for SimBackend {
    fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray> {
        if !self.camera_available {
            return None;
        }
        let direction = Vec3::new(
            (screen.x - self.width / 2.0) / self.focal,
            -(screen.y - self.height / 2.0) / self.focal,
            1.0,
        );
        Some(Ray::new(Vec3::zeros(), direction))
    }
}

impl WorldRaycaster for SimBackend {
    fn raycast(&self, ray: &Ray) -> Option<WorldHit> {
        let mut nearest: Option<(AnchorHandle, f32)> = None;
        for (&handle, &center) in &self.colliders {
            if let Some(t) = Self::intersect_sphere(ray, center, PAYLOAD_RADIUS) {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((handle, t));
                }
            }
        }
        nearest.map(|(handle, t)| {
            let point = ray.point_at(t);
            WorldHit::on_anchor(handle, point, (point - ray.origin).normalize(), t)
        })
    }
}

impl UiHitTester for SimBackend {
    fn is_pointer_over_ui(&self, pointer: &PointerEvent) -> bool {
        pointer.position.y <= UI_BAR_HEIGHT
    }
}

impl PayloadFactory for SimBackend {
    fn instantiate(&mut self, anchor: AnchorHandle, _kind: SpawnKind, pose: &Transform) {
        self.colliders.insert(anchor, pose.position);
    }

    fn destroy(&mut self, anchor: AnchorHandle) {
        self.colliders.remove(&anchor);
    }
}

impl OverlayToggle for SimBackend {
    fn set_overlay_active(&mut self, active: bool) {
        self.overlay_calls.push(active);
    }
}

impl AffordancePresenter for SimBackend {
    fn set_interactive(&mut self, kind: SpawnKind, interactive: bool) {
        self.interactive.insert(kind, interactive);
    }
}
