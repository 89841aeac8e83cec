//! Simulated AR backend
//!
//! Stands in for a device: a pinhole camera fixed at head height looking
//! forward, a flat tracked floor, sphere colliders for every payload the
//! session instantiates, and a control panel along the bottom edge of the
//! screen. Enough physicality that taps, removals, and surface snapping all
//! behave like they would on hardware.

use std::collections::HashMap;

use anchor_core::prelude::*;

/// Radius of the collider stood up for each payload
const PAYLOAD_RADIUS: f32 = 0.15;

/// Screen height of the control panel along the bottom edge, pixels
const PANEL_HEIGHT: f32 = 220.0;

/// A payload the factory has instantiated
#[derive(Debug)]
pub struct Payload {
    pub kind: SpawnKind,
    pub position: Vec3,
}

/// Simulated device backend
pub struct SimulatedArBackend {
    width: f32,
    height: f32,
    focal: f32,
    camera_position: Vec3,
    floor_y: f32,
    payloads: HashMap<AnchorHandle, Payload>,
    overlay_active: bool,
    interactive: HashMap<SpawnKind, bool>,
}

impl SimulatedArBackend {
    /// Create a backend for a `width`×`height` pixel screen
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            focal: width.max(height),
            camera_position: Vec3::new(0.0, 1.4, 0.0),
            floor_y: 0.0,
            payloads: HashMap::new(),
            overlay_active: false,
            interactive: HashMap::new(),
        }
    }

    /// Screen center
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// A point inside the control panel
    pub fn panel_point(&self) -> (f32, f32) {
        (self.width / 2.0, self.height - PANEL_HEIGHT / 2.0)
    }

    /// Usable (non-panel) screen size, for scattering taps
    pub fn world_area(&self) -> (f32, f32) {
        (self.width, self.height - PANEL_HEIGHT)
    }

    /// Payloads currently instantiated
    pub fn payload_count(&self) -> usize {
        self.payloads.len()
    }

    /// Whether the point-cloud overlay is shown
    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }

    /// The spawn-kind control currently locked by the selection, if any
    pub fn disabled_kind(&self) -> Option<SpawnKind> {
        self.interactive
            .iter()
            .find(|(_, &interactive)| !interactive)
            .map(|(&kind, _)| kind)
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
        let near = (-b - sqrt_discriminant) / 2.0;
        let far = (-b + sqrt_discriminant) / 2.0;
        if near > 0.0 {
            Some(near)
        } else if far > 0.0 {
            Some(far)
        } else {
            None
        }
    }

    fn intersect_floor(&self, ray: &Ray) -> Option<f32> {
        // Plane y = floor_y; only rays pointing downward can hit it
        if ray.direction.y.abs() < 1e-6 {
            return None;
        }
        let t = (self.floor_y - ray.origin.y) / ray.direction.y;
        (t > 0.0).then_some(t)
    }
}

impl RayProvider for SimulatedArBackend {
    fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray> {
        let direction = Vec3::new(
            (screen.x - self.width / 2.0) / self.focal,
            -(screen.y - self.height / 2.0) / self.focal,
            1.0,
        );
        Some(Ray::new(self.camera_position, direction))
    }
}

impl WorldRaycaster for SimulatedArBackend {
    fn raycast(&self, ray: &Ray) -> Option<WorldHit> {
        // Nearest payload collider wins over the floor
        let mut nearest: Option<(AnchorHandle, f32)> = None;
        for (&handle, payload) in &self.payloads {
            if let Some(t) = Self::intersect_sphere(ray, payload.position, PAYLOAD_RADIUS) {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((handle, t));
                }
            }
        }
        if let Some((handle, t)) = nearest {
            let point = ray.point_at(t);
            let normal = (point - ray.origin).normalize();
            return Some(WorldHit::on_anchor(handle, point, normal, t));
        }
        self.intersect_floor(ray)
            .map(|t| WorldHit::surface(ray.point_at(t), Vec3::y(), t))
    }
}

impl UiHitTester for SimulatedArBackend {
    fn is_pointer_over_ui(&self, pointer: &PointerEvent) -> bool {
        pointer.position.y >= self.height - PANEL_HEIGHT
    }
}

impl PayloadFactory for SimulatedArBackend {
    fn instantiate(&mut self, anchor: AnchorHandle, kind: SpawnKind, pose: &Transform) {
        self.payloads.insert(
            anchor,
            Payload {
                kind,
                position: pose.position,
            },
        );
    }

    fn destroy(&mut self, anchor: AnchorHandle) {
        if let Some(payload) = self.payloads.remove(&anchor) {
            log::debug!("payload torn down: {:?}", payload.kind);
        }
    }
}

impl OverlayToggle for SimulatedArBackend {
    fn set_overlay_active(&mut self, active: bool) {
        self.overlay_active = active;
    }
}

impl AffordancePresenter for SimulatedArBackend {
    fn set_interactive(&mut self, kind: SpawnKind, interactive: bool) {
        self.interactive.insert(kind, interactive);
    }
}
