//! Collaborator seams toward the AR/rendering engine
//!
//! The core never links against an engine. Everything it needs from one —
//! camera rays, hit tests, UI hit tests, payload instantiation, overlay
//! visibility, control affordances — is expressed as a narrow trait here.
//! Engines implement these on their integration layer; tests implement them
//! on recording fakes.

use crate::anchor::AnchorHandle;
use crate::foundation::math::{Transform, Vec2};
use crate::geometry::{Ray, WorldHit};
use crate::input::PointerEvent;
use crate::spawn::SpawnKind;

/// Computes camera rays from screen points
pub trait RayProvider {
    /// Cast a ray from the active camera through `screen`
    ///
    /// Returns `None` when no camera or tracking session is available; the
    /// dispatcher degrades the event to an ignored classification.
    fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray>;
}

/// Hit-tests rays against the tracked physical-world model
pub trait WorldRaycaster {
    /// Nearest intersection along `ray`, if anything was hit
    fn raycast(&self, ray: &Ray) -> Option<WorldHit>;
}

/// Answers whether a pointer is currently over an interactive UI element
pub trait UiHitTester {
    /// UI hit test for one pointer; `true` means the UI consumes the event
    fn is_pointer_over_ui(&self, pointer: &PointerEvent) -> bool;
}

/// Creates and destroys the visual payloads parented to anchors
pub trait PayloadFactory {
    /// Instantiate the visual payload for a freshly created anchor
    fn instantiate(&mut self, anchor: AnchorHandle, kind: SpawnKind, pose: &Transform);

    /// Destroy the visual payload of a removed anchor
    fn destroy(&mut self, anchor: AnchorHandle);
}

/// Shows or hides the tracked-feature overlay (point cloud)
pub trait OverlayToggle {
    /// Set the overlay's visibility
    fn set_overlay_active(&mut self, active: bool);
}

/// Presents the enabled/disabled state of the spawn-kind controls
pub trait AffordancePresenter {
    /// Make the control for `kind` interactive or not
    fn set_interactive(&mut self, kind: SpawnKind, interactive: bool);
}

/// Everything a placement session needs from the engine, as one bound
///
/// Blanket-implemented for any type providing the individual seams, so an
/// integration layer only implements the small traits.
pub trait ArBackend:
    RayProvider + WorldRaycaster + UiHitTester + PayloadFactory + OverlayToggle + AffordancePresenter
{
}

impl<T> ArBackend for T where
    T: RayProvider + WorldRaycaster + UiHitTester + PayloadFactory + OverlayToggle + AffordancePresenter
{
}
