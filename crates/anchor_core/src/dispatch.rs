//! Input classification and action execution
//!
//! Turns one pointer-down event into exactly one of three things: place a
//! new anchor, remove the anchor that was tapped, or do nothing. The
//! priority order is fixed: UI consumes first, then anchor hits, then
//! placement into empty space. Classification is pure — it reads
//! collaborators and selection state but mutates nothing — so every branch
//! is testable without an engine.

use crate::anchor::{AnchorHandle, AnchorRegistry};
use crate::backend::{AffordancePresenter, PayloadFactory, RayProvider, UiHitTester, WorldRaycaster};
use crate::config::PlacementConfig;
use crate::distance::DistanceController;
use crate::foundation::math::Vec3;
use crate::input::PointerEvent;
use crate::spawn::{SpawnKind, SpawnSelector};

/// Why an event was not actionable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The pointer was over an interactive UI element
    UiConsumed,
    /// No camera ray was available (no camera or tracking session)
    CollaboratorUnavailable,
    /// Empty space was tapped with no spawn kind selected
    NoSelection,
}

/// What a pointer-down event resolved to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Create a new anchor holding `kind` at `position`
    Place {
        /// World-space spawn point
        position: Vec3,
        /// Payload kind to spawn
        kind: SpawnKind,
    },
    /// Remove the anchor whose payload the ray hit
    Remove {
        /// Handle of the tapped anchor
        handle: AnchorHandle,
    },
    /// The event is not actionable
    Ignored(IgnoreReason),
}

/// What actually happened after executing a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new anchor was created
    Placed(AnchorHandle),
    /// An existing anchor was removed
    Removed(AnchorHandle),
    /// Nothing changed
    Ignored,
}

/// Classifies pointer-down events and executes the resulting action
///
/// Holds only the two policy flags read at classification time; all live
/// state stays in the registry, selector, and distance controller it is
/// handed each call.
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    sticky_selection: bool,
    use_surface_hit: bool,
}

impl InputDispatcher {
    /// Create a dispatcher with the configured placement policies
    #[must_use]
    pub fn new(config: &PlacementConfig) -> Self {
        Self {
            sticky_selection: config.sticky_selection,
            use_surface_hit: config.use_surface_hit,
        }
    }

    /// Classify one pointer-down event
    ///
    /// Priority order:
    /// 1. UI hit test — UI always wins over world interaction.
    /// 2. No camera ray — degrade to ignored, never fail.
    /// 3. Ray hit on an anchored payload — removal.
    /// 4. Selected kind — placement at the effective ray distance (or the
    ///    surface hit point when configured).
    /// 5. Otherwise ignored.
    pub fn classify(
        &self,
        pointer: &PointerEvent,
        ui: &dyn UiHitTester,
        camera: &dyn RayProvider,
        world: &dyn WorldRaycaster,
        selector: &SpawnSelector,
        distance: &DistanceController,
    ) -> Classification {
        if ui.is_pointer_over_ui(pointer) {
            return Classification::Ignored(IgnoreReason::UiConsumed);
        }

        let Some(ray) = camera.screen_point_to_ray(pointer.position) else {
            log::debug!("no camera ray for pointer {}, ignoring", pointer.id);
            return Classification::Ignored(IgnoreReason::CollaboratorUnavailable);
        };

        let hit = world.raycast(&ray);
        if let Some(handle) = hit.and_then(|h| h.anchor) {
            return Classification::Remove { handle };
        }

        let Some(kind) = selector.current() else {
            return Classification::Ignored(IgnoreReason::NoSelection);
        };

        let position = match hit {
            Some(hit) if self.use_surface_hit => hit.point,
            _ => ray.point_at(distance.effective_distance()),
        };
        Classification::Place { position, kind }
    }

    /// Execute a classification against the registry
    ///
    /// `engine` provides both the payload factory (for creation/destruction
    /// side effects) and the affordance presenter (for selection
    /// consumption under one-shot policy).
    pub fn execute<E>(
        &self,
        classification: Classification,
        registry: &mut AnchorRegistry,
        selector: &mut SpawnSelector,
        engine: &mut E,
    ) -> Outcome
    where
        E: PayloadFactory + AffordancePresenter,
    {
        match classification {
            Classification::Place { position, kind } => {
                let handle = registry.create(position, kind, &mut *engine);
                if !self.sticky_selection {
                    selector.consume_after_placement(&mut *engine);
                }
                Outcome::Placed(handle)
            }
            Classification::Remove { handle } => {
                if registry.remove(handle, &mut *engine) {
                    Outcome::Removed(handle)
                } else {
                    // Hit test produced a handle that died in the meantime
                    Outcome::Ignored
                }
            }
            Classification::Ignored(reason) => {
                log::trace!("event ignored: {reason:?}");
                Outcome::Ignored
            }
        }
    }
}
