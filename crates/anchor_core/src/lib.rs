//! # Anchor Core
//!
//! An engine-agnostic core for tap-to-place AR interactions: tap empty space
//! to place a virtual object at a 3D position, tap a placed object to remove
//! it, pick which object type the next tap spawns.
//!
//! The crate owns the anchor lifecycle and the input-to-action dispatch
//! logic. Everything engine-shaped — camera rays, physical-world hit tests,
//! UI hit tests, payload instantiation — sits behind the traits in
//! [`backend`], so the whole core runs deterministically in tests and on a
//! desk without a device.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anchor_core::prelude::*;
//!
//! # struct MyBackend;
//! # impl RayProvider for MyBackend {
//! #     fn screen_point_to_ray(&self, _screen: Vec2) -> Option<Ray> { None }
//! # }
//! # impl WorldRaycaster for MyBackend {
//! #     fn raycast(&self, _ray: &Ray) -> Option<WorldHit> { None }
//! # }
//! # impl UiHitTester for MyBackend {
//! #     fn is_pointer_over_ui(&self, _pointer: &PointerEvent) -> bool { false }
//! # }
//! # impl PayloadFactory for MyBackend {
//! #     fn instantiate(&mut self, _a: AnchorHandle, _k: SpawnKind, _p: &Transform) {}
//! #     fn destroy(&mut self, _a: AnchorHandle) {}
//! # }
//! # impl OverlayToggle for MyBackend {
//! #     fn set_overlay_active(&mut self, _active: bool) {}
//! # }
//! # impl AffordancePresenter for MyBackend {
//! #     fn set_interactive(&mut self, _k: SpawnKind, _i: bool) {}
//! # }
//! let config = PlacementConfig::default();
//! let mut session = PlacementSession::new(&config, MyBackend);
//!
//! session.apply(UiCommand::SelectKind(SpawnKind::Cube));
//!
//! // Once per tick, feed the frame's pointer samples:
//! let mut input = FrameInput::new();
//! input.push(PointerEvent::began(0, 512.0, 384.0));
//! let outcome = session.process_frame(&input);
//! println!("{outcome:?}, {} anchors live", session.anchor_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod anchor;
pub mod backend;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod distance;
pub mod foundation;
pub mod geometry;
pub mod input;
pub mod spawn;

mod session;

#[cfg(test)]
mod tests;

pub use session::PlacementSession;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        anchor::{Anchor, AnchorHandle, AnchorRegistry},
        backend::{
            AffordancePresenter, ArBackend, OverlayToggle, PayloadFactory, RayProvider,
            UiHitTester, WorldRaycaster,
        },
        commands::UiCommand,
        config::{Config, ConfigError, PlacementConfig},
        dispatch::{Classification, IgnoreReason, InputDispatcher, Outcome},
        distance::DistanceController,
        foundation::math::{Transform, Vec2, Vec3},
        geometry::{Ray, WorldHit},
        input::{FrameInput, PointerEvent, PointerPhase},
        spawn::{SpawnKind, SpawnSelector},
        PlacementSession,
    };
}
