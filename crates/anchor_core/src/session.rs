//! Placement session orchestration
//!
//! Owns the registry, selector, distance controller, and dispatcher, and
//! drives them from per-tick input and UI commands. This is the one type an
//! integration layer talks to: hand it a backend, feed it frames and
//! commands, read its state back.

use crate::anchor::AnchorRegistry;
use crate::backend::ArBackend;
use crate::commands::UiCommand;
use crate::config::PlacementConfig;
use crate::dispatch::{InputDispatcher, Outcome};
use crate::distance::DistanceController;
use crate::input::FrameInput;
use crate::spawn::{SpawnKind, SpawnSelector};

/// Coordinates the anchor lifecycle against one AR backend
///
/// Single-threaded and frame-driven: call [`Self::process_frame`] exactly
/// once per tick, after the backend's hit-test state is current for that
/// tick and before rendering. At most one pointer-down is acted on per
/// call; every collaborator call is synchronous.
pub struct PlacementSession<B: ArBackend> {
    registry: AnchorRegistry,
    selector: SpawnSelector,
    distance: DistanceController,
    dispatcher: InputDispatcher,
    backend: B,
    tick: u64,
}

impl<B: ArBackend> PlacementSession<B> {
    /// Create a session over `backend` with the given configuration
    pub fn new(config: &PlacementConfig, mut backend: B) -> Self {
        let mut selector = SpawnSelector::new();
        if let Some(kind) = config.initial_selection {
            selector.select(kind, &mut backend);
        }
        log::info!(
            "placement session ready (sticky: {}, surface snap: {})",
            config.sticky_selection,
            config.use_surface_hit
        );
        Self {
            registry: AnchorRegistry::new(),
            selector,
            distance: DistanceController::from_config(config),
            dispatcher: InputDispatcher::new(config),
            backend,
            tick: 0,
        }
    }

    /// Process one tick's pointer input
    ///
    /// Classifies the first pointer-down of the frame (if any) and executes
    /// the resulting action. Never fails: mis-taps and missing collaborators
    /// resolve to [`Outcome::Ignored`], and the next tick proceeds normally.
    pub fn process_frame(&mut self, input: &FrameInput) -> Outcome {
        self.tick += 1;

        let Some(pointer) = input.primary_down() else {
            return Outcome::Ignored;
        };

        let classification = self.dispatcher.classify(
            pointer,
            &self.backend,
            &self.backend,
            &self.backend,
            &self.selector,
            &self.distance,
        );
        let outcome = self.dispatcher.execute(
            classification,
            &mut self.registry,
            &mut self.selector,
            &mut self.backend,
        );
        if outcome != Outcome::Ignored {
            log::debug!("tick {}: {outcome:?}", self.tick);
        }
        outcome
    }

    /// Apply one UI command
    pub fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::SelectKind(kind) => self.selector.select(kind, &mut self.backend),
            UiCommand::ClearSelection => self.selector.clear(&mut self.backend),
            UiCommand::SetDistance(value) => self.distance.set_base_distance(value),
            UiCommand::RemoveAll => self.registry.clear(&mut self.backend),
            UiCommand::ToggleOverlay(active) => {
                log::debug!("overlay {}", if active { "shown" } else { "hidden" });
                self.backend.set_overlay_active(active);
            }
        }
    }

    /// Number of live anchors
    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.registry.count()
    }

    /// The kind the next placement will spawn, if any
    #[must_use]
    pub fn selected_kind(&self) -> Option<SpawnKind> {
        self.selector.current()
    }

    /// The distance currently used for ray-distance placement
    #[must_use]
    pub fn effective_distance(&self) -> f32 {
        self.distance.effective_distance()
    }

    /// Ticks processed so far
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Read access to the anchor registry
    #[must_use]
    pub fn registry(&self) -> &AnchorRegistry {
        &self.registry
    }

    /// Read access to the backend
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
