//! Spawn kind selection
//!
//! Tracks which payload type the next placement spawns and drives the
//! mutual-exclusion presentation of the selection controls: the chosen
//! kind's control goes non-interactive, every other one comes back.

use serde::{Deserialize, Serialize};

use crate::backend::AffordancePresenter;

/// The payload types a placement can spawn
///
/// A closed set: UI layers select one of these values, never an index, so
/// no out-of-range selection can reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnKind {
    /// Unit cube payload
    Cube,
    /// Unit sphere payload
    Sphere,
    /// Four-sided pyramid payload
    Pyramid,
}

impl SpawnKind {
    /// All placeable kinds, in presentation order
    pub const ALL: [Self; 3] = [Self::Cube, Self::Sphere, Self::Pyramid];
}

/// Tracks the payload kind chosen for the next placement
///
/// `None` means no valid selection: taps on empty space do nothing until a
/// kind is chosen again.
#[derive(Debug, Default)]
pub struct SpawnSelector {
    current: Option<SpawnKind>,
}

impl SpawnSelector {
    /// Create a selector with nothing chosen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The kind the next placement will spawn, if any
    #[must_use]
    pub fn current(&self) -> Option<SpawnKind> {
        self.current
    }

    /// Choose `kind` for the next placement
    ///
    /// Updates every control affordance: the chosen kind's control becomes
    /// non-interactive, all others interactive.
    pub fn select(&mut self, kind: SpawnKind, presenter: &mut dyn AffordancePresenter) {
        self.current = Some(kind);
        for candidate in SpawnKind::ALL {
            presenter.set_interactive(candidate, candidate != kind);
        }
        log::debug!("spawn kind selected: {kind:?}");
    }

    /// Drop the current selection and re-enable every control
    pub fn clear(&mut self, presenter: &mut dyn AffordancePresenter) {
        self.current = None;
        for candidate in SpawnKind::ALL {
            presenter.set_interactive(candidate, true);
        }
    }

    /// Revert to no-selection after a successful placement
    ///
    /// Only called by the dispatcher when one-shot selection is configured;
    /// sticky selection leaves the kind in place for repeat taps.
    pub fn consume_after_placement(&mut self, presenter: &mut dyn AffordancePresenter) {
        log::debug!("selection consumed after placement");
        self.clear(presenter);
    }
}
