//! Pointer input types
//!
//! The core runs a single-touch interaction model: per tick it consumes at
//! most one pointer-down transition, always the first one delivered, and
//! never reacts to movement or release.

use crate::foundation::math::Vec2;

/// Phase of a pointer over its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer touched down this tick
    Began,
    /// The pointer moved while down
    Moved,
    /// The pointer lifted this tick
    Ended,
}

/// A single pointer/touch sample delivered by the platform layer
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Platform pointer identifier (first finger and mouse are both 0)
    pub id: u32,
    /// Screen-space position in pixels, origin top-left
    pub position: Vec2,
    /// Lifecycle phase this sample represents
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Convenience constructor for a pointer-down sample
    #[must_use]
    pub fn began(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
            phase: PointerPhase::Began,
        }
    }
}

/// All pointer samples delivered for one tick
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pointers: Vec<PointerEvent>,
}

impl FrameInput {
    /// Create an empty frame
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pointer sample
    pub fn push(&mut self, event: PointerEvent) {
        self.pointers.push(event);
    }

    /// First pointer that went down this tick, if any
    ///
    /// Later pointer-downs in the same tick are deliberately dropped — the
    /// single-touch model only ever considers the first active pointer.
    #[must_use]
    pub fn primary_down(&self) -> Option<&PointerEvent> {
        self.pointers
            .iter()
            .find(|pointer| pointer.phase == PointerPhase::Began)
    }

    /// Whether no samples were delivered this tick
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

impl From<Vec<PointerEvent>> for FrameInput {
    fn from(pointers: Vec<PointerEvent>) -> Self {
        Self { pointers }
    }
}
