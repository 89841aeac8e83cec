//! Synchronous UI command interface
//!
//! Instead of registering callbacks on individual widgets, UI layers
//! translate control interactions into [`UiCommand`] values and hand them to
//! [`crate::PlacementSession::apply`]. The core stays decoupled from any
//! widget toolkit, and every command is testable as plain data.

use crate::spawn::SpawnKind;

/// A user-facing control interaction, dispatched synchronously into the core
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiCommand {
    /// Choose the payload kind the next placement spawns
    SelectKind(SpawnKind),
    /// Drop the current selection without placing anything
    ClearSelection,
    /// Set the base placement distance from the slider
    SetDistance(f32),
    /// Remove every live anchor
    RemoveAll,
    /// Show or hide the tracked-feature overlay
    ToggleOverlay(bool),
}
