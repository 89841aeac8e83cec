//! End-to-end placement scenarios against the simulated backend

use approx::assert_relative_eq;

use super::support::SimBackend;
use crate::commands::UiCommand;
use crate::config::PlacementConfig;
use crate::dispatch::Outcome;
use crate::input::{FrameInput, PointerEvent};
use crate::spawn::SpawnKind;
use crate::PlacementSession;

fn tap(x: f32, y: f32) -> FrameInput {
    FrameInput::from(vec![PointerEvent::began(0, x, y)])
}

fn session() -> PlacementSession<SimBackend> {
    PlacementSession::new(&PlacementConfig::default(), SimBackend::new())
}

#[test]
fn test_tap_places_then_tap_on_payload_removes() {
    let mut session = session();
    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    let (cx, cy) = session.backend().center();

    // Tap empty space: anchor lands 2m straight ahead
    let outcome = session.process_frame(&tap(cx, cy));
    let Outcome::Placed(handle) = outcome else {
        panic!("expected placement, got {outcome:?}");
    };
    assert_eq!(session.anchor_count(), 1);
    let anchor = session.registry().get(handle).expect("anchor is live");
    assert_relative_eq!(anchor.position().z, 2.0, epsilon = 1e-5);

    // Tap the same spot: the ray now hits the payload's collider
    let outcome = session.process_frame(&tap(cx, cy));
    assert_eq!(outcome, Outcome::Removed(handle));
    assert_eq!(session.anchor_count(), 0);
    assert!(session.backend().colliders.is_empty());
}

#[test]
fn test_tap_without_selection_does_nothing() {
    let mut session = session();
    let (cx, cy) = session.backend().center();

    assert_eq!(session.process_frame(&tap(cx, cy)), Outcome::Ignored);
    assert_eq!(session.anchor_count(), 0);
}

#[test]
fn test_ui_tap_is_consumed_even_with_selection() {
    let mut session = session();
    session.apply(UiCommand::SelectKind(SpawnKind::Sphere));
    let (ux, uy) = session.backend().ui_point();

    assert_eq!(session.process_frame(&tap(ux, uy)), Outcome::Ignored);
    assert_eq!(session.anchor_count(), 0);
}

#[test]
fn test_single_touch_only_first_pointer_counts() {
    let mut session = session();
    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    let (cx, cy) = session.backend().center();

    // Two fingers down in the same tick: one anchor
    let input = FrameInput::from(vec![
        PointerEvent::began(0, cx, cy),
        PointerEvent::began(1, cx + 200.0, cy),
    ]);
    session.process_frame(&input);
    assert_eq!(session.anchor_count(), 1);
}

#[test]
fn test_missing_camera_is_survivable() {
    let mut backend = SimBackend::new();
    backend.camera_available = false;
    let mut session = PlacementSession::new(&PlacementConfig::default(), backend);
    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    let (cx, cy) = session.backend().center();

    assert_eq!(session.process_frame(&tap(cx, cy)), Outcome::Ignored);
    assert_eq!(session.tick(), 1);
    assert_eq!(session.anchor_count(), 0);
}

#[test]
fn test_distance_command_moves_the_spawn_point() {
    let mut session = session();
    session.apply(UiCommand::SelectKind(SpawnKind::Pyramid));
    session.apply(UiCommand::SetDistance(3.5));
    let (cx, cy) = session.backend().center();

    let Outcome::Placed(handle) = session.process_frame(&tap(cx, cy)) else {
        panic!("expected placement");
    };
    let anchor = session.registry().get(handle).expect("anchor is live");
    assert_relative_eq!(anchor.position().z, 3.5, epsilon = 1e-5);
}

#[test]
fn test_distance_command_clamps_to_range() {
    let mut session = session();
    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    session.apply(UiCommand::SetDistance(50.0));

    assert_relative_eq!(session.effective_distance(), 5.0);
}

#[test]
fn test_remove_all_after_scattered_placements() {
    let mut session = session();
    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    let (cx, cy) = session.backend().center();

    // Scatter taps far enough apart that no tap hits an earlier payload
    for offset in [-300.0, -150.0, 0.0, 150.0, 300.0] {
        session.process_frame(&tap(cx + offset, cy));
    }
    assert_eq!(session.anchor_count(), 5);

    session.apply(UiCommand::RemoveAll);
    assert_eq!(session.anchor_count(), 0);
    assert!(session.backend().colliders.is_empty());
}

#[test]
fn test_overlay_commands_reach_the_backend() {
    let mut session = session();
    session.apply(UiCommand::ToggleOverlay(true));
    session.apply(UiCommand::ToggleOverlay(false));

    assert_eq!(session.backend().overlay_calls, vec![true, false]);
}

#[test]
fn test_initial_selection_from_config() {
    let config = PlacementConfig::default().with_initial_selection(SpawnKind::Sphere);
    let mut session = PlacementSession::new(&config, SimBackend::new());
    let (cx, cy) = session.backend().center();

    // Placeable immediately, no select command needed
    assert_eq!(session.selected_kind(), Some(SpawnKind::Sphere));
    assert!(matches!(
        session.process_frame(&tap(cx, cy)),
        Outcome::Placed(_)
    ));
    // The pre-selected control starts out non-interactive
    assert!(!session.backend().interactive[&SpawnKind::Sphere]);
}

#[test]
fn test_one_shot_policy_requires_reselection() {
    let config = PlacementConfig::default().with_sticky_selection(false);
    let mut session = PlacementSession::new(&config, SimBackend::new());
    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    let (cx, cy) = session.backend().center();

    assert!(matches!(
        session.process_frame(&tap(cx, cy)),
        Outcome::Placed(_)
    ));
    assert_eq!(session.selected_kind(), None);

    // Second tap at a fresh spot does nothing until reselected
    assert_eq!(session.process_frame(&tap(cx + 200.0, cy)), Outcome::Ignored);
    assert_eq!(session.anchor_count(), 1);

    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    assert!(matches!(
        session.process_frame(&tap(cx + 200.0, cy)),
        Outcome::Placed(_)
    ));
}
