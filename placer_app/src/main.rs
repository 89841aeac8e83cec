//! Desk demo for the anchor placement core
//!
//! Runs a scripted interaction against the simulated backend and logs every
//! outcome: select a kind, tap to place, tap a payload to remove it, drag
//! the distance slider, toggle the point cloud, clear everything. The whole
//! command + dispatch path runs exactly as it would behind a device camera.

mod sim;

use std::error::Error;
use std::path::Path;

use anchor_core::prelude::*;
use rand::Rng;

use crate::sim::SimulatedArBackend;

fn main() -> Result<(), Box<dyn Error>> {
    anchor_core::foundation::logging::init();

    let config = load_config()?;
    config.validate()?;

    let backend = SimulatedArBackend::new(1080.0, 1920.0);
    let mut session = PlacementSession::new(&config, backend);

    run_script(&mut session);

    log::info!(
        "demo finished after {} ticks, {} anchors live",
        session.tick(),
        session.anchor_count()
    );
    Ok(())
}

/// Load the placement config from the first CLI argument (default
/// `placer.toml`), falling back to defaults when the file is absent.
fn load_config() -> Result<PlacementConfig, ConfigError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "placer_app/placer.toml".to_string());
    if Path::new(&path).exists() {
        log::info!("loading config from {path}");
        PlacementConfig::load_from_file(&path)
    } else {
        log::info!("no config file at {path}, using defaults");
        Ok(PlacementConfig::default())
    }
}

fn tap(session: &mut PlacementSession<SimulatedArBackend>, x: f32, y: f32) -> Outcome {
    let mut input = FrameInput::new();
    input.push(PointerEvent::began(0, x, y));
    let outcome = session.process_frame(&input);
    log::info!("tap ({x:.0}, {y:.0}) -> {outcome:?}");
    outcome
}

fn run_script(session: &mut PlacementSession<SimulatedArBackend>) {
    let (cx, cy) = session.backend().center();
    let (px, py) = session.backend().panel_point();
    let (world_w, world_h) = session.backend().world_area();

    // Keep the tracked-feature overlay visible while placing
    session.apply(UiCommand::ToggleOverlay(true));

    session.apply(UiCommand::SelectKind(SpawnKind::Cube));
    tap(session, cx, cy);

    // A tap on the control panel must never place anything
    tap(session, px, py);

    // Scatter a few more cubes around the view
    let mut rng = rand::thread_rng();
    for _ in 0..4 {
        let x = rng.gen_range(world_w * 0.1..world_w * 0.9);
        let y = rng.gen_range(world_h * 0.1..world_h * 0.9);
        tap(session, x, y);
    }
    log::info!("{} anchors after scatter placement", session.anchor_count());

    // Tapping the first cube again removes it
    tap(session, cx, cy);

    // Push the next placements farther out and switch payloads
    session.apply(UiCommand::SetDistance(3.5));
    session.apply(UiCommand::SelectKind(SpawnKind::Sphere));
    log::info!(
        "selection locked control: {:?}",
        session.backend().disabled_kind()
    );
    tap(session, cx, cy);

    session.apply(UiCommand::ToggleOverlay(false));
    log::info!(
        "overlay active: {}, payloads instantiated: {}",
        session.backend().overlay_active(),
        session.backend().payload_count()
    );

    session.apply(UiCommand::RemoveAll);
}
