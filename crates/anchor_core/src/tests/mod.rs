//! Crate-level scenario tests
//!
//! Drive a whole placement session against a small simulated backend: a
//! pinhole camera, sphere colliders for placed payloads, and a UI bar
//! across the top of the screen.

mod placement_flow;
mod support;
