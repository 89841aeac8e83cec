//! Placement distance control
//!
//! Maps the continuous UI distance control onto the distance used when a
//! placement falls back to a fixed point along the camera ray.

use crate::config::PlacementConfig;

/// Maps a continuous control value to an effective placement distance
#[derive(Debug, Clone)]
pub struct DistanceController {
    base: f32,
    min: f32,
    max: f32,
    forward_offset: f32,
}

impl DistanceController {
    /// Create a controller from the placement configuration
    ///
    /// The initial base distance is the configured default, clamped into the
    /// configured range like any slider value would be.
    #[must_use]
    pub fn from_config(config: &PlacementConfig) -> Self {
        Self {
            base: config
                .default_distance
                .clamp(config.min_distance, config.max_distance),
            min: config.min_distance,
            max: config.max_distance,
            forward_offset: config.forward_offset,
        }
    }

    /// Set the base distance from the UI control, clamped to the range
    ///
    /// Non-finite values are discarded; a broken slider must never poison
    /// every subsequent placement.
    pub fn set_base_distance(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite distance {value}");
            return;
        }
        self.base = value.clamp(self.min, self.max);
        log::trace!("base distance set to {:.2}", self.base);
    }

    /// The clamped control value
    #[must_use]
    pub fn base_distance(&self) -> f32 {
        self.base
    }

    /// Distance used to compute a spawn point along the camera ray
    #[must_use]
    pub fn effective_distance(&self) -> f32 {
        self.base + self.forward_offset
    }

    /// The recognized `(min, max)` control range
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }
}
