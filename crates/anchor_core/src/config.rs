//! Configuration types and file loading
//!
//! Placement behavior is data-driven: both policy choices the interaction
//! design left open (sticky selection, surface snapping) are flags here
//! rather than hard-coded, and the distance control's range is declared
//! here rather than in the UI.

use std::ffi::OsStr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spawn::SpawnKind;

/// Configuration file loading and saving
///
/// Formats are chosen by file extension; `.toml` and `.ron` are recognized.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(OsStr::to_str) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Semantic validation failure
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Placement behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Whether a selected kind stays selected across placements
    ///
    /// `true`: the same kind places repeatedly until another is chosen.
    /// `false`: one-shot — the selection reverts to none after a placement
    /// and the next tap on empty space does nothing.
    pub sticky_selection: bool,

    /// Whether placement snaps to the detected surface hit point
    ///
    /// When `false`, objects are placed at a fixed distance along the camera
    /// ray even if a surface was hit closer or farther.
    pub use_surface_hit: bool,

    /// Lower bound of the distance control, world units
    pub min_distance: f32,

    /// Upper bound of the distance control, world units
    pub max_distance: f32,

    /// Base placement distance before the user touches the slider
    pub default_distance: f32,

    /// Fixed offset added on top of the base distance
    pub forward_offset: f32,

    /// Kind pre-selected when the session starts, if any
    pub initial_selection: Option<SpawnKind>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            sticky_selection: true,
            use_surface_hit: false,
            min_distance: 0.5,
            max_distance: 5.0,
            default_distance: 2.0,
            forward_offset: 0.0,
            initial_selection: None,
        }
    }
}

impl PlacementConfig {
    /// Set the selection stickiness policy
    #[must_use]
    pub fn with_sticky_selection(mut self, sticky: bool) -> Self {
        self.sticky_selection = sticky;
        self
    }

    /// Set whether placement snaps to surface hits
    #[must_use]
    pub fn with_surface_hit(mut self, use_surface_hit: bool) -> Self {
        self.use_surface_hit = use_surface_hit;
        self
    }

    /// Set the distance control range
    #[must_use]
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Set the default placement distance
    #[must_use]
    pub fn with_default_distance(mut self, distance: f32) -> Self {
        self.default_distance = distance;
        self
    }

    /// Set the fixed forward offset
    #[must_use]
    pub fn with_forward_offset(mut self, offset: f32) -> Self {
        self.forward_offset = offset;
        self
    }

    /// Set the kind pre-selected at session start
    #[must_use]
    pub fn with_initial_selection(mut self, kind: SpawnKind) -> Self {
        self.initial_selection = Some(kind);
        self
    }

    /// Check the configuration for semantic errors
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("default_distance", self.default_distance),
            ("forward_offset", self.forward_offset),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        if self.min_distance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_distance must be positive, got {}",
                self.min_distance
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(ConfigError::Invalid(format!(
                "min_distance {} exceeds max_distance {}",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }
}

impl Config for PlacementConfig {}
