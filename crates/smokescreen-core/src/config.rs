//! Backdrop configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{SHAPE_COUNT, SMOKE_PARTICLE_COUNT};
use crate::error::{BackdropError, Result};
use crate::types::Viewport;

/// Configuration for starting a backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// RNG seed. Same seed = same animation.
    pub seed: u64,
    /// Number of smoke particles in the pool.
    pub particle_count: usize,
    /// Number of rotating wireframe shapes.
    pub shape_count: usize,
    /// Initial viewport.
    pub viewport: Viewport,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            particle_count: SMOKE_PARTICLE_COUNT,
            shape_count: SHAPE_COUNT,
            viewport: Viewport::default(),
        }
    }
}

impl BackdropConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(BackdropError::InvalidConfig(
                "particle_count must be at least 1".into(),
            ));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(BackdropError::InvalidConfig(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        Ok(())
    }
}
