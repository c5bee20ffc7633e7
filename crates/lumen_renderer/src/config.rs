//! Tracer and render settings.
//!
//! Both structs deserialize from JSON (or any serde format). Missing fields
//! take their defaults; unknown fields are rejected.

use lumen_core::{DEFAULT_CELLS, MAX_CELLS};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings of the recursive shading algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TracerConfig {
    /// Maximum recursion depth; 1 means local lighting only
    pub max_level: u32,
    /// Attenuation below which a reflection, refraction or light
    /// contribution is dropped
    pub min_k: f64,
    /// Relative difference between the coarse shadow samples, as a fraction
    /// of their average magnitude, above which the full grid is sampled
    pub adaptive_threshold: f64,
    /// Grid points per side when sampling an area light
    pub grid_cells: usize,
    /// Randomize sample positions inside their grid cells
    pub jitter: bool,
}

impl TracerConfig {
    /// Check every field is usable before tracing starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::ZeroMaxLevel);
        }
        for (field, value) in [
            ("min_k", self.min_k),
            ("adaptive_threshold", self.adaptive_threshold),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidFactor { field, value });
            }
        }
        if !(1..=MAX_CELLS).contains(&self.grid_cells) {
            return Err(ConfigError::GridCells {
                value: self.grid_cells,
                max: MAX_CELLS,
            });
        }
        Ok(())
    }
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            max_level: 10,
            min_k: 0.001,
            adaptive_threshold: 0.25,
            grid_cells: DEFAULT_CELLS,
            jitter: false,
        }
    }
}

/// Settings of the image loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Render buckets on the rayon thread pool
    pub parallel: bool,
    /// Base seed for the per-pixel random generators
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
            parallel: true,
            seed: 0,
        }
    }
}
