use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bake::DEFAULT_GROW_ITERATIONS;

pub const DEFAULT_SIZE: u32 = 256;

/// Bake settings, usually read from a JSON file and overridden from the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeConfig {
    /// Raster width and height in texels
    pub size: u32,
    /// Dilation passes after rasterization
    pub grow_iterations: u32,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            grow_iterations: DEFAULT_GROW_ITERATIONS,
        }
    }
}

impl BakeConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        anyhow::ensure!(config.size > 0, "size must be positive");
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, size: Option<u32>, grow_iterations: Option<u32>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(iterations) = grow_iterations {
            self.grow_iterations = iterations;
        }
        self
    }
}
