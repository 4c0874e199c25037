//! Raw float dumps of a baked raster, for debugging
//!
//! `<path>` holds the texels as native-endian f32, four per texel, row-major.
//! `<path>.json` holds a `RasterHeader` describing them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::raster::{RenderContext, CHANNELS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterHeader {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub triangles: usize,
    pub grow_iterations: u32,
    /// RFC 3339 timestamp
    pub baked_at: String,
}

impl RasterHeader {
    pub fn new(ctx: &RenderContext, triangles: usize, grow_iterations: u32) -> Self {
        Self {
            width: ctx.width(),
            height: ctx.height(),
            channels: CHANNELS as u32,
            triangles,
            grow_iterations,
            baked_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Sidecar path for a dump: `raster.bin` -> `raster.bin.json`
pub fn header_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".json");
    PathBuf::from(name)
}

pub fn write_raw(ctx: &RenderContext, path: impl AsRef<Path>, header: &RasterHeader) -> Result<()> {
    let path = path.as_ref();

    std::fs::write(path, bytemuck::cast_slice::<f32, u8>(ctx.data()))
        .with_context(|| format!("Failed to write raster: {:?}", path))?;

    let sidecar = header_path(path);
    let json = serde_json::to_string_pretty(header)?;
    std::fs::write(&sidecar, json)
        .with_context(|| format!("Failed to write raster header: {:?}", sidecar))?;

    Ok(())
}

pub fn read_raw(path: impl AsRef<Path>) -> Result<(RenderContext, RasterHeader)> {
    let path = path.as_ref();

    let sidecar = header_path(path);
    let json = std::fs::read_to_string(&sidecar)
        .with_context(|| format!("Failed to read raster header: {:?}", sidecar))?;
    let header: RasterHeader = serde_json::from_str(&json)
        .with_context(|| format!("Invalid raster header: {:?}", sidecar))?;

    anyhow::ensure!(
        header.channels as usize == CHANNELS,
        "Unsupported channel count {} in {:?}",
        header.channels,
        sidecar
    );

    let bytes = std::fs::read(path).with_context(|| format!("Failed to read raster: {:?}", path))?;
    anyhow::ensure!(
        bytes.len() % std::mem::size_of::<f32>() == 0,
        "Raster {:?} is not a whole number of floats",
        path
    );

    // The byte buffer has no alignment guarantee, so copy out float by float.
    let data: Vec<f32> = bytes
        .chunks_exact(std::mem::size_of::<f32>())
        .map(bytemuck::pod_read_unaligned::<f32>)
        .collect();

    let ctx = RenderContext::from_raw(header.width, header.height, data).with_context(|| {
        format!(
            "Raster {:?} does not match {}x{} texels",
            path, header.width, header.height
        )
    })?;

    Ok((ctx, header))
}
