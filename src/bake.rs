use anyhow::Result;
use glam::{Vec2, Vec3, Vec4};
use log::{debug, info};

use crate::raster::RenderContext;
use crate::types::UvTriangle;

/// Dilation passes run after every bake unless configured otherwise
pub const DEFAULT_GROW_ITERATIONS: u32 = 5;

/// What a baked raster was built for. A change in either field makes the
/// raster stale.
///
/// Times compare bitwise, so a NaN time still matches itself.
#[derive(Debug, Clone, Copy)]
pub struct BakeKey {
    pub size: u32,
    pub time: f32,
}

impl BakeKey {
    pub fn new(size: u32, time: f32) -> Self {
        Self { size, time }
    }
}

impl PartialEq for BakeKey {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.time.to_bits() == other.time.to_bits()
    }
}

impl Eq for BakeKey {}

/// Summary of one rebake
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BakeStats {
    pub triangles: usize,
    pub skipped: usize,
    pub painted: usize,
    pub coverage: usize,
}

/// Result of a normal lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalLookup {
    /// Unit normal, or zero where nothing was baked
    pub normal: Vec3,
    /// Cosine between the normal and the direction towards the camera
    pub facing_ratio: f32,
}

/// A square normal raster plus the key it was last baked for
///
/// Owns its `RenderContext`; every rebuild goes through `rebake`, which
/// clears, fills and dilates in one call.
#[derive(Debug, Clone, Default)]
pub struct NormalRaster {
    context: RenderContext,
    key: Option<BakeKey>,
}

impl NormalRaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already baked context, e.g. one read back from a dump
    pub fn from_context(context: RenderContext) -> Self {
        Self { context, key: None }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Key of the last bake, if any
    pub fn key(&self) -> Option<BakeKey> {
        self.key
    }

    pub fn needs_rebake(&self, key: &BakeKey) -> bool {
        self.key.as_ref() != Some(key)
    }

    /// Clear, rasterize every triangle, then run `grow_iterations` dilation
    /// passes.
    pub fn rebake(&mut self, key: BakeKey, triangles: &[UvTriangle], grow_iterations: u32) -> BakeStats {
        self.context.resize(key.size, key.size);

        let mut stats = BakeStats {
            triangles: triangles.len(),
            ..BakeStats::default()
        };

        for tri in triangles {
            let [a, b, c] = tri.to_vertices(key.size, key.size);
            if !self.context.draw_triangle(&a, &b, &c) {
                stats.skipped += 1;
            }
        }

        stats.painted = self.context.coverage();

        for pass in 0..grow_iterations {
            let filled = self.context.grow_edges();
            debug!("grow pass {}: filled {} texels", pass, filled);
            if filled == 0 {
                break;
            }
        }

        stats.coverage = self.context.coverage();
        self.key = Some(key);

        info!(
            "baked {}x{} raster at t={}: {} triangles ({} degenerate), {} painted, {} after dilation",
            key.size, key.size, key.time, stats.triangles, stats.skipped, stats.painted, stats.coverage
        );

        stats
    }

    /// Rebake only if `key` differs from the last bake. Triangles are pulled
    /// from `source` lazily so an up-to-date raster costs no mesh traversal.
    pub fn bake_if_stale<F>(&mut self, key: BakeKey, source: F, grow_iterations: u32) -> Result<Option<BakeStats>>
    where
        F: FnOnce() -> Result<Vec<UvTriangle>>,
    {
        if !self.needs_rebake(&key) {
            return Ok(None);
        }

        let triangles = source()?;
        Ok(Some(self.rebake(key, &triangles, grow_iterations)))
    }

    /// Texel nearest to `uv`, clamped onto the raster
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let width = self.context.width();
        let height = self.context.height();
        if width == 0 || height == 0 {
            return Vec4::ZERO;
        }

        let x = texel_coord(uv.x, width);
        let y = texel_coord(uv.y, height);
        self.context.read_pixel(x, y)
    }

    /// Normal at `uv` and how directly it faces `camera` from `point`
    pub fn lookup(&self, uv: Vec2, point: Vec3, camera: Vec3) -> NormalLookup {
        let normal = self.sample(uv).truncate().normalize_or_zero();
        let to_camera = (camera - point).normalize_or_zero();

        NormalLookup {
            normal,
            facing_ratio: to_camera.dot(normal),
        }
    }
}

fn texel_coord(t: f32, extent: u32) -> i32 {
    let max = extent as i32 - 1;
    if !t.is_finite() {
        return 0;
    }
    ((t * extent as f32).round() as i32).clamp(0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texel_coord_rounds_and_clamps() {
        assert_eq!(texel_coord(0.0, 8), 0);
        assert_eq!(texel_coord(0.5, 8), 4);
        assert_eq!(texel_coord(0.3, 8), 2);
        assert_eq!(texel_coord(1.0, 8), 7);
        assert_eq!(texel_coord(-3.0, 8), 0);
        assert_eq!(texel_coord(f32::NAN, 8), 0);
    }

    #[test]
    fn empty_raster_samples_zero() {
        let raster = NormalRaster::new();
        assert_eq!(raster.sample(Vec2::new(0.5, 0.5)), Vec4::ZERO);
        assert!(raster.key().is_none());
    }

    #[test]
    fn needs_rebake_tracks_key() {
        let mut raster = NormalRaster::new();
        let key = BakeKey::new(4, 1.0);
        assert!(raster.needs_rebake(&key));

        raster.rebake(key, &[], 0);
        assert!(!raster.needs_rebake(&key));
        assert!(raster.needs_rebake(&BakeKey::new(4, 2.0)));
        assert!(raster.needs_rebake(&BakeKey::new(8, 1.0)));
    }

    #[test]
    fn nan_time_matches_itself() {
        let mut raster = NormalRaster::new();
        let key = BakeKey::new(4, f32::NAN);

        raster.rebake(key, &[], 0);
        assert!(!raster.needs_rebake(&key));
        assert!(raster.needs_rebake(&BakeKey::new(4, 0.0)));
    }
}
