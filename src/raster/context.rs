use glam::Vec4;

use super::edge::Edge;
use super::gradient::Gradient;
use super::vertex::Vertex;

/// Channels stored per texel
pub const CHANNELS: usize = 4;

/// Flat RGBA float raster that triangles are scan-converted into
///
/// Texel `(x, y)` lives at `data[(x + y * width) * 4..][..4]`. Reads and
/// writes outside `[0, width) x [0, height)` are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl RenderContext {
    /// Create a zero-filled raster
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0.0; texel_count(width, height) * CHANNELS],
            width,
            height,
        }
    }

    /// Rebuild a raster from a previously dumped buffer.
    /// Returns `None` if `data` does not hold exactly `width * height` texels.
    pub fn from_raw(width: u32, height: u32, data: Vec<f32>) -> Option<Self> {
        if data.len() != texel_count(width, height) * CHANNELS {
            return None;
        }

        Some(Self { data, width, height })
    }

    /// Reallocate for a new resolution. Every texel is cleared, exactly as
    /// after `new`, so nothing from the previous bake can be sampled.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.data.clear();
        self.data.resize(texel_count(width, height) * CHANNELS, 0.0);
        self.width = width;
        self.height = height;
    }

    /// Reset every texel to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw texel data, four floats per texel in row-major order
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Number of texels marked as painted (alpha > 0)
    pub fn coverage(&self) -> usize {
        self.data
            .chunks_exact(CHANNELS)
            .filter(|texel| texel[3] > 0.0)
            .count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if y < 0 || y as u32 >= self.height {
            return None;
        }

        if x < 0 || x as u32 >= self.width {
            return None;
        }

        Some((x as usize + y as usize * self.width as usize) * CHANNELS)
    }

    /// Write one texel; out-of-range coordinates are a no-op
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Vec4) {
        if let Some(index) = self.index(x, y) {
            color.write_to_slice(&mut self.data[index..index + CHANNELS]);
        }
    }

    /// Read one texel; out-of-range coordinates read as zero
    pub fn read_pixel(&self, x: i32, y: i32) -> Vec4 {
        match self.index(x, y) {
            Some(index) => Vec4::from_slice(&self.data[index..index + CHANNELS]),
            None => Vec4::ZERO,
        }
    }

    /// Scan-convert one triangle, interpolating vertex attributes across it.
    ///
    /// Texels are sampled at integer raster coordinates with a top-left fill
    /// rule, so triangles sharing an edge never both cover a texel on it.
    /// Later triangles overwrite earlier ones. Degenerate triangles draw
    /// nothing.
    pub fn draw_triangle(&mut self, v1: &Vertex, v2: &Vertex, v3: &Vertex) -> bool {
        let mut min = v1;
        let mut mid = v2;
        let mut max = v3;

        // Sort in y
        if max.pos.y < mid.pos.y {
            std::mem::swap(&mut max, &mut mid);
        }

        if mid.pos.y < min.pos.y {
            std::mem::swap(&mut mid, &mut min);
        }

        if max.pos.y < mid.pos.y {
            std::mem::swap(&mut max, &mut mid);
        }

        let area = min.area_x2(max, mid);
        if area == 0.0 || !area.is_finite() {
            return false;
        }

        self.scan_triangle(min, mid, max, area >= 0.0);
        true
    }

    fn scan_triangle(&mut self, min_y: &Vertex, mid_y: &Vertex, max_y: &Vertex, handedness: bool) {
        let grad = Gradient::new(min_y, mid_y, max_y);
        let mut top_bottom = Edge::new(&grad, min_y, max_y, 0);
        let mut top_middle = Edge::new(&grad, min_y, mid_y, 0);
        let mut middle_bottom = Edge::new(&grad, mid_y, max_y, 1);

        self.scan_edges(&grad, &mut top_bottom, &mut top_middle, handedness);
        self.scan_edges(&grad, &mut top_bottom, &mut middle_bottom, handedness);
    }

    /// Fill the scanlines covered by `b`, with `a` as the long edge
    fn scan_edges(&mut self, grad: &Gradient, a: &mut Edge, b: &mut Edge, handedness: bool) {
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);

        // Only rows inside the buffer are walked; the rest are jumped over
        let ystart = b.ystart().max(0).min(b.yend());
        let yend = b.yend().min(height).max(ystart);

        let skip_before = i64::from(ystart) - i64::from(b.ystart());
        let skip_after = i64::from(b.yend()) - i64::from(yend);

        let (left, right) = if handedness { (b, a) } else { (a, b) };

        left.advance(skip_before);
        right.advance(skip_before);

        for y in ystart..yend {
            self.draw_scanline(grad, left, right, y);
            left.step();
            right.step();
        }

        left.advance(skip_after);
        right.advance(skip_after);
    }

    fn draw_scanline(&mut self, grad: &Gradient, left: &Edge, right: &Edge, y: i32) {
        let xmin = left.x().ceil() as i32;
        let xmax = right.x().ceil() as i32;

        if xmax <= xmin || y < 0 || y as u32 >= self.height {
            return;
        }

        // Attributes exactly on the first and one-past-last columns
        let mincolor = left.color() + grad.colorstep_x() * (xmin as f32 - left.x());
        let maxcolor = right.color() + grad.colorstep_x() * (xmax as f32 - right.x());

        // Saturated spans can be wider than i32
        let lerp_step = 1.0 / (i64::from(xmax) - i64::from(xmin)) as f32;
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);

        for x in xmin.max(0)..xmax.min(width) {
            let lerp = (i64::from(x) - i64::from(xmin)) as f32 * lerp_step;
            self.draw_pixel(x, y, mincolor.lerp(maxcolor, lerp));
        }
    }

    /// One dilation pass: every unpainted texel with at least one painted
    /// neighbour in its 3x3 block takes their average RGB and alpha 1.
    ///
    /// Neighbours are read from a snapshot taken before the pass, so coverage
    /// grows by exactly one ring. Returns the number of texels filled.
    pub fn grow_edges(&mut self) -> usize {
        let snapshot = self.data.clone();
        let mut filled = 0;

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.read_pixel(x, y).w > 0.0 {
                    continue;
                }

                if let Some(color) = nearest(&snapshot, self.width, self.height, x, y) {
                    self.draw_pixel(x, y, color);
                    filled += 1;
                }
            }
        }

        filled
    }
}

fn texel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Average of the painted texels in the 3x3 block around (src_x, src_y)
fn nearest(snapshot: &[f32], width: u32, height: u32, src_x: i32, src_y: i32) -> Option<Vec4> {
    let mut sum = Vec4::ZERO;
    let mut count = 0;

    for y in src_y - 1..=src_y + 1 {
        if y < 0 || y as u32 >= height {
            continue;
        }

        for x in src_x - 1..=src_x + 1 {
            if x < 0 || x as u32 >= width {
                continue;
            }

            let index = (x as usize + y as usize * width as usize) * CHANNELS;
            let color = Vec4::from_slice(&snapshot[index..index + CHANNELS]);

            if !(color.w > 0.0) {
                continue;
            }

            sum += color;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let average = sum / count as f32;
    Some(average.truncate().extend(1.0))
}
