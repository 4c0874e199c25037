use glam::Vec4;

/// A triangle corner in raster space
///
/// Only `pos.x` and `pos.y` take part in rasterization. `color` carries the
/// interpolated attribute: a surface normal in xyz and a painted flag in w.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub pos: Vec4,
    pub color: Vec4,
}

impl Vertex {
    pub fn new(pos: Vec4, color: Vec4) -> Self {
        Self { pos, color }
    }

    /// Vertex at raster position (x, y) with the given attribute
    pub fn at(x: f32, y: f32, color: Vec4) -> Self {
        Self {
            pos: Vec4::new(x, y, 0.0, 1.0),
            color,
        }
    }

    /// Twice the signed area of the triangle (self, b, c) in the XY plane.
    /// Zero means the three points are colinear.
    pub fn area_x2(&self, b: &Vertex, c: &Vertex) -> f32 {
        let x1 = b.pos.x - self.pos.x;
        let y1 = b.pos.y - self.pos.y;

        let x2 = c.pos.x - self.pos.x;
        let y2 = c.pos.y - self.pos.y;

        x1 * y2 - x2 * y1
    }
}
