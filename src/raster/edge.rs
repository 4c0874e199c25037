use glam::Vec4;

use super::gradient::Gradient;
use super::vertex::Vertex;

/// Walks one triangle edge a scanline at a time
///
/// Covers the half-open scanline range `[ystart, yend)`. `x` and `color` are
/// the edge's position and attribute on the current scanline.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    x: f32,
    xstep: f32,
    ystart: i32,
    yend: i32,
    color: Vec4,
    colorstep: Vec4,
}

impl Edge {
    /// `index` picks which of the gradient's vertex attributes `min_y` holds.
    pub fn new(grad: &Gradient, min_y: &Vertex, max_y: &Vertex, index: usize) -> Self {
        let ystart = min_y.pos.y.ceil() as i32;
        let yend = max_y.pos.y.ceil() as i32;

        let ydist = max_y.pos.y - min_y.pos.y;
        let xdist = max_y.pos.x - min_y.pos.x;

        let yprestep = ystart as f32 - min_y.pos.y;

        // Flat edges cover no scanline and are never stepped.
        let xstep = if ydist > 0.0 { xdist / ydist } else { 0.0 };
        let x = min_y.pos.x + yprestep * xstep;

        let xprestep = x - min_y.pos.x;

        let color = grad.color(index)
            + grad.colorstep_y() * yprestep
            + grad.colorstep_x() * xprestep;

        let colorstep = grad.colorstep_y() + grad.colorstep_x() * xstep;

        Self {
            x,
            xstep,
            ystart,
            yend,
            color,
            colorstep,
        }
    }

    /// Advance to the next scanline
    pub fn step(&mut self) {
        self.x += self.xstep;
        self.color += self.colorstep;
    }

    /// Advance over `rows` scanlines in one jump
    pub fn advance(&mut self, rows: i64) {
        if rows <= 0 {
            return;
        }

        let rows = rows as f32;
        self.x += self.xstep * rows;
        self.color += self.colorstep * rows;
    }

    pub fn ystart(&self) -> i32 {
        self.ystart
    }

    pub fn yend(&self) -> i32 {
        self.yend
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn color(&self) -> Vec4 {
        self.color
    }
}
