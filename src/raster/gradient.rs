use glam::{Vec3, Vec4};

use super::vertex::Vertex;

/// Per-triangle attribute gradients
///
/// Fits the affine plane through the three (position, attribute) samples and
/// stores its slope along raster x and y, so edges and spans can interpolate
/// by repeated addition.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    colors: [Vec4; 3],
    colorstep_x: Vec4,
    colorstep_y: Vec4,
}

impl Gradient {
    /// Build from three vertices already sorted by ascending `pos.y`.
    ///
    /// A zero-area triangle divides by zero here; callers reject those first.
    pub fn new(min_y: &Vertex, mid_y: &Vertex, max_y: &Vertex) -> Self {
        let inv_dx = 1.0
            / (((mid_y.pos.x - max_y.pos.x) * (min_y.pos.y - max_y.pos.y))
                - ((min_y.pos.x - max_y.pos.x) * (mid_y.pos.y - max_y.pos.y)));
        let inv_dy = -inv_dx;

        let colors = [min_y.color, mid_y.color, max_y.color];

        let mut colorstep_x = Vec4::ZERO;
        let mut colorstep_y = Vec4::ZERO;

        for i in 0..4 {
            let values = Vec3::new(colors[0][i], colors[1][i], colors[2][i]);
            colorstep_x[i] = calc_xstep(values, min_y, mid_y, max_y, inv_dx);
            colorstep_y[i] = calc_ystep(values, min_y, mid_y, max_y, inv_dy);
        }

        Self {
            colors,
            colorstep_x,
            colorstep_y,
        }
    }

    /// Attribute of the min (0), mid (1) or max (2) vertex
    pub fn color(&self, index: usize) -> Vec4 {
        self.colors[index]
    }

    pub fn colorstep_x(&self) -> Vec4 {
        self.colorstep_x
    }

    pub fn colorstep_y(&self) -> Vec4 {
        self.colorstep_y
    }
}

fn calc_xstep(values: Vec3, min: &Vertex, mid: &Vertex, max: &Vertex, inv_dx: f32) -> f32 {
    (((values[1] - values[2]) * (min.pos.y - max.pos.y))
        - ((values[0] - values[2]) * (mid.pos.y - max.pos.y)))
        * inv_dx
}

fn calc_ystep(values: Vec3, min: &Vertex, mid: &Vertex, max: &Vertex, inv_dy: f32) -> f32 {
    (((values[1] - values[2]) * (min.pos.x - max.pos.x))
        - ((values[0] - values[2]) * (mid.pos.x - max.pos.x)))
        * inv_dy
}
