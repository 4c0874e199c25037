use glam::{Vec2, Vec3};

use crate::types::UvTriangle;

/// Flat grid over the unit UV square, every corner facing +Z
pub fn uv_grid(cells: u32) -> Vec<UvTriangle> {
    let cells = cells.max(1);
    let step = 1.0 / cells as f32;

    let mut triangles = Vec::with_capacity((cells * cells * 2) as usize);

    for j in 0..cells {
        for i in 0..cells {
            let u0 = i as f32 * step;
            let v0 = j as f32 * step;
            let u1 = u0 + step;
            let v1 = v0 + step;

            let p00 = Vec2::new(u0, v0);
            let p10 = Vec2::new(u1, v0);
            let p01 = Vec2::new(u0, v1);
            let p11 = Vec2::new(u1, v1);

            triangles.push(UvTriangle::flat([p00, p10, p11], Vec3::Z));
            triangles.push(UvTriangle::flat([p00, p11, p01], Vec3::Z));
        }
    }

    triangles
}
