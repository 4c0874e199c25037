use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use crate::types::UvTriangle;

/// Unit UV sphere with outward normals
///
/// `segments` columns around the equator and `rings` rows from pole to pole.
/// U runs with longitude and V from the +Y pole (v = 0) to the -Y pole, so the
/// UV layout is one rectangle covering the whole unit square.
pub fn uv_sphere(segments: u32, rings: u32) -> Vec<UvTriangle> {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let corner = |i: u32, j: u32| {
        let u = i as f32 / segments as f32;
        let v = j as f32 / rings as f32;

        let theta = u * 2.0 * PI;
        let phi = v * PI;
        let normal = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());

        (Vec2::new(u, v), normal)
    };

    let mut triangles = Vec::with_capacity((segments * rings * 2) as usize);

    for j in 0..rings {
        for i in 0..segments {
            let (uv00, n00) = corner(i, j);
            let (uv10, n10) = corner(i + 1, j);
            let (uv01, n01) = corner(i, j + 1);
            let (uv11, n11) = corner(i + 1, j + 1);

            triangles.push(UvTriangle::new([uv00, uv01, uv11], [n00, n01, n11]));
            triangles.push(UvTriangle::new([uv00, uv11, uv10], [n00, n11, n10]));
        }
    }

    triangles
}
