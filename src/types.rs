use glam::{Vec2, Vec3, Vec4};

use crate::raster::Vertex;

/// One mesh triangle as seen from texture space
///
/// Produced by mesh traversal: per-corner UVs from the face and per-corner
/// normals from the vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvTriangle {
    pub uvs: [Vec2; 3],
    pub normals: [Vec3; 3],
}

impl UvTriangle {
    pub fn new(uvs: [Vec2; 3], normals: [Vec3; 3]) -> Self {
        Self { uvs, normals }
    }

    /// Same normal at every corner
    pub fn flat(uvs: [Vec2; 3], normal: Vec3) -> Self {
        Self {
            uvs,
            normals: [normal; 3],
        }
    }

    /// Raster-space corners for a `width` x `height` buffer. The normal rides
    /// in the attribute's xyz with w = 1 marking the texel as painted.
    pub fn to_vertices(&self, width: u32, height: u32) -> [Vertex; 3] {
        let scale = Vec2::new(width as f32, height as f32);

        std::array::from_fn(|i| {
            let pos = self.uvs[i] * scale;
            Vertex::new(
                Vec4::new(pos.x, pos.y, 0.0, 1.0),
                self.normals[i].extend(1.0),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_vertices_scales_uvs() {
        let tri = UvTriangle::new(
            [Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.25), Vec2::new(1.0, 1.0)],
            [Vec3::X, Vec3::Y, Vec3::Z],
        );

        let [a, b, c] = tri.to_vertices(64, 32);

        assert_eq!(a.pos, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(b.pos, Vec4::new(32.0, 8.0, 0.0, 1.0));
        assert_eq!(c.pos, Vec4::new(64.0, 32.0, 0.0, 1.0));

        assert_eq!(a.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(b.color, Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(c.color, Vec4::new(0.0, 0.0, 1.0, 1.0));
    }
}
