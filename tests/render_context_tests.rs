use glam::Vec4;
use normal_raster::raster::{RenderContext, Vertex};

const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

fn painted(ctx: &RenderContext, x: i32, y: i32) -> bool {
    ctx.read_pixel(x, y).w > 0.0
}

// ============================================================================
// Pixel Access Tests
// ============================================================================

#[cfg(test)]
mod pixel_tests {
    use super::*;

    #[test]
    fn test_new_context_dimensions() {
        let ctx = RenderContext::new(640, 480);
        assert_eq!(ctx.width(), 640);
        assert_eq!(ctx.height(), 480);
        assert_eq!(ctx.data().len(), 640 * 480 * 4);
        assert_eq!(ctx.coverage(), 0);
    }

    #[test]
    fn test_draw_then_read_pixel() {
        let mut ctx = RenderContext::new(10, 10);
        let color = Vec4::new(0.25, -0.5, 0.75, 1.0);

        ctx.draw_pixel(3, 7, color);

        assert_eq!(ctx.read_pixel(3, 7), color);
        assert_eq!(ctx.read_pixel(7, 3), Vec4::ZERO);
        assert_eq!(ctx.coverage(), 1);
    }

    #[test]
    fn test_pixel_corners() {
        let mut ctx = RenderContext::new(100, 100);
        ctx.draw_pixel(0, 0, Vec4::splat(1.0));
        ctx.draw_pixel(99, 99, Vec4::splat(2.0));
        ctx.draw_pixel(0, 99, Vec4::splat(3.0));
        ctx.draw_pixel(99, 0, Vec4::splat(4.0));

        assert_eq!(&ctx.data()[0..4], &[1.0; 4]);
        let br_idx = (99 * 100 + 99) * 4;
        assert_eq!(&ctx.data()[br_idx..br_idx + 4], &[2.0; 4]);
        let bl_idx = (99 * 100) * 4;
        assert_eq!(&ctx.data()[bl_idx..bl_idx + 4], &[3.0; 4]);
        let tr_idx = 99 * 4;
        assert_eq!(&ctx.data()[tr_idx..tr_idx + 4], &[4.0; 4]);
    }

    #[test]
    fn test_out_of_range_write_is_noop() {
        let mut ctx = RenderContext::new(10, 10);
        let before = ctx.clone();

        ctx.draw_pixel(-1, 5, RED);
        ctx.draw_pixel(5, -1, RED);
        ctx.draw_pixel(10, 5, RED);
        ctx.draw_pixel(5, 10, RED);
        ctx.draw_pixel(1000, 1000, RED);

        assert_eq!(ctx, before, "Out-of-range writes must not touch the buffer");
    }

    #[test]
    fn test_out_of_range_read_is_zero() {
        let mut ctx = RenderContext::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                ctx.draw_pixel(x, y, RED);
            }
        }

        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (-100, -100), (i32::MAX, 0)] {
            assert_eq!(ctx.read_pixel(x, y), Vec4::ZERO, "({}, {}) should read zero", x, y);
        }
    }

    #[test]
    fn test_zero_sized_context() {
        let mut ctx = RenderContext::new(0, 0);
        ctx.draw_pixel(0, 0, RED);
        assert_eq!(ctx.read_pixel(0, 0), Vec4::ZERO);
        assert_eq!(ctx.grow_edges(), 0);
        ctx.draw_triangle(
            &Vertex::at(0.0, 0.0, RED),
            &Vertex::at(4.0, 0.0, RED),
            &Vertex::at(0.0, 4.0, RED),
        );
        assert_eq!(ctx.coverage(), 0);
    }
}

// ============================================================================
// Resize Tests
// ============================================================================

#[cfg(test)]
mod resize_tests {
    use super::*;

    #[test]
    fn test_resize_updates_dimensions_and_clears() {
        let mut ctx = RenderContext::new(8, 8);
        ctx.draw_triangle(
            &Vertex::at(0.0, 0.0, RED),
            &Vertex::at(8.0, 0.0, RED),
            &Vertex::at(0.0, 8.0, RED),
        );
        assert!(ctx.coverage() > 0);

        ctx.resize(16, 16);

        assert_eq!(ctx.width(), 16);
        assert_eq!(ctx.height(), 16);
        assert_eq!(ctx.data().len(), 16 * 16 * 4);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(ctx.read_pixel(x, y), Vec4::ZERO, "texel ({}, {}) survived resize", x, y);
            }
        }
    }

    #[test]
    fn test_resize_same_size_still_clears() {
        let mut ctx = RenderContext::new(4, 4);
        ctx.draw_pixel(1, 1, RED);

        ctx.resize(4, 4);

        assert_eq!(ctx, RenderContext::new(4, 4));
    }

    #[test]
    fn test_resize_non_square() {
        let mut ctx = RenderContext::new(4, 4);
        ctx.resize(3, 7);

        ctx.draw_pixel(2, 6, RED);
        assert_eq!(ctx.read_pixel(2, 6), RED);
        ctx.draw_pixel(6, 2, RED);
        assert_eq!(ctx.coverage(), 1);
    }

    #[test]
    fn test_clear() {
        let mut ctx = RenderContext::new(4, 4);
        ctx.draw_pixel(1, 1, RED);
        ctx.clear();
        assert_eq!(ctx.coverage(), 0);
        assert_eq!(ctx.width(), 4);
    }
}

// ============================================================================
// Dilation Tests
// ============================================================================

#[cfg(test)]
mod grow_edges_tests {
    use super::*;

    fn corner_triangle() -> RenderContext {
        let mut ctx = RenderContext::new(4, 4);
        ctx.draw_triangle(
            &Vertex::at(0.0, 0.0, RED),
            &Vertex::at(3.0, 0.0, RED),
            &Vertex::at(0.0, 3.0, RED),
        );
        ctx
    }

    #[test]
    fn test_corner_triangle_coverage() {
        let ctx = corner_triangle();

        for y in 0..4 {
            for x in 0..4 {
                if x + y <= 2 {
                    assert_eq!(ctx.read_pixel(x, y), RED, "({}, {}) should be painted", x, y);
                } else {
                    assert_eq!(ctx.read_pixel(x, y), Vec4::ZERO, "({}, {}) should be empty", x, y);
                }
            }
        }
    }

    #[test]
    fn test_grow_reaches_far_corner_in_two_passes() {
        let mut ctx = corner_triangle();

        assert_eq!(ctx.grow_edges(), 7);
        assert!(!painted(&ctx, 3, 3), "(3, 3) has no painted neighbour yet");
        assert!(painted(&ctx, 3, 0));
        assert!(painted(&ctx, 2, 2));

        assert_eq!(ctx.grow_edges(), 3);
        assert_eq!(ctx.read_pixel(3, 3), RED);
        assert_eq!(ctx.coverage(), 16);
    }

    #[test]
    fn test_grow_averages_rgb_and_sets_alpha() {
        let mut ctx = RenderContext::new(3, 1);
        ctx.draw_pixel(0, 0, Vec4::new(1.0, 0.0, 0.0, 0.5));
        ctx.draw_pixel(2, 0, Vec4::new(0.0, 0.0, 1.0, 0.25));

        assert_eq!(ctx.grow_edges(), 1);

        assert_eq!(ctx.read_pixel(1, 0), Vec4::new(0.5, 0.0, 0.5, 1.0));
        // Painted texels are left alone
        assert_eq!(ctx.read_pixel(0, 0), Vec4::new(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_grow_uses_snapshot() {
        // A single seed grows exactly one ring per pass
        let mut ctx = RenderContext::new(9, 9);
        ctx.draw_pixel(4, 4, RED);

        ctx.grow_edges();
        assert_eq!(ctx.coverage(), 9);
        assert!(!painted(&ctx, 2, 4));

        ctx.grow_edges();
        assert_eq!(ctx.coverage(), 25);
    }

    #[test]
    fn test_grow_on_empty_buffer_is_noop() {
        let mut ctx = RenderContext::new(5, 5);
        assert_eq!(ctx.grow_edges(), 0);
        assert_eq!(ctx, RenderContext::new(5, 5));
    }

    #[test]
    fn test_grow_idempotent_once_saturated() {
        let mut ctx = corner_triangle();
        while ctx.grow_edges() > 0 {}

        let saturated = ctx.clone();
        assert_eq!(ctx.grow_edges(), 0);
        assert_eq!(ctx, saturated);
    }

    #[test]
    fn test_grow_coverage_monotonic() {
        let mut ctx = RenderContext::new(32, 32);
        ctx.draw_triangle(
            &Vertex::at(3.5, 2.0, RED),
            &Vertex::at(9.0, 6.5, RED),
            &Vertex::at(4.0, 12.0, RED),
        );
        ctx.draw_pixel(30, 30, Vec4::new(0.0, 1.0, 0.0, 1.0));

        let mut previous = ctx.coverage();
        for _ in 0..40 {
            ctx.grow_edges();
            let current = ctx.coverage();
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 32 * 32);
    }
}
