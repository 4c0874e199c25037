//! Scanline rasterizer for baking per-vertex attributes into texture space
//!
//! Triangles arrive in raster space (UV scaled by the buffer size) with a
//! four-component attribute per corner. `RenderContext::draw_triangle`
//! interpolates the attribute affinely across each triangle and
//! `RenderContext::grow_edges` pads the result outward so lookups just
//! outside a UV island still find a value.

mod context;
mod edge;
mod gradient;
mod vertex;

pub use context::{RenderContext, CHANNELS};
pub use edge::Edge;
pub use gradient::Gradient;
pub use vertex::Vertex;
