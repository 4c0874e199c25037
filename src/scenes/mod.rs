mod grid;
mod sphere;

pub use grid::uv_grid;
pub use sphere::uv_sphere;
