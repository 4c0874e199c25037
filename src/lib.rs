pub mod bake;
pub mod cli;
pub mod config;
pub mod dump;
pub mod loaders;
pub mod raster;
pub mod scenes;
pub mod types;

pub use bake::{BakeKey, BakeStats, NormalLookup, NormalRaster};
pub use raster::{RenderContext, Vertex};
pub use types::UvTriangle;
