// cli.rs - Command-line interface configuration
use clap::{Args, Parser, Subcommand};
use glam::Vec3;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "normal-raster")]
#[command(about = "Bake mesh normals into a UV-space raster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rasterize a mesh's normals and write a raw dump
    Bake(BakeArgs),
    /// Look up the normal stored at a UV coordinate of a dump
    Sample(SampleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BakeArgs {
    /// glTF file to bake
    #[arg(long, conflicts_with = "sphere")]
    pub mesh: Option<PathBuf>,

    /// Bake a built-in UV sphere with this many subdivisions instead
    #[arg(long)]
    pub sphere: Option<u32>,

    /// JSON file with bake settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raster width and height, overrides the config
    #[arg(long)]
    pub size: Option<u32>,

    /// Dilation passes, overrides the config
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Time value the bake is keyed on
    #[arg(long, allow_hyphen_values = true, default_value = "0.0")]
    pub time: f32,

    /// Output file for the raw float buffer
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Raw dump written by `bake`
    #[arg(long)]
    pub raster: PathBuf,

    #[arg(long, allow_hyphen_values = true)]
    pub u: f32,

    #[arg(long, allow_hyphen_values = true)]
    pub v: f32,

    /// World-space point being shaded, as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,0")]
    pub point: Vec3,

    /// Camera location, as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub camera: Option<Vec3>,
}

pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got {:?}", s));
    }

    let mut xyz = [0.0f32; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid component {:?}: {}", part, e))?;
    }

    Ok(Vec3::from_array(xyz))
}
