use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use log::info;

use normal_raster::bake::{BakeKey, NormalRaster};
use normal_raster::cli::{BakeArgs, Cli, Command, SampleArgs};
use normal_raster::config::BakeConfig;
use normal_raster::dump::{read_raw, write_raw, RasterHeader};
use normal_raster::loaders::load_gltf_uv_triangles;
use normal_raster::scenes::uv_sphere;
use normal_raster::types::UvTriangle;

// Subdivisions of the built-in sphere when no mesh is given
const DEFAULT_SPHERE_SUBDIVISIONS: u32 = 30;

fn load_triangles(args: &BakeArgs) -> Result<Vec<UvTriangle>> {
    match (&args.mesh, args.sphere) {
        (Some(path), _) => load_gltf_uv_triangles(path),
        (None, Some(n)) => Ok(uv_sphere(n, n)),
        (None, None) => {
            info!(
                "No mesh given, baking a {0}x{0} UV sphere",
                DEFAULT_SPHERE_SUBDIVISIONS
            );
            Ok(uv_sphere(DEFAULT_SPHERE_SUBDIVISIONS, DEFAULT_SPHERE_SUBDIVISIONS))
        }
    }
}

fn bake(args: BakeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => BakeConfig::from_file(path)?,
        None => BakeConfig::default(),
    }
    .with_overrides(args.size, args.iterations);

    anyhow::ensure!(config.size > 0, "size must be positive");

    let triangles = load_triangles(&args)?;

    let mut raster = NormalRaster::new();
    let key = BakeKey::new(config.size, args.time);
    let stats = raster.rebake(key, &triangles, config.grow_iterations);

    let header = RasterHeader::new(raster.context(), stats.triangles, config.grow_iterations);
    write_raw(raster.context(), &args.out, &header)?;

    println!(
        "Baked {} triangles into {}x{} ({} texels covered) -> {}",
        stats.triangles,
        config.size,
        config.size,
        stats.coverage,
        args.out.display()
    );

    Ok(())
}

fn sample(args: SampleArgs) -> Result<()> {
    let (ctx, _header) = read_raw(&args.raster)
        .with_context(|| format!("Failed to open raster {:?}", args.raster))?;
    let raster = NormalRaster::from_context(ctx);

    let uv = Vec2::new(args.u, args.v);
    let texel = raster.sample(uv);
    println!(
        "texel: {:.6} {:.6} {:.6} (painted: {})",
        texel.x,
        texel.y,
        texel.z,
        texel.w > 0.0
    );

    if let Some(camera) = args.camera {
        let lookup = raster.lookup(uv, args.point, camera);
        println!(
            "normal: {:.6} {:.6} {:.6}",
            lookup.normal.x, lookup.normal.y, lookup.normal.z
        );
        println!("facing ratio: {:.6}", lookup.facing_ratio);
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Bake(args) => bake(args),
        Command::Sample(args) => sample(args),
    }
}
