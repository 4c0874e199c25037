use anyhow::{Context, Result};
use glam::{Mat3, Mat4, Vec2, Vec3};
use log::{debug, info, warn};
use std::path::Path;

use crate::types::UvTriangle;

/// Loads a glTF file and extracts every triangle that has both UVs and
/// normals, ready for baking
pub fn load_gltf_uv_triangles(path: impl AsRef<Path>) -> Result<Vec<UvTriangle>> {
    let path = path.as_ref();
    info!("Loading glTF file for normal baking: {:?}", path);

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    debug!(
        "glTF loaded: {} scenes, {} nodes, {} meshes",
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count()
    );

    let mut triangles = Vec::new();

    for scene in gltf.scenes() {
        debug!("Processing scene: {:?}", scene.name());

        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut triangles)?;
        }
    }

    info!("Extracted {} UV triangles from {:?}", triangles.len(), path);
    Ok(triangles)
}

/// Recursively processes glTF nodes, accumulating transforms
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    triangles: &mut Vec<UvTriangle>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, triangles)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, triangles)?;
    }

    Ok(())
}

/// Emits one `UvTriangle` per triangle of each primitive carrying
/// `TEXCOORD_0` and `NORMAL`
fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    triangles: &mut Vec<UvTriangle>,
) -> Result<()> {
    debug!("Processing mesh: {:?}", mesh.name());

    // Normals transform by the inverse transpose
    let normal_matrix = Mat3::from_mat4(*transform).inverse().transpose();

    for (prim_idx, primitive) in mesh.primitives().enumerate() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            warn!(
                "Skipping primitive {} of mesh {:?}: mode {:?} is not a triangle list",
                prim_idx,
                mesh.name(),
                primitive.mode()
            );
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let Some(uv_reader) = reader.read_tex_coords(0) else {
            warn!("Skipping primitive {} of mesh {:?}: no UVs", prim_idx, mesh.name());
            continue;
        };
        let uvs: Vec<Vec2> = uv_reader.into_f32().map(Vec2::from_array).collect();

        let Some(normal_reader) = reader.read_normals() else {
            warn!("Skipping primitive {} of mesh {:?}: no normals", prim_idx, mesh.name());
            continue;
        };
        let normals: Vec<Vec3> = normal_reader
            .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
            .collect();

        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..uvs.len() as u32).collect(),
        };

        for tri in indices.chunks_exact(3) {
            let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];

            let corners = [i0, i1, i2];
            if corners.iter().any(|&i| i >= uvs.len() || i >= normals.len()) {
                anyhow::bail!(
                    "Mesh {:?} primitive {} references vertex out of range",
                    mesh.name(),
                    prim_idx
                );
            }

            triangles.push(UvTriangle::new(
                [uvs[i0], uvs[i1], uvs[i2]],
                [normals[i0], normals[i1], normals[i2]],
            ));
        }
    }

    Ok(())
}
