//! Procedural mesh generation for the demo shapes
//!
//! The sphere is generated as an n×n latitude/longitude grid; the cube and
//! pyramid reproduce the demo's literal vertex tables with per-face colors.

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use crate::types::{ColorMesh, MeshError, TexturedMesh};

/// Generate a textured unit sphere mesh
///
/// # Arguments
/// * `resolution` - Subdivisions along both latitude and longitude (min 3)
///
/// # Returns
/// Mesh with `resolution²` vertices and `6 × resolution × (resolution - 1)`
/// indices, or [`MeshError::InvalidResolution`] when `resolution < 3`.
///
/// Vertices are laid out row-major over (latitude ring × longitude step), so
/// vertex `i·n + j` sits on ring `i` at longitude step `j`. Both angle steps
/// divide by `n - 1`, which makes the first and last longitude samples
/// coincide: the texture seam maps to u = 0 and u = 1 without wraparound.
/// Rings 0 and n-1 collapse to the poles. The zero-area triangles this
/// produces at the poles and along the seam are expected; they rasterize to
/// nothing. Triangles wind clockwise when viewed from outside the sphere.
pub fn generate_sphere(resolution: u32) -> Result<TexturedMesh, MeshError> {
    if resolution < 3 {
        warn!(
            "generate_sphere: resolution must be >= 3 (got {})",
            resolution
        );
        return Err(MeshError::InvalidResolution { resolution });
    }

    let n = resolution as usize;
    let last = (n - 1) as f32;

    // Longitude directions around the horizontal circle. dir[0] == dir[n-1]
    // closes the seam explicitly.
    let angle_delta = 2.0 * PI / last;
    let dirs: Vec<Vec3> = (0..n)
        .map(|j| {
            let theta = j as f32 * angle_delta;
            Vec3::new(theta.sin(), 0.0, theta.cos())
        })
        .collect();

    let vertical_delta = PI / last;

    let mut positions = Vec::with_capacity(n * n);
    let mut normals = Vec::with_capacity(n * n);
    let mut uvs = Vec::with_capacity(n * n);

    for i in 0..n {
        let phi = i as f32 * vertical_delta;
        let radius = phi.sin();
        let height = phi.cos();
        // Integer counters with computed fractions; a float-step loop here
        // can gain or lose a row to accumulated error.
        let v = i as f32 / last;

        for (j, dir) in dirs.iter().enumerate() {
            let position = Vec3::new(dir.x * radius, height, dir.z * radius);
            positions.push(position.to_array());
            // Unit sphere centered at the origin: the normal is the position.
            normals.push(position.to_array());
            uvs.push([j as f32 / last, v]);
        }
    }

    // Two triangles per grid quad, over all n-1 ring bands including the
    // degenerate pole bands.
    let mut indices = Vec::with_capacity(6 * n * (n - 1));
    for ring in 0..n - 1 {
        for v in 0..n {
            let top = (ring * n + v) as u32;
            let bottom = ((ring + 1) * n + v) as u32;
            let next_top = (ring * n + (v + 1) % n) as u32;
            let next_bottom = ((ring + 1) * n + (v + 1) % n) as u32;

            indices.extend_from_slice(&[top, next_top, bottom]);
            indices.extend_from_slice(&[bottom, next_top, next_bottom]);
        }
    }

    Ok(TexturedMesh {
        positions,
        normals,
        uvs,
        indices,
    })
}

/// Per-face colors of the demo cube, in face order front/back/top/bottom/right/left
const CUBE_FACE_COLORS: [[f32; 4]; 6] = [
    [1.0, 1.0, 1.0, 1.0], // front: white
    [1.0, 0.0, 0.0, 1.0], // back: red
    [0.0, 1.0, 0.0, 1.0], // top: green
    [0.0, 0.0, 1.0, 1.0], // bottom: blue
    [1.0, 1.0, 0.0, 1.0], // right: yellow
    [1.0, 0.0, 1.0, 1.0], // left: purple
];

/// Generate the demo cube mesh with flat normals and per-face colors
///
/// Unit half-extents (corners at ±1). 24 vertices (4 per face) and 36
/// indices; triangles wind counter-clockwise viewed from outside.
pub fn generate_cube() -> ColorMesh {
    let mut mesh = ColorMesh {
        positions: Vec::with_capacity(24),
        normals: Vec::with_capacity(24),
        colors: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };

    // Helper to add a quad face (4 vertices, 2 triangles)
    let mut add_face = |v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3, normal: Vec3, color: [f32; 4]| {
        let base = mesh.positions.len() as u32;
        for corner in [v0, v1, v2, v3] {
            mesh.positions.push(corner.to_array());
            mesh.normals.push(normal.to_array());
            mesh.colors.push(color);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    };

    // Front face (+Z)
    add_face(
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::Z,
        CUBE_FACE_COLORS[0],
    );

    // Back face (-Z)
    add_face(
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::NEG_Z,
        CUBE_FACE_COLORS[1],
    );

    // Top face (+Y)
    add_face(
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::Y,
        CUBE_FACE_COLORS[2],
    );

    // Bottom face (-Y)
    add_face(
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::NEG_Y,
        CUBE_FACE_COLORS[3],
    );

    // Right face (+X)
    add_face(
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::X,
        CUBE_FACE_COLORS[4],
    );

    // Left face (-X)
    add_face(
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::NEG_X,
        CUBE_FACE_COLORS[5],
    );

    mesh
}

/// Per-face colors of the demo pyramid, in face order back/left/right
const PYRAMID_FACE_COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0], // back: red
    [0.0, 1.0, 0.0, 1.0], // left: green
    [0.0, 0.0, 1.0, 1.0], // right: blue
];

/// Generate the demo pyramid mesh
///
/// Three colored side faces, 9 vertices, sequential indices. The base is
/// open, as in the demo. Flat outward face normals are computed from each
/// face plane (the demo drew this shape unlit and carried none).
pub fn generate_pyramid() -> ColorMesh {
    let apex = Vec3::new(0.0, 1.0, 0.0);
    let faces: [[Vec3; 3]; 3] = [
        // Back face
        [Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, -1.0, -1.0), apex],
        // Left face
        [Vec3::new(-1.0, -1.0, -1.0), Vec3::new(0.0, -1.0, 1.0), apex],
        // Right face
        [Vec3::new(1.0, -1.0, -1.0), Vec3::new(0.0, -1.0, 1.0), apex],
    ];

    let centroid: Vec3 = faces.iter().flatten().sum::<Vec3>() / 9.0;

    let mut mesh = ColorMesh {
        positions: Vec::with_capacity(9),
        normals: Vec::with_capacity(9),
        colors: Vec::with_capacity(9),
        indices: (0..9).collect(),
    };

    for (face, color) in faces.iter().zip(PYRAMID_FACE_COLORS) {
        let mut normal = (face[1] - face[0]).cross(face[2] - face[0]).normalize();
        // Orient away from the shape centroid; the vertex tables are not
        // wound consistently.
        let face_center = (face[0] + face[1] + face[2]) / 3.0;
        if normal.dot(face_center - centroid) < 0.0 {
            normal = -normal;
        }

        for corner in face {
            mesh.positions.push(corner.to_array());
            mesh.normals.push(normal.to_array());
            mesh.colors.push(color);
        }
    }

    mesh
}
