//! Mesh aggregate types
//!
//! Generated meshes keep their attributes as separate unpacked f32 arrays
//! so a graphics backend can upload each one as its own vertex buffer.
//! GPU-ready interleaved bytes are produced separately by [`crate::packing`].

/// Error type for mesh generation.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("invalid sphere resolution {resolution}: must be at least 3")]
    InvalidResolution { resolution: u32 },
}

/// Textured mesh: positions, normals, and texture coordinates.
///
/// Produced by [`crate::generate_sphere`]. Immutable aggregate owned by the
/// caller; the generator keeps no state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedMesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (x, y, z), unit length
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v) in [0, 1]
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices, triples with a fixed winding
    pub indices: Vec<u32>,
}

impl TexturedMesh {
    /// Number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of index entries (3 per triangle)
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Colored mesh: positions, normals, and per-vertex RGBA colors.
///
/// Produced by [`crate::generate_cube`] and [`crate::generate_pyramid`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (x, y, z), unit length
    pub normals: Vec<[f32; 3]>,
    /// Vertex colors (r, g, b, a) in [0, 1]
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices, triples with a fixed winding
    pub indices: Vec<u32>,
}

impl ColorMesh {
    /// Number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of index entries (3 per triangle)
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_track_attribute_arrays() {
        let mesh = TexturedMesh {
            positions: vec![[0.0, 0.0, 0.0]; 4],
            normals: vec![[0.0, 1.0, 0.0]; 4],
            uvs: vec![[0.0, 0.0]; 4],
            indices: vec![0, 1, 2, 0, 2, 3],
        };
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn test_invalid_resolution_message_names_value() {
        let err = MeshError::InvalidResolution { resolution: 2 };
        assert!(err.to_string().contains('2'));
    }
}
