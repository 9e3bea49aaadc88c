//! Vertex data packing utilities
//!
//! Converts the generators' unpacked f32 attribute arrays to interleaved
//! GPU-ready bytes:
//! - positions: f32x3 → f16x4 (w = 1.0 padding)
//! - UVs: f32x2 → unorm16x2
//! - colors: f32x4 → unorm8x4
//! - normals: f32x3 → octahedral-encoded u32

use bytemuck::cast_slice;
use half::f16;

use crate::types::{ColorMesh, TexturedMesh};

// ============================================================================
// Vertex Format Constants
// ============================================================================

/// Vertex format flag: Has UV coordinates (2 floats)
pub const FORMAT_UV: u8 = 1;
/// Vertex format flag: Has per-vertex color (RGBA, 4 floats)
pub const FORMAT_COLOR: u8 = 2;
/// Vertex format flag: Has normals (3 floats)
pub const FORMAT_NORMAL: u8 = 4;

/// Calculate vertex stride in bytes for unpacked f32 format
#[inline]
pub const fn vertex_stride(format: u8) -> u32 {
    let mut stride = 12; // Position: Float32x3

    if format & FORMAT_UV != 0 {
        stride += 8; // UV: Float32x2
    }
    if format & FORMAT_COLOR != 0 {
        stride += 16; // Color: Float32x4
    }
    if format & FORMAT_NORMAL != 0 {
        stride += 12; // Normal: Float32x3
    }

    stride
}

/// Calculate vertex stride in bytes for packed GPU format
#[inline]
pub const fn vertex_stride_packed(format: u8) -> u32 {
    let mut stride = 8; // Position: Float16x4

    if format & FORMAT_UV != 0 {
        stride += 4; // Unorm16x2
    }
    if format & FORMAT_COLOR != 0 {
        stride += 4; // Unorm8x4
    }
    if format & FORMAT_NORMAL != 0 {
        stride += 4; // Octahedral u32
    }

    stride
}

// ============================================================================
// Basic Conversion Functions
// ============================================================================

/// Convert f32 to signed normalized 16-bit integer (snorm16)
///
/// Maps f32 range [-1.0, 1.0] to i16 range [-32767, 32767].
#[inline]
pub fn f32_to_snorm16(value: f32) -> i16 {
    let clamped = value.clamp(-1.0, 1.0);
    (clamped * 32767.0) as i16
}

/// Convert f32 to unsigned normalized 8-bit integer (unorm8)
///
/// Maps f32 range [0.0, 1.0] to u8 range [0, 255].
#[inline]
pub fn f32_to_unorm8(value: f32) -> u8 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 255.0) as u8
}

// ============================================================================
// Attribute Packing
// ============================================================================

/// Pack a 3D position (f32x3) to Float16x4 format (with w=1.0 padding)
#[inline]
pub fn pack_position_f16(x: f32, y: f32, z: f32) -> [f16; 4] {
    [
        f16::from_f32(x),
        f16::from_f32(y),
        f16::from_f32(z),
        f16::from_f32(1.0),
    ]
}

/// Pack a 2D UV coordinate (f32x2) to Unorm16x2 format
#[inline]
pub fn pack_uv_unorm16(u: f32, v: f32) -> [u16; 2] {
    [
        (u.clamp(0.0, 1.0) * 65535.0) as u16,
        (v.clamp(0.0, 1.0) * 65535.0) as u16,
    ]
}

/// Pack an RGBA color (f32x4) to Unorm8x4 format
#[inline]
pub fn pack_color_rgba_unorm8(r: f32, g: f32, b: f32, a: f32) -> [u8; 4] {
    [
        f32_to_unorm8(r),
        f32_to_unorm8(g),
        f32_to_unorm8(b),
        f32_to_unorm8(a),
    ]
}

// ============================================================================
// Normal Packing (octahedral)
// ============================================================================

/// Encode normalized direction to octahedral coordinates in [-1, 1]²
#[inline]
pub fn encode_octahedral(dir: glam::Vec3) -> (f32, f32) {
    let dir = dir.normalize_or_zero();

    let l1_norm = dir.x.abs() + dir.y.abs() + dir.z.abs();
    if l1_norm == 0.0 {
        return (0.0, 0.0);
    }

    let mut u = dir.x / l1_norm;
    let mut v = dir.y / l1_norm;

    if dir.z < 0.0 {
        let u_abs = u.abs();
        let v_abs = v.abs();
        u = (1.0 - v_abs) * if u >= 0.0 { 1.0 } else { -1.0 };
        v = (1.0 - u_abs) * if v >= 0.0 { 1.0 } else { -1.0 };
    }

    (u, v)
}

/// Decode octahedral coordinates in [-1, 1]² back to normalized direction
#[inline]
pub fn decode_octahedral(u: f32, v: f32) -> glam::Vec3 {
    let mut dir = glam::Vec3::new(u, v, 1.0 - u.abs() - v.abs());

    if dir.z < 0.0 {
        let old_x = dir.x;
        dir.x = (1.0 - dir.y.abs()) * if old_x >= 0.0 { 1.0 } else { -1.0 };
        dir.y = (1.0 - old_x.abs()) * if dir.y >= 0.0 { 1.0 } else { -1.0 };
    }

    dir.normalize_or_zero()
}

/// Pack Vec3 direction to u32 using octahedral encoding (2x snorm16)
#[inline]
pub fn pack_octahedral_u32(dir: glam::Vec3) -> u32 {
    let (u, v) = encode_octahedral(dir);
    let u_snorm = f32_to_snorm16(u);
    let v_snorm = f32_to_snorm16(v);
    (u_snorm as u16 as u32) | ((v_snorm as u16 as u32) << 16)
}

/// Unpack u32 to Vec3 direction using octahedral decoding
#[inline]
pub fn unpack_octahedral_u32(packed: u32) -> glam::Vec3 {
    let u_i16 = (packed & 0xFFFF) as i16;
    let v_i16 = (packed >> 16) as i16;
    let u = u_i16 as f32 / 32767.0;
    let v = v_i16 as f32 / 32767.0;
    decode_octahedral(u, v)
}

/// Pack a 3D normal to octahedral-encoded u32 (4 bytes)
#[inline]
pub fn pack_normal_octahedral(nx: f32, ny: f32, nz: f32) -> u32 {
    pack_octahedral_u32(glam::Vec3::new(nx, ny, nz))
}

// ============================================================================
// Whole-Mesh Packing
// ============================================================================

/// Pack a textured mesh to interleaved GPU bytes
///
/// Layout per vertex: f16x4 position + unorm16x2 UV + octahedral u32 normal
/// = 16 bytes (`vertex_stride_packed(FORMAT_UV | FORMAT_NORMAL)`).
pub fn pack_textured_mesh(mesh: &TexturedMesh) -> Vec<u8> {
    let stride = vertex_stride_packed(FORMAT_UV | FORMAT_NORMAL) as usize;
    let mut packed = Vec::with_capacity(mesh.vertex_count() * stride);

    for i in 0..mesh.vertex_count() {
        let [x, y, z] = mesh.positions[i];
        let pos = pack_position_f16(x, y, z);
        packed.extend_from_slice(cast_slice(&pos));

        let [u, v] = mesh.uvs[i];
        let uv = pack_uv_unorm16(u, v);
        packed.extend_from_slice(cast_slice(&uv));

        let [nx, ny, nz] = mesh.normals[i];
        let normal = pack_normal_octahedral(nx, ny, nz);
        packed.extend_from_slice(&normal.to_le_bytes());
    }

    packed
}

/// Pack a colored mesh to interleaved GPU bytes
///
/// Layout per vertex: f16x4 position + unorm8x4 color + octahedral u32 normal
/// = 16 bytes (`vertex_stride_packed(FORMAT_COLOR | FORMAT_NORMAL)`).
pub fn pack_color_mesh(mesh: &ColorMesh) -> Vec<u8> {
    let stride = vertex_stride_packed(FORMAT_COLOR | FORMAT_NORMAL) as usize;
    let mut packed = Vec::with_capacity(mesh.vertex_count() * stride);

    for i in 0..mesh.vertex_count() {
        let [x, y, z] = mesh.positions[i];
        let pos = pack_position_f16(x, y, z);
        packed.extend_from_slice(cast_slice(&pos));

        let [r, g, b, a] = mesh.colors[i];
        let color = pack_color_rgba_unorm8(r, g, b, a);
        packed.extend_from_slice(&color);

        let [nx, ny, nz] = mesh.normals[i];
        let normal = pack_normal_octahedral(nx, ny, nz);
        packed.extend_from_slice(&normal.to_le_bytes());
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{generate_cube, generate_sphere};

    #[test]
    fn test_pack_position_f16() {
        let packed = pack_position_f16(1.0, 2.0, 3.0);
        assert_eq!(packed[0], f16::from_f32(1.0));
        assert_eq!(packed[1], f16::from_f32(2.0));
        assert_eq!(packed[2], f16::from_f32(3.0));
        assert_eq!(packed[3], f16::from_f32(1.0));
    }

    #[test]
    fn test_f32_to_snorm16_range() {
        assert_eq!(f32_to_snorm16(-1.0), -32767);
        assert_eq!(f32_to_snorm16(0.0), 0);
        assert_eq!(f32_to_snorm16(1.0), 32767);
    }

    #[test]
    fn test_f32_to_unorm8_range() {
        assert_eq!(f32_to_unorm8(0.0), 0);
        assert_eq!(f32_to_unorm8(0.5), 127);
        assert_eq!(f32_to_unorm8(1.0), 255);
    }

    #[test]
    fn test_pack_uv_unorm16_corners() {
        assert_eq!(pack_uv_unorm16(0.0, 0.0), [0, 0]);
        assert_eq!(pack_uv_unorm16(1.0, 1.0), [65535, 65535]);
    }

    #[test]
    fn test_octahedral_roundtrip() {
        let test_dirs = [
            glam::Vec3::new(1.0, 0.0, 0.0),
            glam::Vec3::new(-1.0, 0.0, 0.0),
            glam::Vec3::new(0.0, 1.0, 0.0),
            glam::Vec3::new(0.0, 0.0, 1.0),
            glam::Vec3::new(0.0, 0.0, -1.0),
            glam::Vec3::new(0.577, 0.577, 0.577),
        ];

        for dir in test_dirs {
            let normalized = dir.normalize();
            let packed = pack_octahedral_u32(normalized);
            let decoded = unpack_octahedral_u32(packed);
            let error = (decoded - normalized).length();
            assert!(error < 0.01, "Roundtrip failed for {:?}", normalized);
        }
    }

    #[test]
    fn test_vertex_stride() {
        assert_eq!(vertex_stride(0), 12); // POS only
        assert_eq!(vertex_stride(FORMAT_UV | FORMAT_NORMAL), 32);
        assert_eq!(vertex_stride(FORMAT_COLOR | FORMAT_NORMAL), 40);
    }

    #[test]
    fn test_vertex_stride_packed() {
        assert_eq!(vertex_stride_packed(0), 8); // POS only
        assert_eq!(vertex_stride_packed(FORMAT_UV | FORMAT_NORMAL), 16);
        assert_eq!(vertex_stride_packed(FORMAT_COLOR | FORMAT_NORMAL), 16);
    }

    #[test]
    fn test_pack_textured_mesh_size_and_first_vertex() {
        let mesh = generate_sphere(8).unwrap();
        let packed = pack_textured_mesh(&mesh);
        assert_eq!(packed.len(), mesh.vertex_count() * 16);

        // Vertex 0 is the north pole: position (0, 1, 0), uv (0, 0)
        let pos: &[f16; 4] = bytemuck::from_bytes(&packed[0..8]);
        assert_eq!(pos[0].to_f32(), 0.0);
        assert_eq!(pos[1].to_f32(), 1.0);
        assert_eq!(pos[2].to_f32(), 0.0);
        assert_eq!(&packed[8..12], &[0, 0, 0, 0]); // uv (0, 0) as unorm16x2

        let normal_packed = u32::from_le_bytes(packed[12..16].try_into().unwrap());
        let normal = unpack_octahedral_u32(normal_packed);
        assert!((normal - glam::Vec3::Y).length() < 0.01);
    }

    #[test]
    fn test_pack_color_mesh_size_and_colors() {
        let mesh = generate_cube();
        let packed = pack_color_mesh(&mesh);
        assert_eq!(packed.len(), 24 * 16);

        // Vertex 0 is on the front face: white
        assert_eq!(&packed[8..12], &[255, 255, 255, 255]);
        // Vertex 4 is on the back face: red
        assert_eq!(&packed[16 * 4 + 8..16 * 4 + 12], &[255, 0, 0, 255]);
    }
}
