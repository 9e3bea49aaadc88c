//! `.spmesh` binary format
//!
//! GPU-ready mesh file with packed vertices. POD format, little-endian,
//! no magic bytes.
//!
//! # Layout
//! ```text
//! 0x00: vertex_count u32
//! 0x04: index_count u32
//! 0x08: format u8 (vertex format flags, see crate::packing)
//! 0x09: padding (3 bytes)
//! 0x0C: vertex_data (vertex_count * vertex_stride_packed(format))
//! var:  index_data (index_count * 4 bytes, u32 LE)
//! ```

use std::io::{self, Write};

use crate::packing::vertex_stride_packed;

/// `.spmesh` header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct MeshFileHeader {
    pub vertex_count: u32,
    pub index_count: u32,
    pub format: u8,
    pub _padding: [u8; 3],
}

impl MeshFileHeader {
    pub const SIZE: usize = 12;

    pub fn new(vertex_count: u32, index_count: u32, format: u8) -> Self {
        Self {
            vertex_count,
            index_count,
            format,
            _padding: [0; 3],
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.vertex_count.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.index_count.to_le_bytes());
        bytes[8] = self.format;
        // padding bytes stay 0
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            vertex_count: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            index_count: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            format: bytes[8],
            _padding: [0; 3],
        })
    }
}

/// Write a complete `.spmesh` stream: header, packed vertices, u32 indices
pub fn write_mesh<W: Write>(
    writer: &mut W,
    format: u8,
    vertex_count: u32,
    vertex_data: &[u8],
    indices: &[u32],
) -> io::Result<()> {
    let header = MeshFileHeader::new(vertex_count, indices.len() as u32, format);
    writer.write_all(&header.to_bytes())?;
    writer.write_all(vertex_data)?;
    for index in indices {
        writer.write_all(&index.to_le_bytes())?;
    }
    Ok(())
}

/// Parse a complete `.spmesh` byte buffer
///
/// Returns the header, a borrowed view of the packed vertex bytes, and the
/// decoded index list. `None` when the buffer is truncated or the payload
/// sizes don't match the header.
pub fn read_mesh(bytes: &[u8]) -> Option<(MeshFileHeader, &[u8], Vec<u32>)> {
    let header = MeshFileHeader::from_bytes(bytes)?;

    let stride = vertex_stride_packed(header.format) as usize;
    let vertex_bytes = header.vertex_count as usize * stride;
    let index_bytes = header.index_count as usize * 4;
    if bytes.len() != MeshFileHeader::SIZE + vertex_bytes + index_bytes {
        return None;
    }

    let vertex_data = &bytes[MeshFileHeader::SIZE..MeshFileHeader::SIZE + vertex_bytes];
    let indices = bytes[MeshFileHeader::SIZE + vertex_bytes..]
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    Some((header, vertex_data, indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{FORMAT_NORMAL, FORMAT_UV, pack_textured_mesh};
    use crate::primitives::generate_sphere;

    #[test]
    fn test_header_roundtrip() {
        let header = MeshFileHeader::new(256, 1530, FORMAT_UV | FORMAT_NORMAL);
        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), MeshFileHeader::SIZE);
        assert_eq!(MeshFileHeader::from_bytes(&bytes), Some(header));
    }

    #[test]
    fn test_header_rejects_short_input() {
        assert_eq!(MeshFileHeader::from_bytes(&[0u8; 11]), None);
    }

    #[test]
    fn test_write_then_read_sphere() {
        let mesh = generate_sphere(6).unwrap();
        let format = FORMAT_UV | FORMAT_NORMAL;
        let vertex_data = pack_textured_mesh(&mesh);

        let mut buffer = Vec::new();
        write_mesh(
            &mut buffer,
            format,
            mesh.vertex_count() as u32,
            &vertex_data,
            &mesh.indices,
        )
        .unwrap();

        let (header, vertices, indices) = read_mesh(&buffer).expect("valid stream");
        assert_eq!(header.vertex_count, 36);
        assert_eq!(header.index_count, mesh.index_count() as u32);
        assert_eq!(header.format, format);
        assert_eq!(vertices, &vertex_data[..]);
        assert_eq!(indices, mesh.indices);
    }

    #[test]
    fn test_read_rejects_truncated_payload() {
        let mesh = generate_sphere(4).unwrap();
        let vertex_data = pack_textured_mesh(&mesh);

        let mut buffer = Vec::new();
        write_mesh(
            &mut buffer,
            FORMAT_UV | FORMAT_NORMAL,
            mesh.vertex_count() as u32,
            &vertex_data,
            &mesh.indices,
        )
        .unwrap();

        buffer.pop();
        assert!(read_mesh(&buffer).is_none());
    }
}
