//! Vertex attribute binding layout
//!
//! Static descriptor tables for the packed vertex layouts, resolved once at
//! pipeline-setup time into fixed binding records. This replaces per-draw
//! attribute setter closures with plain data: a backend walks the resolved
//! bindings and points each named slot at its byte range within the stride.

use crate::packing::{FORMAT_COLOR, FORMAT_NORMAL, FORMAT_UV, vertex_stride_packed};

/// Named vertex attribute slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSlot {
    Position,
    Uv,
    Color,
    Normal,
}

/// Packed numeric type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    /// Four IEEE 754 half floats (position, w = 1 padding)
    Float16x4,
    /// Two unsigned normalized 16-bit values (UVs)
    Unorm16x2,
    /// Four unsigned normalized 8-bit values (RGBA color)
    Unorm8x4,
    /// Octahedral-encoded direction in a single u32 (normals)
    OctahedralU32,
}

impl NumericType {
    /// Size of the packed attribute in bytes
    pub const fn size(self) -> u32 {
        match self {
            NumericType::Float16x4 => 8,
            NumericType::Unorm16x2 => 4,
            NumericType::Unorm8x4 => 4,
            NumericType::OctahedralU32 => 4,
        }
    }

    /// Number of logical components the attribute carries
    pub const fn components(self) -> u32 {
        match self {
            NumericType::Float16x4 => 4,
            NumericType::Unorm16x2 => 2,
            NumericType::Unorm8x4 => 4,
            NumericType::OctahedralU32 => 3, // decodes to a unit Vec3
        }
    }
}

/// Attribute descriptor: which slot, packed as what
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub slot: AttributeSlot,
    pub ty: NumericType,
    /// Format flag gating this attribute (0 = always present)
    pub flag: u8,
}

/// The full descriptor table, in interleave order. Position first, then the
/// optional attributes in flag order, matching the packers in
/// [`crate::packing`].
pub const ATTRIBUTE_TABLE: [AttributeDescriptor; 4] = [
    AttributeDescriptor {
        slot: AttributeSlot::Position,
        ty: NumericType::Float16x4,
        flag: 0,
    },
    AttributeDescriptor {
        slot: AttributeSlot::Uv,
        ty: NumericType::Unorm16x2,
        flag: FORMAT_UV,
    },
    AttributeDescriptor {
        slot: AttributeSlot::Color,
        ty: NumericType::Unorm8x4,
        flag: FORMAT_COLOR,
    },
    AttributeDescriptor {
        slot: AttributeSlot::Normal,
        ty: NumericType::OctahedralU32,
        flag: FORMAT_NORMAL,
    },
];

/// Resolved binding record: byte range of one attribute within a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBinding {
    pub slot: AttributeSlot,
    pub ty: NumericType,
    /// Byte offset from the start of the vertex
    pub offset: u32,
    /// Attribute size in bytes
    pub size: u32,
}

/// Resolve the binding records for a vertex format
///
/// Walks [`ATTRIBUTE_TABLE`] and accumulates offsets for the attributes the
/// format carries. The final offset always equals
/// [`vertex_stride_packed`]`(format)`. Deterministic; intended to run once
/// at setup, not per draw.
pub fn resolve_layout(format: u8) -> Vec<AttributeBinding> {
    let mut bindings = Vec::new();
    let mut offset = 0;

    for descriptor in ATTRIBUTE_TABLE {
        if descriptor.flag != 0 && format & descriptor.flag == 0 {
            continue;
        }
        let size = descriptor.ty.size();
        bindings.push(AttributeBinding {
            slot: descriptor.slot,
            ty: descriptor.ty,
            offset,
            size,
        });
        offset += size;
    }

    debug_assert_eq!(offset, vertex_stride_packed(format));
    bindings
}
