//! Procedural primitive meshes for the spindle demos
//!
//! This crate generates the triangle meshes the demos render (textured
//! sphere, colored cube, colored pyramid) and the plumbing a graphics
//! backend needs around them. Generation is pure and deterministic; the
//! caller owns every returned mesh and may generate from any thread.
//!
//! # Modules
//!
//! - [`primitives`] - Mesh generators for the demo shapes
//! - [`types`] - Mesh aggregates and the generation error type
//! - [`packing`] - Vertex data packing (f32 → f16/unorm/octahedral)
//! - [`layout`] - Static vertex-attribute binding tables
//! - [`format`] - `.spmesh` binary mesh file format
//! - [`spin`] - Caller-owned per-object rotation state

pub mod format;
pub mod layout;
pub mod packing;
pub mod primitives;
pub mod spin;
pub mod types;

// Re-export the generators and their types
pub use primitives::{generate_cube, generate_pyramid, generate_sphere};
pub use types::{ColorMesh, MeshError, TexturedMesh};

// Re-export commonly used packing items
pub use packing::{
    FORMAT_COLOR, FORMAT_NORMAL, FORMAT_UV, encode_octahedral, pack_color_mesh,
    pack_normal_octahedral, pack_octahedral_u32, pack_position_f16, pack_textured_mesh,
    pack_uv_unorm16, unpack_octahedral_u32, vertex_stride, vertex_stride_packed,
};

// Re-export layout and format items
pub use format::{MeshFileHeader, read_mesh, write_mesh};
pub use layout::{AttributeBinding, AttributeSlot, NumericType, resolve_layout};
pub use spin::Spin;
