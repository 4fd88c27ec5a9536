//! # gltfkit
//!
//! glTF 2.0 interchange: a document builder with pooled binary buffers, a
//! GLB container codec, and an accessor decoder for reading arrays back out.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (component types, element shapes, errors)
//! - [`doc`] - Serializable glTF 2.0 document model
//! - [`builder`] - Document construction ([`ODocument`], buffer pools, array encoding)
//! - [`glb`] - GLB binary container format ([`IGlb`], chunk framing)
//! - [`geom`] - Geometry batch helper for merging vertex/index sets
//!
//! ## Example
//!
//! ```ignore
//! use gltfkit::prelude::*;
//!
//! let mut geom = GeometryBatch::new();
//! geom.vectors = vec![glam::Vec3::ZERO, glam::Vec3::X, glam::Vec3::Y];
//! geom.indices = vec![0, 1, 2];
//!
//! let mut doc = ODocument::new();
//! doc.add_geometry(&geom, "bin")?;
//! let glb = doc.to_glb()?;
//!
//! let parsed = IGlb::from_bytes(&glb)?;
//! let positions = parsed.accessor_values(0)?;
//! ```

pub mod builder;
pub mod doc;
pub mod geom;
pub mod glb;
pub mod util;

// Re-export commonly used types
pub use builder::ODocument;
pub use glb::IGlb;
pub use util::{ComponentType, ElementShape, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::{ArrayData, BufferPool, ODocument, Placement};
    pub use crate::doc::{BufferTarget, Document, PrimitiveMode};
    pub use crate::geom::GeometryBatch;
    pub use crate::glb::{AccessorValues, IGlb};
    pub use crate::util::{ComponentType, ElementShape, Error, Result};
}
