//! Geometry helpers for assembling document content.

mod batch;

pub use batch::GeometryBatch;
