//! Accessor decoding - reconstruct numeric arrays from container chunks.

use super::reader::IGlb;
use crate::doc::BufferTarget;
use crate::util::{Error, Result};

/// Values decoded from one accessor.
///
/// Vertex-attribute views decode to one tuple per item; element-index views
/// decode to a flat scalar list. The two shapes mirror how the data is
/// consumed downstream and are never folded into one representation.
#[derive(Clone, Debug, PartialEq)]
pub enum AccessorValues {
    /// One fixed-size tuple per item (vertex-attribute target).
    Tuples(Vec<Vec<f64>>),
    /// Flat component list (element-index target, or no target).
    Scalars(Vec<f64>),
}

impl AccessorValues {
    /// Number of logical items (tuples) or components (scalars).
    pub fn len(&self) -> usize {
        match self {
            Self::Tuples(v) => v.len(),
            Self::Scalars(v) => v.len(),
        }
    }

    /// True if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tuple list, if this decoded from a vertex-attribute view.
    pub fn as_tuples(&self) -> Option<&[Vec<f64>]> {
        match self {
            Self::Tuples(v) => Some(v),
            Self::Scalars(_) => None,
        }
    }

    /// The flat scalar list, if this decoded from an element-index view.
    pub fn as_scalars(&self) -> Option<&[f64]> {
        match self {
            Self::Scalars(v) => Some(v),
            Self::Tuples(_) => None,
        }
    }

    /// All components in storage order, whatever the shaping.
    pub fn flatten(self) -> Vec<f64> {
        match self {
            Self::Scalars(v) => v,
            Self::Tuples(v) => v.into_iter().flatten().collect(),
        }
    }
}

impl IGlb {
    /// Decode the accessor at `index` into its numeric values.
    ///
    /// Stride resolution: an explicit `byteStride` on the buffer view always
    /// wins (interleaved attributes sharing one view); otherwise items are
    /// tightly packed. Fails with [`Error::AccessorOverrun`] when the last
    /// item would read past the chunk, and [`Error::InvalidDocument`] for
    /// dangling accessor, view, or buffer references.
    pub fn accessor_values(&self, index: usize) -> Result<AccessorValues> {
        let doc = self.document();
        let accessor = doc
            .accessors
            .get(index)
            .ok_or_else(|| Error::invalid(format!("accessor {index} out of range")))?;
        let view_index = accessor
            .buffer_view
            .ok_or_else(|| Error::invalid(format!("accessor {index} has no buffer view")))?;
        let view = doc
            .buffer_views
            .get(view_index)
            .ok_or_else(|| Error::invalid(format!("buffer view {view_index} out of range")))?;
        let chunk = self
            .chunk(view.buffer)
            .ok_or_else(|| Error::invalid(format!("no chunk for buffer {}", view.buffer)))?;
        let bytes = chunk.data.as_slice();

        let item_components = accessor.shape.num_components();
        let component_bytes = accessor.component_type.num_bytes();
        let stride = view
            .byte_stride
            .unwrap_or(item_components * component_bytes);
        let base = accessor.byte_offset.unwrap_or(0) + view.byte_offset.unwrap_or(0);

        if accessor.count > 0 {
            let needed = base + (accessor.count - 1) * stride + item_components * component_bytes;
            if needed > bytes.len() {
                return Err(Error::AccessorOverrun { needed, available: bytes.len() });
            }
        }

        let mut items = Vec::with_capacity(accessor.count);
        for i in 0..accessor.count {
            let mut offset = base + i * stride;
            let mut item = Vec::with_capacity(item_components);
            for _ in 0..item_components {
                item.push(accessor.component_type.read(bytes, offset));
                offset += component_bytes;
            }
            items.push(item);
        }

        match view.target {
            Some(BufferTarget::ArrayBuffer) => Ok(AccessorValues::Tuples(items)),
            _ => Ok(AccessorValues::Scalars(items.into_iter().flatten().collect())),
        }
    }
}
