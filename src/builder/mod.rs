//! Document construction - the write side of the interchange format.
//!
//! [`ODocument`] owns a [`Document`] under construction plus the
//! [`BufferPool`] that accumulates its binary payload. Numeric arrays go in
//! through [`ODocument::append_data`], which encodes, pools, and records the
//! buffer view / accessor pair in one step. Finished documents leave through
//! [`ODocument::to_glb`] (binary container), [`ODocument::save`] (JSON with
//! side-car `.bin` files) or [`ODocument::to_embedded`] (base64 data URIs).

mod encode;
mod pool;

pub use encode::{encode, ArrayData, EncodedArray};
pub use pool::{BufferPool, Placement};

use std::fs;
use std::path::Path;

use glam::{Mat4, Vec3};
use tracing::debug;

use crate::doc::{
    Accessor, Attributes, BufferTarget, BufferView, Document, GltfBuffer, Mesh, Node, Primitive,
    PrimitiveMode, IDENTITY_MATRIX,
};
use crate::geom::GeometryBatch;
use crate::glb;
use crate::util::{ComponentType, ElementShape, Error, Result};

/// Pool name used by the reference-drawing helpers.
pub const DEFAULT_POOL: &str = "bin";

/// Prefix for embedded buffer URIs.
const DATA_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Row-major Y-up to Z-up rotation, as stored in node matrices.
const YUP_TO_ZUP: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, -1.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Row-major Z-up to Y-up rotation, inverse of [`YUP_TO_ZUP`].
const ZUP_TO_YUP: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, -1.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// A document under construction.
///
/// The serializable [`Document`] and the binary [`BufferPool`] stay separate
/// until export; buffer entries are appended to the document copy only when
/// the output form (and therefore each buffer's URI) is known. Append order
/// determines the final byte layout, so one `ODocument` must only be fed
/// from one logical call site at a time.
#[derive(Clone, Debug, Default)]
pub struct ODocument {
    doc: Document,
    pool: BufferPool,
}

impl ODocument {
    /// Create a builder with the standard root scene graph.
    pub fn new() -> Self {
        let mut doc = Document::new();
        doc.asset.generator = Some(concat!("gltfkit ", env!("CARGO_PKG_VERSION")).to_string());
        Self { doc, pool: BufferPool::new() }
    }

    /// The document built so far (without buffer entries).
    #[inline]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access to the document for fields the builder does not cover.
    #[inline]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// The accumulated binary payload.
    #[inline]
    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Encode `data` and record it as a new accessor backed by `pool_name`.
    ///
    /// Returns the accessor index, or `Ok(None)` when `data` is empty (no
    /// accessor, buffer view, or pool bytes are created in that case).
    /// Component types outside the document-legal subset are rejected, as is
    /// data whose tuple width disagrees with `shape`.
    pub fn append_data(
        &mut self,
        pool_name: &str,
        data: &ArrayData,
        component_type: ComponentType,
        shape: ElementShape,
        target: Option<BufferTarget>,
    ) -> Result<Option<usize>> {
        if !component_type.is_element_type() {
            return Err(Error::UnsupportedComponentType(component_type.code()));
        }
        let Some(enc) = encode(data, component_type)? else {
            return Ok(None);
        };
        if enc.extent != shape.num_components() {
            return Err(Error::malformed(format!(
                "{} components per item do not form {}",
                enc.extent, shape
            )));
        }

        let placement = self.pool.append(pool_name, &enc.bytes);
        let mut view = BufferView::new(placement.buffer, placement.length, placement.offset);
        view.target = target;
        self.doc.buffer_views.push(view);
        let view_index = self.doc.buffer_views.len() - 1;

        let accessor =
            self.record_accessor(view_index, component_type, shape, enc.count, Some((enc.min, enc.max)))?;
        Ok(Some(accessor))
    }

    /// Record an accessor over an existing buffer view.
    ///
    /// Enforces the byte-length invariant: tightly packed data must fit the
    /// view, and interleaved data (view stride larger than the item size)
    /// must satisfy `(count-1)*stride + item_size <= byte_length`.
    pub fn record_accessor(
        &mut self,
        buffer_view: usize,
        component_type: ComponentType,
        shape: ElementShape,
        count: usize,
        bounds: Option<(Vec<f64>, Vec<f64>)>,
    ) -> Result<usize> {
        let view = self
            .doc
            .buffer_views
            .get(buffer_view)
            .ok_or_else(|| Error::invalid(format!("buffer view {buffer_view} out of range")))?;

        let item_size = shape.num_components() * component_type.num_bytes();
        let needed = match view.byte_stride {
            Some(stride) if stride > item_size && count > 0 => (count - 1) * stride + item_size,
            _ => count * item_size,
        };
        if needed > view.byte_length {
            return Err(Error::AccessorOverrun { needed, available: view.byte_length });
        }

        let (min, max) = match bounds {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        };
        self.doc.accessors.push(Accessor {
            buffer_view: Some(buffer_view),
            byte_offset: None,
            component_type,
            normalized: None,
            count,
            shape,
            max,
            min,
            sparse: None,
            name: None,
            extensions: None,
            extras: None,
        });
        Ok(self.doc.accessors.len() - 1)
    }

    /// Add a geometry batch as a triangle mesh under the root node.
    ///
    /// Returns the new node index, or `None` if the batch has no vertices.
    pub fn add_geometry(&mut self, geom: &GeometryBatch, pool_name: &str) -> Result<Option<usize>> {
        self.add_geometry_with_mode(geom, pool_name, PrimitiveMode::Triangles)
    }

    /// Add a geometry batch with an explicit primitive mode.
    pub fn add_geometry_with_mode(
        &mut self,
        geom: &GeometryBatch,
        pool_name: &str,
        mode: PrimitiveMode,
    ) -> Result<Option<usize>> {
        let positions = self.append_data(
            pool_name,
            &ArrayData::vec3s(&geom.vectors),
            ComponentType::Float32,
            ElementShape::Vec3,
            Some(BufferTarget::ArrayBuffer),
        )?;
        let normals = self.append_data(
            pool_name,
            &ArrayData::vec3s(&geom.normals),
            ComponentType::Float32,
            ElementShape::Vec3,
            Some(BufferTarget::ArrayBuffer),
        )?;
        let indices = self.append_data(
            pool_name,
            &ArrayData::scalars(geom.indices.iter().copied()),
            ComponentType::Uint32,
            ElementShape::Scalar,
            Some(BufferTarget::ElementArrayBuffer),
        )?;
        let colors = self.append_data(
            pool_name,
            &ArrayData::vec3s(&geom.colors),
            ComponentType::Float32,
            ElementShape::Vec3,
            Some(BufferTarget::ArrayBuffer),
        )?;
        let texcoords = self.append_data(
            pool_name,
            &ArrayData::vec2s(&geom.texcoords),
            ComponentType::Float32,
            ElementShape::Vec2,
            Some(BufferTarget::ArrayBuffer),
        )?;
        let batch_ids = self.append_data(
            pool_name,
            &ArrayData::scalars(geom.batch_ids.iter().copied()),
            ComponentType::Float32,
            ElementShape::Scalar,
            Some(BufferTarget::ArrayBuffer),
        )?;

        let Some(positions) = positions else {
            return Ok(None);
        };

        let mut attributes = Attributes::default();
        attributes.set("POSITION", positions);
        if let Some(i) = normals {
            attributes.set("NORMAL", i);
        }
        if let Some(i) = colors {
            attributes.set("COLOR_0", i);
        }
        if let Some(i) = texcoords {
            attributes.set("TEXCOORD_0", i);
        }
        if let Some(i) = batch_ids {
            attributes.set("BATCHID", i);
        }

        let primitive = Primitive {
            attributes,
            indices,
            mode: (mode != PrimitiveMode::Triangles).then_some(mode),
            ..Default::default()
        };
        let name = (!geom.name.is_empty()).then(|| geom.name.clone());
        Ok(Some(self.add_mesh_node(primitive, name)))
    }

    /// Add a single line segment as a reference marker.
    pub fn add_line(&mut self, start: Vec3, end: Vec3) -> Result<Option<usize>> {
        self.add_marker(&[start, end], None, PrimitiveMode::Lines, None)
    }

    /// Add a polyline: one line segment per consecutive point pair.
    pub fn add_polyline(&mut self, points: &[Vec3]) -> Result<()> {
        for pair in points.windows(2) {
            self.add_line(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Add a closed polygon outline.
    pub fn add_polygon(&mut self, points: &[Vec3]) -> Result<Option<usize>> {
        let mut doubled = Vec::with_capacity(points.len() * 2);
        for &p in points {
            doubled.push(p);
            doubled.push(p);
        }
        self.add_marker(&doubled, None, PrimitiveMode::LineLoop, None)
    }

    /// Add a point marker: three axis-aligned line segments crossing at `point`.
    pub fn add_point(&mut self, point: Vec3, size: f32) -> Result<()> {
        self.add_line(point - Vec3::X * size, point + Vec3::X * size)?;
        self.add_line(point - Vec3::Y * size, point + Vec3::Y * size)?;
        self.add_line(point - Vec3::Z * size, point + Vec3::Z * size)?;
        Ok(())
    }

    /// Add a colored axis triad of length `size` at the origin.
    pub fn add_axes(&mut self, size: f32) -> Result<Option<usize>> {
        let s = size;
        let positions = [
            Vec3::ZERO, Vec3::new(s, 0.0, 0.0),
            Vec3::ZERO, Vec3::new(0.0, s, 0.0),
            Vec3::ZERO, Vec3::new(0.0, 0.0, s),
        ];
        let colors = [
            Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.3, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.3, 0.0),
            Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 0.3),
        ];
        self.add_marker(&positions, Some(&colors), PrimitiveMode::LineLoop, Some("axis"))
    }

    fn add_marker(
        &mut self,
        positions: &[Vec3],
        colors: Option<&[Vec3]>,
        mode: PrimitiveMode,
        name: Option<&str>,
    ) -> Result<Option<usize>> {
        let Some(position_acc) = self.append_data(
            DEFAULT_POOL,
            &ArrayData::vec3s(positions),
            ComponentType::Float32,
            ElementShape::Vec3,
            Some(BufferTarget::ArrayBuffer),
        )?
        else {
            return Ok(None);
        };

        let mut attributes = Attributes::default();
        attributes.set("POSITION", position_acc);
        if let Some(colors) = colors {
            if let Some(i) = self.append_data(
                DEFAULT_POOL,
                &ArrayData::vec3s(colors),
                ComponentType::Float32,
                ElementShape::Vec3,
                Some(BufferTarget::ArrayBuffer),
            )? {
                attributes.set("COLOR_0", i);
            }
        }

        let primitive = Primitive {
            attributes,
            mode: Some(mode),
            ..Default::default()
        };
        Ok(Some(self.add_mesh_node(primitive, name.map(String::from))))
    }

    /// Push a one-primitive mesh and a node for it under the root.
    fn add_mesh_node(&mut self, primitive: Primitive, name: Option<String>) -> usize {
        let mesh_index = self.doc.meshes.len();
        self.doc.meshes.push(Mesh::single(primitive));

        let node_index = self.doc.nodes.len();
        let mut node = Node::with_mesh(mesh_index);
        node.name = name;
        self.doc.nodes.push(node);
        self.doc.nodes[0].children.push(node_index);
        node_index
    }

    /// Rotate the root so Y-up content displays Z-up.
    pub fn z_up(&mut self) {
        self.rotate_root(&YUP_TO_ZUP);
    }

    /// Rotate the root so Z-up content displays Y-up.
    pub fn y_up(&mut self) {
        self.rotate_root(&ZUP_TO_YUP);
    }

    /// Replace the root transform with a plain translation.
    pub fn set_offset(&mut self, offset: Vec3) {
        let root = &mut self.doc.nodes[0];
        root.translation = Some(offset.to_array());
        root.matrix = None;
    }

    fn rotate_root(&mut self, rotation: &[f32; 16]) {
        let root = &mut self.doc.nodes[0];
        let current = root.matrix.unwrap_or(IDENTITY_MATRIX);
        // Stored arrays are row-major; composing them row-major as M*R is
        // the same as from_cols_array(R) * from_cols_array(M).
        let composed = Mat4::from_cols_array(rotation) * Mat4::from_cols_array(&current);
        root.matrix = Some(composed.to_cols_array());
    }

    /// Pack the document and all pools into a single GLB container.
    pub fn to_glb(&self) -> Result<Vec<u8>> {
        let mut doc = self.doc.clone();
        for (_, bytes) in self.pool.contents() {
            doc.buffers.push(GltfBuffer { uri: None, byte_length: bytes.len() });
        }
        let json = serde_json::to_vec(&doc)?;
        glb::pack(&json, self.pool.contents().map(|(_, b)| b))
    }

    /// Write the document as JSON with one side-car `.bin` file per pool.
    ///
    /// Binary files land next to `path`, named `<pool>.bin`; pool names may
    /// contain path separators, in which case subdirectories are created.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut doc = self.doc.clone();
        for (name, bytes) in self.pool.contents() {
            let file_name = format!("{name}.bin");
            doc.buffers.push(GltfBuffer {
                uri: Some(file_name.clone()),
                byte_length: bytes.len(),
            });

            let bin_path = dir.join(&file_name);
            if let Some(parent) = bin_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&bin_path, bytes)?;
            debug!("wrote {} ({} bytes)", bin_path.display(), bytes.len());
        }

        fs::write(path, serde_json::to_string_pretty(&doc)?)?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    /// Produce a self-contained document with base64 data-URI buffers.
    pub fn to_embedded(&self) -> Document {
        let mut doc = self.doc.clone();
        for (_, bytes) in self.pool.contents() {
            doc.buffers.push(GltfBuffer {
                uri: Some(format!("{DATA_URI_PREFIX}{}", base64::encode(bytes))),
                byte_length: bytes.len(),
            });
        }
        doc
    }

    /// Split into the document and its pools.
    pub fn into_parts(self) -> (Document, BufferPool) {
        (self.doc, self.pool)
    }
}
