//! glTF 2.0 document model.
//!
//! Plain serializable data holders for the JSON side of the interchange
//! format. The structs here carry no buffer bytes - binary payloads live in
//! a [`BufferPool`](crate::builder::BufferPool) owned by the builder and are
//! joined with the document only at export time.
//!
//! Field names follow the glTF JSON schema (camelCase on the wire); optional
//! fields are omitted from output entirely rather than serialized as null.

mod accessor;
mod animation;
mod camera;
mod material;
mod mesh;

pub use accessor::{Accessor, Sparse, SparseIndices, SparseValues};
pub use animation::{Animation, AnimationChannel, AnimationSampler, ChannelTarget, Interpolation, Skin, TargetPath};
pub use camera::{Camera, CameraKind, Orthographic, Perspective};
pub use material::{
    AlphaMode, Image, Material, NormalTextureInfo, OcclusionTextureInfo, PbrMetallicRoughness,
    Sampler, Texture, TextureInfo, CLAMP_TO_EDGE, LINEAR, MIRRORED_REPEAT, NEAREST, REPEAT,
};
pub use mesh::{Attributes, Mesh, Primitive, PrimitiveMode};

use serde::{Deserialize, Serialize};

/// Identity matrix for the root node, row order as stored in documents.
pub const IDENTITY_MATRIX: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Buffer view usage target - which GPU binding point the bytes feed.
///
/// The target drives decode shaping: vertex-attribute views decode to
/// per-item tuples, element-index views decode to a flat scalar list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum BufferTarget {
    /// Vertex attribute data (GL ARRAY_BUFFER)
    ArrayBuffer = 34962,
    /// Element index data (GL ELEMENT_ARRAY_BUFFER)
    ElementArrayBuffer = 34963,
}

impl TryFrom<u32> for BufferTarget {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, String> {
        match code {
            34962 => Ok(Self::ArrayBuffer),
            34963 => Ok(Self::ElementArrayBuffer),
            _ => Err(format!("unknown buffer view target: {code}")),
        }
    }
}

impl From<BufferTarget> for u32 {
    #[inline]
    fn from(t: BufferTarget) -> u32 {
        t as u32
    }
}

/// Asset metadata - the only mandatory document property.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
}

impl Default for Asset {
    fn default() -> Self {
        Self {
            version: "2.0".to_string(),
            generator: None,
            copyright: None,
            min_version: None,
        }
    }
}

/// A buffer of binary data, referenced by buffer views.
///
/// `uri` is absent for the buffer bound to a GLB binary chunk, a relative
/// file name for side-car `.bin` exports, or a base64 data URI for embedded
/// exports. `byte_length` is always the exact unpadded length.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GltfBuffer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    pub byte_length: usize,
}

/// A contiguous byte range within a buffer, with optional interleaving stride.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,
    pub byte_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_stride: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<BufferTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BufferView {
    /// Create a view over `byte_length` bytes of `buffer` starting at `byte_offset`.
    pub fn new(buffer: usize, byte_length: usize, byte_offset: usize) -> Self {
        Self {
            buffer,
            byte_offset: Some(byte_offset),
            byte_length,
            byte_stride: None,
            target: None,
            name: None,
        }
    }
}

/// A scene-graph node.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<[f32; 16]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

impl Node {
    /// Create a node that instantiates a mesh.
    pub fn with_mesh(mesh: usize) -> Self {
        Self { mesh: Some(mesh), ..Default::default() }
    }
}

/// A scene - the set of root nodes to render.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Root document object.
///
/// [`Document::new`] seeds the scene graph the way every export starts:
/// node 0 holds an identity matrix and collects all geometry nodes as
/// children, so axis-convention rotations apply in exactly one place.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub asset: Asset,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessors: Vec<Accessor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffer_views: Vec<BufferView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<GltfBuffer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cameras: Vec<Camera>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions_used: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions_required: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meshes: Vec<Mesh>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samplers: Vec<Sampler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenes: Vec<Scene>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skins: Vec<Skin>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub textures: Vec<Texture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

impl Document {
    /// Create a document with the standard root scene graph:
    /// one root node with an identity matrix, one scene referencing it.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                matrix: Some(IDENTITY_MATRIX),
                ..Default::default()
            }],
            scenes: vec![Scene { nodes: vec![0], name: None }],
            scene: Some(0),
            ..Self::empty()
        }
    }

    /// Create a document with no scene graph at all.
    pub fn empty() -> Self {
        Self {
            asset: Asset::default(),
            accessors: Vec::new(),
            animations: Vec::new(),
            buffer_views: Vec::new(),
            buffers: Vec::new(),
            cameras: Vec::new(),
            extensions_used: Vec::new(),
            extensions_required: Vec::new(),
            images: Vec::new(),
            materials: Vec::new(),
            meshes: Vec::new(),
            nodes: Vec::new(),
            samplers: Vec::new(),
            scene: None,
            scenes: Vec::new(),
            skins: Vec::new(),
            textures: Vec::new(),
            extensions: None,
            extras: None,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
