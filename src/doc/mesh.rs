//! Mesh, primitive and vertex attribute bindings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a primitive's vertex stream is assembled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum PrimitiveMode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    #[default]
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl TryFrom<u32> for PrimitiveMode {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, String> {
        match code {
            0 => Ok(Self::Points),
            1 => Ok(Self::Lines),
            2 => Ok(Self::LineLoop),
            3 => Ok(Self::LineStrip),
            4 => Ok(Self::Triangles),
            5 => Ok(Self::TriangleStrip),
            6 => Ok(Self::TriangleFan),
            _ => Err(format!("unknown primitive mode: {code}")),
        }
    }
}

impl From<PrimitiveMode> for u32 {
    #[inline]
    fn from(mode: PrimitiveMode) -> u32 {
        mode as u32
    }
}

/// Semantic-to-accessor bindings for one primitive.
///
/// The well-known glTF semantics are typed fields; anything else lands in
/// `extra` under an application-specific name. [`Attributes::set`] upper-cases
/// the key and prefixes unknown semantics with an underscore, which is how
/// custom attributes such as `_BATCHID` are spelled on the wire.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "POSITION", skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(rename = "NORMAL", skip_serializing_if = "Option::is_none")]
    pub normal: Option<usize>,
    #[serde(rename = "TANGENT", skip_serializing_if = "Option::is_none")]
    pub tangent: Option<usize>,
    #[serde(rename = "TEXCOORD_0", skip_serializing_if = "Option::is_none")]
    pub texcoord_0: Option<usize>,
    #[serde(rename = "TEXCOORD_1", skip_serializing_if = "Option::is_none")]
    pub texcoord_1: Option<usize>,
    #[serde(rename = "COLOR_0", skip_serializing_if = "Option::is_none")]
    pub color_0: Option<usize>,
    #[serde(rename = "JOINTS_0", skip_serializing_if = "Option::is_none")]
    pub joints_0: Option<usize>,
    #[serde(rename = "WEIGHTS_0", skip_serializing_if = "Option::is_none")]
    pub weights_0: Option<usize>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, usize>,
}

impl Attributes {
    /// Bind `accessor` to the semantic `key`.
    ///
    /// Known semantics are matched case-insensitively; unknown ones are
    /// stored upper-cased with a leading underscore.
    pub fn set(&mut self, key: &str, accessor: usize) {
        let key = key.to_ascii_uppercase();
        match key.as_str() {
            "POSITION" => self.position = Some(accessor),
            "NORMAL" => self.normal = Some(accessor),
            "TANGENT" => self.tangent = Some(accessor),
            "TEXCOORD_0" => self.texcoord_0 = Some(accessor),
            "TEXCOORD_1" => self.texcoord_1 = Some(accessor),
            "COLOR_0" => self.color_0 = Some(accessor),
            "JOINTS_0" => self.joints_0 = Some(accessor),
            "WEIGHTS_0" => self.weights_0 = Some(accessor),
            _ if key.starts_with('_') => {
                self.extra.insert(key, accessor);
            }
            _ => {
                self.extra.insert(format!("_{key}"), accessor);
            }
        }
    }

    /// True if no semantic is bound.
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.normal.is_none()
            && self.tangent.is_none()
            && self.texcoord_0.is_none()
            && self.texcoord_1.is_none()
            && self.color_0.is_none()
            && self.joints_0.is_none()
            && self.weights_0.is_none()
            && self.extra.is_empty()
    }
}

/// One draw call: attribute bindings plus an optional index accessor.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Primitive {
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PrimitiveMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Attributes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

/// A mesh - a list of primitives sharing one scene-graph node.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Mesh {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primitives: Vec<Primitive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

impl Mesh {
    /// Create a mesh holding a single primitive.
    pub fn single(primitive: Primitive) -> Self {
        Self { primitives: vec![primitive], ..Default::default() }
    }
}
