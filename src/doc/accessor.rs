//! Accessor - a typed, shaped view over a byte range.

use serde::{Deserialize, Serialize};

use crate::util::{ComponentType, ElementShape};

/// A typed view describing one semantic array (positions, indices, ...).
///
/// `count` is the number of logical items; each item holds
/// `shape.num_components()` components of `component_type`. Bounds (`min`/
/// `max`) are per component position across all items.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_view: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,
    pub component_type: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<bool>,
    pub count: usize,
    #[serde(rename = "type")]
    pub shape: ElementShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse: Option<Sparse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

impl Accessor {
    /// Byte size of one tightly packed item.
    #[inline]
    pub fn item_size(&self) -> usize {
        self.shape.num_components() * self.component_type.num_bytes()
    }
}

/// Sparse storage override for an accessor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sparse {
    pub count: usize,
    pub indices: SparseIndices,
    pub values: SparseValues,
}

/// Where the indices of sparsely substituted items live.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparseIndices {
    pub buffer_view: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,
    pub component_type: ComponentType,
}

/// Where the substituted values live.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparseValues {
    pub buffer_view: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_item_size() {
        let acc = Accessor {
            buffer_view: Some(0),
            byte_offset: None,
            component_type: ComponentType::Float32,
            normalized: None,
            count: 4,
            shape: ElementShape::Vec3,
            max: None,
            min: None,
            sparse: None,
            name: None,
            extensions: None,
            extras: None,
        };
        assert_eq!(acc.item_size(), 12);
    }

    #[test]
    fn test_accessor_serde() {
        let json = r#"{
            "bufferView": 1,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 2.0, 3.0]
        }"#;
        let acc: Accessor = serde_json::from_str(json).unwrap();
        assert_eq!(acc.buffer_view, Some(1));
        assert_eq!(acc.component_type, ComponentType::Float32);
        assert_eq!(acc.shape, ElementShape::Vec3);
        assert_eq!(acc.max, Some(vec![1.0, 2.0, 3.0]));

        let out = serde_json::to_string(&acc).unwrap();
        assert!(out.contains("\"type\":\"VEC3\""));
        assert!(out.contains("\"componentType\":5126"));
        assert!(!out.contains("sparse"));
    }
}
