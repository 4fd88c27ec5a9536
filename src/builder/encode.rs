//! Array encoding - turns numeric input into typed little-endian bytes.

use glam::{Vec2, Vec3};

use crate::util::{ComponentType, Error, Result};

/// Numeric input for buffer encoding.
///
/// Either a flat run of scalars (each scalar is one logical item) or a list
/// of fixed-size tuples (each tuple is one logical item). Values are carried
/// as `f64` and cast to the target component type at write time, matching
/// the numeric model of the document format.
#[derive(Clone, Debug)]
pub enum ArrayData {
    /// One item per scalar.
    Scalars(Vec<f64>),
    /// One item per tuple; all tuples must share a length.
    Tuples(Vec<Vec<f64>>),
}

impl ArrayData {
    /// Build flat scalar input from anything that converts to `f64`.
    pub fn scalars<T, I>(values: I) -> Self
    where
        T: Into<f64>,
        I: IntoIterator<Item = T>,
    {
        Self::Scalars(values.into_iter().map(Into::into).collect())
    }

    /// Build tuple input from 2-component vectors.
    pub fn vec2s(values: &[Vec2]) -> Self {
        let flat: &[f32] = bytemuck::cast_slice(values);
        Self::Tuples(flat.chunks_exact(2).map(|c| vec![c[0] as f64, c[1] as f64]).collect())
    }

    /// Build tuple input from 3-component vectors.
    pub fn vec3s(values: &[Vec3]) -> Self {
        let flat: &[f32] = bytemuck::cast_slice(values);
        Self::Tuples(
            flat.chunks_exact(3)
                .map(|c| vec![c[0] as f64, c[1] as f64, c[2] as f64])
                .collect(),
        )
    }

    /// Number of logical items.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalars(v) => v.len(),
            Self::Tuples(v) => v.len(),
        }
    }

    /// True if there is nothing to encode.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of encoding one array: raw bytes plus per-component bounds.
#[derive(Clone, Debug)]
pub struct EncodedArray {
    /// Little-endian component data, tightly packed.
    pub bytes: Vec<u8>,
    /// Per-component-position minimum across all items.
    pub min: Vec<f64>,
    /// Per-component-position maximum across all items.
    pub max: Vec<f64>,
    /// Number of logical items encoded.
    pub count: usize,
    /// Components per item (1 for scalar input).
    pub extent: usize,
}

/// Encode `data` into a tightly packed byte buffer of `component_type`.
///
/// Tuples are flattened row-major. Returns `Ok(None)` for empty input -
/// callers must skip accessor creation entirely rather than emit a
/// zero-length accessor. Mismatched tuple lengths fail with
/// [`Error::MalformedElementShape`].
pub fn encode(data: &ArrayData, component_type: ComponentType) -> Result<Option<EncodedArray>> {
    if data.is_empty() {
        return Ok(None);
    }

    let (extent, count) = match data {
        ArrayData::Scalars(v) => (1, v.len()),
        ArrayData::Tuples(v) => (v[0].len(), v.len()),
    };
    if extent == 0 {
        return Err(Error::malformed("empty tuples cannot be encoded".to_string()));
    }

    let mut bytes = Vec::with_capacity(count * extent * component_type.num_bytes());
    let mut min = vec![f64::INFINITY; extent];
    let mut max = vec![f64::NEG_INFINITY; extent];

    let mut write_item = |item: &[f64]| {
        for (i, &value) in item.iter().enumerate() {
            component_type.write(&mut bytes, value);
            if value < min[i] {
                min[i] = value;
            }
            if value > max[i] {
                max[i] = value;
            }
        }
    };

    match data {
        ArrayData::Scalars(values) => {
            for &value in values {
                write_item(&[value]);
            }
        }
        ArrayData::Tuples(tuples) => {
            for tuple in tuples {
                if tuple.len() != extent {
                    return Err(Error::malformed(format!(
                        "mismatched tuple lengths: expected {extent}, got {}",
                        tuple.len()
                    )));
                }
                write_item(tuple);
            }
        }
    }

    Ok(Some(EncodedArray { bytes, min, max, count, extent }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_encodes_to_none() {
        let data = ArrayData::Scalars(Vec::new());
        assert!(encode(&data, ComponentType::Float32).unwrap().is_none());

        let data = ArrayData::Tuples(Vec::new());
        assert!(encode(&data, ComponentType::Float32).unwrap().is_none());
    }

    #[test]
    fn test_scalar_encoding() {
        let data = ArrayData::scalars([0u32, 1, 2]);
        let enc = encode(&data, ComponentType::Uint32).unwrap().unwrap();
        assert_eq!(enc.count, 3);
        assert_eq!(enc.extent, 1);
        assert_eq!(enc.bytes.len(), 12);
        assert_eq!(&enc.bytes[0..4], &[0, 0, 0, 0]);
        assert_eq!(&enc.bytes[4..8], &[1, 0, 0, 0]);
        assert_eq!(enc.min, vec![0.0]);
        assert_eq!(enc.max, vec![2.0]);
    }

    #[test]
    fn test_per_component_bounds() {
        let data = ArrayData::Tuples(vec![vec![1.0, 5.0, 2.0], vec![3.0, 1.0, 9.0]]);
        let enc = encode(&data, ComponentType::Float32).unwrap().unwrap();
        assert_eq!(enc.min, vec![1.0, 1.0, 2.0]);
        assert_eq!(enc.max, vec![3.0, 5.0, 9.0]);
        assert_eq!(enc.count, 2);
        assert_eq!(enc.bytes.len(), 24);
    }

    #[test]
    fn test_row_major_flattening() {
        let data = ArrayData::Tuples(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let enc = encode(&data, ComponentType::Uint8).unwrap().unwrap();
        assert_eq!(enc.bytes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mismatched_tuples_rejected() {
        let data = ArrayData::Tuples(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]);
        let err = encode(&data, ComponentType::Float32).unwrap_err();
        assert!(matches!(err, Error::MalformedElementShape(_)));
    }

    #[test]
    fn test_vec3_constructor() {
        let data = ArrayData::vec3s(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(data.len(), 2);
        let enc = encode(&data, ComponentType::Float32).unwrap().unwrap();
        assert_eq!(enc.min, vec![1.0, 2.0, 3.0]);
        assert_eq!(enc.max, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_float64_internal_encoding() {
        let data = ArrayData::Scalars(vec![0.5, -0.5]);
        let enc = encode(&data, ComponentType::Float64).unwrap().unwrap();
        assert_eq!(enc.bytes.len(), 16);
        assert_eq!(&enc.bytes[0..8], &0.5f64.to_le_bytes());
    }
}
