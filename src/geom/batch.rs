//! GeometryBatch - mergeable vertex/index arrays.

use glam::{Mat3, Vec2, Vec3};

/// A set of vertex attributes plus an index list, built up by merging.
///
/// Attribute arrays are parallel: entry `i` of each non-empty array belongs
/// to vertex `i`. Indices refer into `vectors` and stay valid across merges
/// because [`GeometryBatch::merge`] rebases incoming indices by the current
/// vertex count before appending.
#[derive(Clone, Debug)]
pub struct GeometryBatch {
    /// Vertex positions.
    pub vectors: Vec<Vec3>,
    /// Vertex normals.
    pub normals: Vec<Vec3>,
    /// Triangle/line indices into `vectors`.
    pub indices: Vec<u32>,
    /// Per-vertex RGB colors.
    pub colors: Vec<Vec3>,
    /// Texture coordinates.
    pub texcoords: Vec<Vec2>,
    /// Per-vertex batch identifiers.
    pub batch_ids: Vec<f32>,
    /// Name given to the mesh node on export.
    pub name: String,
}

impl Default for GeometryBatch {
    fn default() -> Self {
        Self {
            vectors: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            colors: Vec::new(),
            texcoords: Vec::new(),
            batch_ids: Vec::new(),
            name: "batch".to_string(),
        }
    }
}

impl GeometryBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vectors.len()
    }

    /// True if the batch holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Append `other`, rebasing its indices by the current vertex count.
    ///
    /// Attribute arrays are appended unshifted, so after the merge every
    /// index in `self.indices` still refers to a valid vertex.
    pub fn merge(&mut self, other: &GeometryBatch) {
        let base = self.vectors.len() as u32;
        self.indices.extend(other.indices.iter().map(|&i| i + base));
        self.vectors.extend_from_slice(&other.vectors);
        self.normals.extend_from_slice(&other.normals);
        self.colors.extend_from_slice(&other.colors);
        self.texcoords.extend_from_slice(&other.texcoords);
        self.batch_ids.extend_from_slice(&other.batch_ids);
    }

    /// Translate all positions by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vectors {
            *v += offset;
        }
    }

    /// Rotate positions and normals by a 3x3 matrix.
    pub fn rotate(&mut self, rotation: Mat3) {
        for v in &mut self.vectors {
            *v = rotation * *v;
        }
        for n in &mut self.normals {
            *n = rotation * *n;
        }
    }

    /// Componentwise min and max over all positions, or `None` when empty.
    pub fn aabb(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vectors.first()?;
        let mut min = first;
        let mut max = first;
        for &v in &self.vectors[1..] {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> GeometryBatch {
        let mut g = GeometryBatch::new();
        g.vectors = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        g.indices = vec![0, 1, 2, 3, 0, 2];
        g
    }

    fn triangle() -> GeometryBatch {
        let mut g = GeometryBatch::new();
        g.vectors = vec![
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ];
        g.indices = vec![0, 1, 2];
        g
    }

    #[test]
    fn test_merge_rebases_indices() {
        let mut a = quad();
        a.merge(&triangle());

        assert_eq!(a.vertex_count(), 7);
        assert_eq!(a.indices, vec![0, 1, 2, 3, 0, 2, 4, 5, 6]);
        // Every index refers to a valid vertex.
        assert!(a.indices.iter().all(|&i| (i as usize) < a.vertex_count()));
    }

    #[test]
    fn test_merge_into_empty() {
        let mut a = GeometryBatch::new();
        a.merge(&triangle());
        assert_eq!(a.indices, vec![0, 1, 2]);
        assert_eq!(a.vertex_count(), 3);
    }

    #[test]
    fn test_aabb() {
        let mut g = GeometryBatch::new();
        g.vectors = vec![
            Vec3::new(-1.0, 5.0, 2.0),
            Vec3::new(3.0, 1.0, 9.0),
            Vec3::new(0.0, 2.0, -4.0),
        ];
        let (min, max) = g.aabb().unwrap();
        assert_eq!(min, Vec3::new(-1.0, 1.0, -4.0));
        assert_eq!(max, Vec3::new(3.0, 5.0, 9.0));
    }

    #[test]
    fn test_aabb_empty_is_none() {
        assert!(GeometryBatch::new().aabb().is_none());
    }

    #[test]
    fn test_translate() {
        let mut g = triangle();
        g.translate(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(g.vectors[0], Vec3::new(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotate() {
        let mut g = GeometryBatch::new();
        g.vectors = vec![Vec3::new(1.0, 0.0, 0.0)];
        g.normals = vec![Vec3::new(0.0, 1.0, 0.0)];
        let r = Mat3::from_rotation_z(std::f32::consts::FRAC_PI_2);
        g.rotate(r);
        assert!((g.vectors[0] - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
        assert!((g.normals[0] - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }
}
