//! Integration tests for building documents and reading them back.

use glam::{Vec2, Vec3};

use gltfkit::prelude::*;

fn sample_geometry() -> GeometryBatch {
    let mut geom = GeometryBatch::new();
    geom.vectors = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    geom.normals = vec![Vec3::Z; 4];
    geom.indices = vec![0, 1, 2, 3, 0, 2];
    geom.colors = vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ];
    geom.texcoords = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    geom.batch_ids = vec![0.0, 0.0, 1.0, 1.0];
    geom
}

#[test]
fn test_geometry_roundtrip_through_glb() {
    let geom = sample_geometry();
    let mut builder = ODocument::new();
    builder.add_geometry(&geom, "bin").unwrap().unwrap();

    let glb = IGlb::from_bytes(&builder.to_glb().unwrap()).unwrap();
    let doc = glb.document();
    assert_eq!(doc.buffers.len(), 1);
    assert_eq!(doc.buffers[0].uri, None);

    let prim = &doc.meshes[0].primitives[0];

    // Positions come back as one tuple per vertex.
    let positions = glb.accessor_values(prim.attributes.position.unwrap()).unwrap();
    let expected: Vec<Vec<f64>> = geom
        .vectors
        .iter()
        .map(|v| vec![v.x as f64, v.y as f64, v.z as f64])
        .collect();
    assert_eq!(positions, AccessorValues::Tuples(expected));

    // Indices come back as a flat scalar list.
    let indices = glb.accessor_values(prim.indices.unwrap()).unwrap();
    let expected: Vec<f64> = geom.indices.iter().map(|&i| i as f64).collect();
    assert_eq!(indices, AccessorValues::Scalars(expected));

    // Texture coordinates survive as VEC2 tuples.
    let uvs = glb.accessor_values(prim.attributes.texcoord_0.unwrap()).unwrap();
    assert_eq!(
        uvs.as_tuples().unwrap()[2],
        vec![1.0, 1.0]
    );

    // Batch IDs ride along as a custom attribute.
    let batch_acc = prim.attributes.extra["_BATCHID"];
    let batch = glb.accessor_values(batch_acc).unwrap();
    assert_eq!(batch.as_tuples().unwrap().len(), 4);
}

#[test]
fn test_accessor_bounds_roundtrip() {
    let geom = sample_geometry();
    let mut builder = ODocument::new();
    builder.add_geometry(&geom, "bin").unwrap();

    let glb = IGlb::from_bytes(&builder.to_glb().unwrap()).unwrap();
    let doc = glb.document();
    let pos_acc = doc.meshes[0].primitives[0].attributes.position.unwrap();
    let acc = &doc.accessors[pos_acc];
    assert_eq!(acc.min, Some(vec![0.0, 0.0, 0.0]));
    assert_eq!(acc.max, Some(vec![1.0, 1.0, 0.0]));
    assert_eq!(acc.count, 4);
}

#[test]
fn test_merged_geometry_roundtrip() {
    let mut merged = sample_geometry();
    let mut other = GeometryBatch::new();
    other.vectors = vec![Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 0.0)];
    other.indices = vec![0, 1, 2];
    merged.merge(&other);

    assert_eq!(merged.indices, vec![0, 1, 2, 3, 0, 2, 4, 5, 6]);
    assert_eq!(merged.vertex_count(), 7);

    // Attribute arrays are uneven after the merge, but positions and indices
    // still round-trip.
    let mut builder = ODocument::new();
    builder.add_geometry(&merged, "bin").unwrap();

    let glb = IGlb::from_bytes(&builder.to_glb().unwrap()).unwrap();
    let prim = &glb.document().meshes[0].primitives[0];
    let indices = glb.accessor_values(prim.indices.unwrap()).unwrap();
    assert_eq!(
        indices,
        AccessorValues::Scalars(vec![0.0, 1.0, 2.0, 3.0, 0.0, 2.0, 4.0, 5.0, 6.0])
    );
}

#[test]
fn test_component_type_roundtrips() {
    let cases: [(ComponentType, Vec<f64>); 5] = [
        (ComponentType::Int8, vec![-3.0, 0.0, 5.0]),
        (ComponentType::Uint8, vec![0.0, 128.0, 255.0]),
        (ComponentType::Int16, vec![-300.0, 0.0, 300.0]),
        (ComponentType::Uint16, vec![0.0, 40000.0, 65535.0]),
        (ComponentType::Uint32, vec![0.0, 70000.0, 4294967295.0]),
    ];

    for (ctype, values) in cases {
        let mut builder = ODocument::new();
        builder
            .append_data(
                "bin",
                &ArrayData::Scalars(values.clone()),
                ctype,
                ElementShape::Scalar,
                Some(BufferTarget::ElementArrayBuffer),
            )
            .unwrap()
            .unwrap();

        let glb = IGlb::from_bytes(&builder.to_glb().unwrap()).unwrap();
        let decoded = glb.accessor_values(0).unwrap();
        assert_eq!(decoded, AccessorValues::Scalars(values), "{ctype} roundtrip");
    }
}

#[test]
fn test_two_pools_two_chunks() {
    let mut builder = ODocument::new();
    builder
        .append_data(
            "mesh0",
            &ArrayData::scalars([1u32, 2, 3]),
            ComponentType::Uint32,
            ElementShape::Scalar,
            Some(BufferTarget::ElementArrayBuffer),
        )
        .unwrap();
    builder
        .append_data(
            "mesh1",
            &ArrayData::scalars([4u32]),
            ComponentType::Uint32,
            ElementShape::Scalar,
            Some(BufferTarget::ElementArrayBuffer),
        )
        .unwrap();
    // A later append to the first pool keeps its ordinal.
    builder
        .append_data(
            "mesh0",
            &ArrayData::scalars([5u32]),
            ComponentType::Uint32,
            ElementShape::Scalar,
            Some(BufferTarget::ElementArrayBuffer),
        )
        .unwrap();

    let glb = IGlb::from_bytes(&builder.to_glb().unwrap()).unwrap();
    let doc = glb.document();
    assert_eq!(doc.buffers.len(), 2);
    assert_eq!(doc.buffers[0].byte_length, 16);
    assert_eq!(doc.buffers[1].byte_length, 4);
    assert_eq!(glb.chunks().len(), 2);

    // The third accessor reads from pool 0 at offset 12.
    assert_eq!(doc.buffer_views[2].buffer, 0);
    assert_eq!(doc.buffer_views[2].byte_offset, Some(12));
    assert_eq!(
        glb.accessor_values(2).unwrap(),
        AccessorValues::Scalars(vec![5.0])
    );
}

#[test]
fn test_root_rotation_survives_export() {
    let mut builder = ODocument::new();
    builder.z_up();

    let glb = IGlb::from_bytes(&builder.to_glb().unwrap()).unwrap();
    let matrix = glb.document().nodes[0].matrix.unwrap();
    assert_eq!(
        matrix,
        [
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]
    );
}

#[test]
fn test_save_writes_sidecar_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.gltf");

    let mut builder = ODocument::new();
    builder.add_geometry(&sample_geometry(), "scene0").unwrap();
    builder.save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let doc: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.buffers.len(), 1);
    assert_eq!(doc.buffers[0].uri.as_deref(), Some("scene0.bin"));

    let bin = std::fs::read(dir.path().join("scene0.bin")).unwrap();
    assert_eq!(bin.len(), doc.buffers[0].byte_length);
    // Positions start the pool: first float is vertex 0.x.
    assert_eq!(&bin[0..4], &0.0f32.to_le_bytes());

    // The side-car document decodes with the same accessor layout.
    let pos_acc = doc.meshes[0].primitives[0].attributes.position.unwrap();
    assert_eq!(doc.accessors[pos_acc].count, 4);
}

#[test]
fn test_empty_document_roundtrip() {
    let builder = ODocument::new();
    let glb = IGlb::from_bytes(&builder.to_glb().unwrap()).unwrap();
    assert!(glb.chunks().is_empty());
    assert_eq!(glb.document().nodes.len(), 1);
    assert!(glb.document().buffers.is_empty());
}
