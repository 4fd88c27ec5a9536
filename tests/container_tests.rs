//! Integration tests for GLB container framing.

use byteorder::{ByteOrder, LittleEndian};

use gltfkit::glb::{self, pack, CHUNK_BIN, CHUNK_JSON, HEADER_SIZE};
use gltfkit::prelude::*;

#[test]
fn test_container_scenario_44_bytes() {
    // 7-byte JSON pads to 8; 5-byte pool pads to 8:
    // 12 + 8 + 8 + 8 + 8 = 44 bytes total.
    let json = br#"{"a":1}"#;
    let bin: &[u8] = &[1, 2, 3, 4, 5];
    let container = pack(json, [bin]).unwrap();
    assert_eq!(container.len(), 44);
    assert_eq!(LittleEndian::read_u32(&container[8..]), 44);
}

#[test]
fn test_pack_unpack_preserves_payloads() {
    let json = br#"{"asset":{"version":"2.0"},"buffers":[{"byteLength":5}]}"#;
    let bin: &[u8] = &[1, 2, 3, 4, 5];
    let container = pack(json, [bin]).unwrap();

    let glb = IGlb::from_bytes(&container).unwrap();
    assert_eq!(glb.json_text().unwrap().as_bytes(), json);
    assert_eq!(glb.buffer_bytes(0).unwrap(), bin);
    // The stored chunk keeps its padding; trimming happens per buffer length.
    assert_eq!(glb.chunks()[0].data.len(), 8);
}

#[test]
fn test_chunk_order_json_first_then_pools() {
    let json = br#"{"asset":{"version":"2.0"}}"#;
    let a: &[u8] = &[0xAA; 6];
    let b: &[u8] = &[0xBB; 2];
    let container = pack(json, [a, b]).unwrap();

    assert_eq!(LittleEndian::read_u32(&container[16..]), CHUNK_JSON);

    let glb = IGlb::from_bytes(&container).unwrap();
    assert_eq!(glb.chunks().len(), 2);
    assert_eq!(glb.chunks()[0].tag, CHUNK_BIN);
    assert_eq!(&glb.chunks()[0].data[..6], a);
    assert_eq!(&glb.chunks()[1].data[..2], b);
}

#[test]
fn test_padding_is_spaces() {
    let container = pack(br#"{"a":1}"#, [&[7u8][..]]).unwrap();
    // JSON payload occupies bytes 20..27, pad byte at 27.
    assert_eq!(container[27], 0x20);
    // Binary payload occupies byte 36, pad bytes at 37..40.
    assert_eq!(&container[37..40], &[0x20; 3]);
}

#[test]
fn test_corrupt_magic_rejected() {
    let mut container = pack(br#"{"asset":{"version":"2.0"}}"#, []).unwrap();
    container[1] = b'?';
    assert!(matches!(IGlb::from_bytes(&container), Err(Error::BadMagic)));
}

#[test]
fn test_version_out_of_range_rejected() {
    let mut container = pack(br#"{"asset":{"version":"2.0"}}"#, []).unwrap();
    LittleEndian::write_u32(&mut container[4..8], 1);
    assert!(matches!(
        IGlb::from_bytes(&container),
        Err(Error::UnsupportedVersion(1))
    ));
}

#[test]
fn test_chunk_length_past_eof_rejected() {
    let mut container = pack(br#"{"asset":{"version":"2.0"}}"#, [&[1u8, 2][..]]).unwrap();
    // Inflate the binary chunk's declared length beyond the file.
    let bin_header = HEADER_SIZE + 8 + 28;
    LittleEndian::write_u32(&mut container[bin_header..bin_header + 4], 1000);
    assert!(matches!(
        IGlb::from_bytes(&container),
        Err(Error::TruncatedContainer(_))
    ));
}

#[test]
fn test_short_header_rejected() {
    assert!(matches!(
        IGlb::from_bytes(b"glTF"),
        Err(Error::TruncatedContainer(4))
    ));
}

#[test]
fn test_trailing_partial_chunk_header_rejected() {
    let mut container = pack(br#"{"asset":{"version":"2.0"}}"#, []).unwrap();
    container.extend_from_slice(&[0, 0, 0]);
    assert!(matches!(
        IGlb::from_bytes(&container),
        Err(Error::TruncatedContainer(_))
    ));
}

#[test]
fn test_trailing_extra_chunk_tolerated() {
    // Chunks past the declared total length are still read.
    let mut container = pack(br#"{"asset":{"version":"2.0"}}"#, []).unwrap();
    container.extend_from_slice(&8u32.to_le_bytes());
    container.extend_from_slice(&0x0042_4242u32.to_le_bytes());
    container.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);

    let glb = IGlb::from_bytes(&container).unwrap();
    assert_eq!(glb.chunks().len(), 1);
    assert_eq!(glb.chunks()[0].tag, 0x0042_4242);
}

#[test]
fn test_padded_length_law() {
    for len in [0usize, 1, 2, 3, 4, 5, 7, 8, 100, 1021] {
        let padded = glb::padded_len(len);
        assert_eq!(padded % 4, 0);
        assert!(padded >= len && padded - len < 4);
    }
}
