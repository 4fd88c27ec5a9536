//! GLB container reader.

use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, trace};

use super::format::*;
use crate::doc::Document;
use crate::util::{Error, Result};

/// One raw chunk as read from a container: type tag plus padded payload.
///
/// Chunks with tags other than [`CHUNK_BIN`] are preserved as opaque bytes
/// rather than rejected, so containers using future chunk kinds still parse.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// Chunk type tag.
    pub tag: u32,
    /// Padded payload bytes exactly as stored.
    pub data: Vec<u8>,
}

impl Chunk {
    /// True if this chunk carries binary buffer data.
    #[inline]
    pub fn is_binary(&self) -> bool {
        self.tag == CHUNK_BIN
    }
}

/// A parsed GLB container: the document plus its raw payload chunks.
pub struct IGlb {
    document: Document,
    json: Vec<u8>,
    chunks: Vec<Chunk>,
    version: u32,
    declared_len: u32,
}

impl IGlb {
    /// Open and parse a GLB file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a GLB container from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::TruncatedContainer(bytes.len()));
        }
        if &bytes[0..4] != GLB_MAGIC {
            return Err(Error::BadMagic);
        }

        let version = LittleEndian::read_u32(&bytes[4..]);
        if !(GLB_MIN_VERSION..=GLB_MAX_VERSION).contains(&version) {
            return Err(Error::UnsupportedVersion(version));
        }

        // Advisory only: trailing bytes past this are still scanned as chunks.
        let declared_len = LittleEndian::read_u32(&bytes[8..]);

        let mut raw = Vec::new();
        let mut cursor = HEADER_SIZE;
        while cursor < bytes.len() {
            if bytes.len() - cursor < CHUNK_HEADER_SIZE {
                return Err(Error::TruncatedContainer(cursor));
            }
            let length = LittleEndian::read_u32(&bytes[cursor..]) as usize;
            let tag = LittleEndian::read_u32(&bytes[cursor + 4..]);
            let start = cursor + CHUNK_HEADER_SIZE;
            let end = start + length;
            if end > bytes.len() {
                return Err(Error::TruncatedContainer(cursor));
            }
            trace!("chunk at {cursor}: tag {tag:#010x}, {length} bytes");
            raw.push(Chunk { tag, data: bytes[start..end].to_vec() });
            cursor = end;
        }

        if raw.is_empty() || raw[0].tag != CHUNK_JSON {
            return Err(Error::MissingJsonChunk);
        }
        let json_chunk = raw.remove(0);
        let document: Document = serde_json::from_slice(&json_chunk.data)?;

        debug!(
            "parsed GLB container: version {version}, {} payload chunks, {} declared bytes",
            raw.len(),
            declared_len
        );
        Ok(Self {
            document,
            json: json_chunk.data,
            chunks: raw,
            version,
            declared_len,
        })
    }

    /// The parsed document.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the reader, keeping only the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Container format version.
    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Total length declared in the container header.
    #[inline]
    pub fn declared_length(&self) -> u32 {
        self.declared_len
    }

    /// The JSON document text with alignment padding trimmed.
    pub fn json_text(&self) -> Result<&str> {
        std::str::from_utf8(trim_padding(&self.json))
            .map_err(|e| Error::invalid(format!("JSON chunk is not UTF-8: {e}")))
    }

    /// Payload chunks after the JSON chunk, in read order.
    ///
    /// Index 0 is conventionally the sole binary chunk, and chunk indices
    /// line up with document buffer indices for GLB-bound buffers.
    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// One payload chunk by index.
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Buffer `index`'s bytes, trimmed to the document's declared byteLength.
    pub fn buffer_bytes(&self, index: usize) -> Result<&[u8]> {
        let buffer = self
            .document
            .buffers
            .get(index)
            .ok_or_else(|| Error::invalid(format!("buffer {index} out of range")))?;
        let chunk = self
            .chunks
            .get(index)
            .ok_or_else(|| Error::invalid(format!("no chunk for buffer {index}")))?;
        if buffer.byte_length > chunk.data.len() {
            return Err(Error::AccessorOverrun {
                needed: buffer.byte_length,
                available: chunk.data.len(),
            });
        }
        Ok(&chunk.data[..buffer.byte_length])
    }
}
