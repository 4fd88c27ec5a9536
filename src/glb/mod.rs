//! GLB binary container format.
//!
//! A GLB container carries a JSON document and its binary buffers in one
//! little-endian stream of length-prefixed, 4-byte-aligned chunks.
//!
//! ## Container Structure
//!
//! ```text
//! +--------------------+
//! | Magic: "glTF"      |  4 bytes
//! +--------------------+
//! | Version            |  4 bytes (u32 LE) = 2
//! +--------------------+
//! | Total length       |  4 bytes (u32 LE)
//! +--------------------+
//! | Chunk 0 length     |  4 bytes (u32 LE, padded payload size)
//! | Chunk 0 type       |  4 bytes (u32 LE) = "JSON"
//! | Chunk 0 payload    |  JSON text, space-padded to 4 bytes
//! +--------------------+
//! | Chunk 1 length     |
//! | Chunk 1 type       |  = "BIN\0"
//! | Chunk 1 payload    |  raw buffer bytes, space-padded to 4 bytes
//! +--------------------+
//! | ... further chunks, read until EOF
//! +--------------------+
//! ```

mod decode;
mod format;
mod reader;
mod writer;

pub use decode::AccessorValues;
pub use format::*;
pub use reader::{Chunk, IGlb};
pub use writer::pack;
