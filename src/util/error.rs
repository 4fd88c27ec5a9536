//! Error types for the gltfkit library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gltfkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Component type code or name is not one of the eight defined types
    #[error("Unsupported component type: {0}")]
    UnsupportedComponentType(u32),

    /// Element data does not match its declared shape
    #[error("Malformed element shape: {0}")]
    MalformedElementShape(String),

    /// Accessor describes more bytes than its buffer view holds
    #[error("Accessor overrun: needs {needed} bytes, {available} available")]
    AccessorOverrun { needed: usize, available: usize },

    /// Chunk payload does not fit a 32-bit length field
    #[error("Chunk payload too large: {0} bytes")]
    PayloadTooLarge(usize),

    /// Invalid magic bytes at start of container
    #[error("Invalid GLB container: expected glTF magic bytes")]
    BadMagic,

    /// Unsupported container format version
    #[error("Unsupported glTF container version: {0}")]
    UnsupportedVersion(u32),

    /// Container ends before a declared chunk does
    #[error("Truncated container at byte {0}")]
    TruncatedContainer(usize),

    /// First chunk of the container is not the JSON chunk
    #[error("First container chunk is not a JSON chunk")]
    MissingJsonChunk,

    /// Document references an index that does not exist
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 conversion error
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Create an invalid document error from a message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    /// Create a malformed element shape error from a message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedElementShape(msg.into())
    }
}

/// Result type alias for gltfkit operations.
pub type Result<T> = std::result::Result<T, Error>;
