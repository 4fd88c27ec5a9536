//! Component types - fundamental storage types for accessor data.

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Error, Result};

/// Numeric component type enum - the storage type of one accessor component.
///
/// Each type carries a fixed byte width and a well-defined little-endian
/// binary representation. The discriminants are the GL numeric codes used
/// on the wire by glTF documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum ComponentType {
    /// Signed 8-bit integer
    Int8 = 5120,
    /// Unsigned 8-bit integer
    Uint8 = 5121,
    /// Signed 16-bit integer
    Int16 = 5122,
    /// Unsigned 16-bit integer
    Uint16 = 5123,
    /// Signed 32-bit integer (encoding helper only, not legal in documents)
    Int32 = 5124,
    /// Unsigned 32-bit integer
    Uint32 = 5125,
    /// 32-bit floating point (IEEE 754 single precision)
    Float32 = 5126,
    /// 64-bit floating point (encoding helper only, not legal in documents)
    Float64 = 5127,
}

impl ComponentType {
    /// Number of component types
    pub const COUNT: usize = 8;

    /// Returns the size in bytes of a single component of this type.
    #[inline]
    pub const fn num_bytes(self) -> usize {
        match self {
            Self::Int8 => 1,
            Self::Uint8 => 1,
            Self::Int16 => 2,
            Self::Uint16 => 2,
            Self::Int32 => 4,
            Self::Uint32 => 4,
            Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    /// Returns the numeric code of this type as used in documents.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Returns the GL-style name of this type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "BYTE",
            Self::Uint8 => "UNSIGNED_BYTE",
            Self::Int16 => "SHORT",
            Self::Uint16 => "UNSIGNED_SHORT",
            Self::Int32 => "INT",
            Self::Uint32 => "UNSIGNED_INT",
            Self::Float32 => "FLOAT",
            Self::Float64 => "DOUBLE",
        }
    }

    /// Parse a component type from its numeric code.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            5120 => Ok(Self::Int8),
            5121 => Ok(Self::Uint8),
            5122 => Ok(Self::Int16),
            5123 => Ok(Self::Uint16),
            5124 => Ok(Self::Int32),
            5125 => Ok(Self::Uint32),
            5126 => Ok(Self::Float32),
            5127 => Ok(Self::Float64),
            _ => Err(Error::UnsupportedComponentType(code)),
        }
    }

    /// Parse a component type from its GL-style name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "BYTE" => Ok(Self::Int8),
            "UNSIGNED_BYTE" => Ok(Self::Uint8),
            "SHORT" => Ok(Self::Int16),
            "UNSIGNED_SHORT" => Ok(Self::Uint16),
            "INT" => Ok(Self::Int32),
            "UNSIGNED_INT" => Ok(Self::Uint32),
            "FLOAT" => Ok(Self::Float32),
            "DOUBLE" => Ok(Self::Float64),
            _ => Err(Error::UnsupportedComponentType(0)),
        }
    }

    /// Returns true if this type is legal for accessor element data.
    ///
    /// Int32 and Float64 exist for internal encoding helpers and must never
    /// appear in a document accessor.
    #[inline]
    pub const fn is_element_type(self) -> bool {
        !matches!(self, Self::Int32 | Self::Float64)
    }

    /// Returns true if this is an integer type.
    #[inline]
    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::Float32 | Self::Float64)
    }

    /// Returns true if this is a floating point type.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Append one value to `out`, little-endian, cast to this type.
    pub fn write(self, out: &mut Vec<u8>, value: f64) {
        match self {
            Self::Int8 => out.push(value as i8 as u8),
            Self::Uint8 => out.push(value as u8),
            Self::Int16 => out.extend_from_slice(&(value as i16).to_le_bytes()),
            Self::Uint16 => out.extend_from_slice(&(value as u16).to_le_bytes()),
            Self::Int32 => out.extend_from_slice(&(value as i32).to_le_bytes()),
            Self::Uint32 => out.extend_from_slice(&(value as u32).to_le_bytes()),
            Self::Float32 => out.extend_from_slice(&(value as f32).to_le_bytes()),
            Self::Float64 => out.extend_from_slice(&value.to_le_bytes()),
        }
    }

    /// Read one value at `offset`, little-endian.
    ///
    /// Callers must ensure `offset + num_bytes()` bytes are available.
    pub fn read(self, bytes: &[u8], offset: usize) -> f64 {
        match self {
            Self::Int8 => bytes[offset] as i8 as f64,
            Self::Uint8 => bytes[offset] as f64,
            Self::Int16 => LittleEndian::read_i16(&bytes[offset..]) as f64,
            Self::Uint16 => LittleEndian::read_u16(&bytes[offset..]) as f64,
            Self::Int32 => LittleEndian::read_i32(&bytes[offset..]) as f64,
            Self::Uint32 => LittleEndian::read_u32(&bytes[offset..]) as f64,
            Self::Float32 => LittleEndian::read_f32(&bytes[offset..]) as f64,
            Self::Float64 => LittleEndian::read_f64(&bytes[offset..]),
        }
    }
}

impl TryFrom<u32> for ComponentType {
    type Error = String;

    fn try_from(code: u32) -> std::result::Result<Self, String> {
        Self::from_code(code).map_err(|_| format!("unsupported component type code: {code}"))
    }
}

impl From<ComponentType> for u32 {
    #[inline]
    fn from(ct: ComponentType) -> u32 {
        ct.code()
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
