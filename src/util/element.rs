//! ElementShape - how many components make up one logical accessor item.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Error, Result};

/// Shape of one accessor element.
///
/// Combined with a [`ComponentType`](super::ComponentType), this fully
/// determines the byte layout of a tightly packed element: a `Vec3` of
/// `Float32` occupies 12 bytes. Matrices store their components row-major
/// in element data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElementShape {
    /// Single component
    #[default]
    Scalar,
    /// 2 components
    Vec2,
    /// 3 components
    Vec3,
    /// 4 components
    Vec4,
    /// 2x2 matrix, 4 components
    Mat2,
    /// 3x3 matrix, 9 components
    Mat3,
    /// 4x4 matrix, 16 components
    Mat4,
}

impl ElementShape {
    /// Number of components that constitute one logical item.
    #[inline]
    pub const fn num_components(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
            Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }

    /// Returns the upper-case tag used in documents.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Vec2 => "VEC2",
            Self::Vec3 => "VEC3",
            Self::Vec4 => "VEC4",
            Self::Mat2 => "MAT2",
            Self::Mat3 => "MAT3",
            Self::Mat4 => "MAT4",
        }
    }

    /// Parse a shape from its document tag.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "SCALAR" => Ok(Self::Scalar),
            "VEC2" => Ok(Self::Vec2),
            "VEC3" => Ok(Self::Vec3),
            "VEC4" => Ok(Self::Vec4),
            "MAT2" => Ok(Self::Mat2),
            "MAT3" => Ok(Self::Mat3),
            "MAT4" => Ok(Self::Mat4),
            _ => Err(Error::malformed(format!("unknown element shape: {name}"))),
        }
    }
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
