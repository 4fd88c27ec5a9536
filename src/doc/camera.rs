//! Camera data holders.

use serde::{Deserialize, Serialize};

/// Which projection block a camera carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraKind {
    Perspective,
    Orthographic,
}

/// Perspective projection parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    pub yfov: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zfar: Option<f64>,
    pub znear: f64,
}

/// Orthographic projection parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Orthographic {
    pub xmag: f64,
    pub ymag: f64,
    pub zfar: f64,
    pub znear: f64,
}

/// A camera.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective: Option<Perspective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orthographic: Option<Orthographic>,
    #[serde(rename = "type")]
    pub kind: CameraKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
