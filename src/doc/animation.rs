//! Animation and skinning data holders.

use serde::{Deserialize, Serialize};

/// Keyframe interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
    Cubicspline,
}

/// Node property an animation channel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
    Weights,
}

/// The node/property pair driven by a channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<usize>,
    pub path: TargetPath,
}

/// Keyframe input/output accessor pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationSampler {
    pub input: usize,
    pub output: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<Interpolation>,
}

/// Binds a sampler to a target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationChannel {
    pub sampler: usize,
    pub target: ChannelTarget,
}

/// A named set of channels and samplers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Animation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<AnimationChannel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samplers: Vec<AnimationSampler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Joints and inverse bind matrices for skinned meshes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse_bind_matrices: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joints: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
