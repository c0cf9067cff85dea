//! Per-frame camera and light configuration.

use std::mem::size_of;

use bytemuck::{Pod, Zeroable};
use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Camera view basis.
///
/// `direction`, `right` and `up` are expected to be mutually orthogonal
/// unit vectors. Deriving them from application state is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub direction: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Create a camera from an already resolved basis.
    pub fn new(position: Vec3, direction: Vec3, right: Vec3, up: Vec3) -> Self {
        Self {
            position,
            direction,
            right,
            up,
        }
    }

    /// Check that the basis vectors are unit length and pairwise orthogonal.
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.direction)
            && unit(self.right)
            && unit(self.up)
            && self.direction.dot(self.right).abs() <= tolerance
            && self.direction.dot(self.up).abs() <= tolerance
            && self.right.dot(self.up).abs() <= tolerance
    }
}

impl Default for Camera {
    /// Camera at the origin looking down +Z with +Y up.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, Vec3::X, Vec3::Y)
    }
}

/// Everything the kernel needs besides the scene, fixed for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Output width / height
    pub aspect_ratio: f32,
    /// Position of the primary light for this frame
    pub light_position: Vec3,
    pub camera: Camera,
}

impl FrameConfig {
    /// Create a new frame configuration.
    ///
    /// A camera basis that is not orthonormal is accepted but logged, since
    /// it produces skewed images rather than failures.
    pub fn new(aspect_ratio: f32, light_position: Vec3, camera: Camera) -> Self {
        if !camera.is_orthonormal(1e-3) {
            log::warn!("Camera basis is not orthonormal: {:?}", camera);
        }
        Self {
            aspect_ratio,
            light_position,
            camera,
        }
    }

    /// Decode a frame configuration from its fixed-layout byte form.
    pub fn from_uniform_bytes(bytes: &[u8]) -> SceneResult<Self> {
        let expected = size_of::<FrameUniform>();
        if bytes.len() != expected {
            return Err(SceneError::UniformLayout {
                expected,
                actual: bytes.len(),
            });
        }
        let uniform: FrameUniform = bytemuck::pod_read_unaligned(bytes);
        Ok(uniform.into())
    }

    /// Encode this configuration into its fixed-layout record.
    pub fn to_uniform(&self) -> FrameUniform {
        FrameUniform::from(*self)
    }
}

/// Fixed-layout mirror of `FrameConfig`.
///
/// vec3 fields are padded to 16 bytes, with `aspect_ratio` packed into the
/// first padding slot, matching a std140 uniform block.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniform {
    pub camera_position: [f32; 3],
    pub aspect_ratio: f32,
    pub camera_direction: [f32; 3],
    _pad0: f32,
    pub camera_right: [f32; 3],
    _pad1: f32,
    pub camera_up: [f32; 3],
    _pad2: f32,
    pub light_position: [f32; 3],
    _pad3: f32,
}

impl From<FrameConfig> for FrameUniform {
    fn from(frame: FrameConfig) -> Self {
        Self {
            camera_position: frame.camera.position.to_array(),
            aspect_ratio: frame.aspect_ratio,
            camera_direction: frame.camera.direction.to_array(),
            _pad0: 0.0,
            camera_right: frame.camera.right.to_array(),
            _pad1: 0.0,
            camera_up: frame.camera.up.to_array(),
            _pad2: 0.0,
            light_position: frame.light_position.to_array(),
            _pad3: 0.0,
        }
    }
}

impl From<FrameUniform> for FrameConfig {
    fn from(uniform: FrameUniform) -> Self {
        let camera = Camera::new(
            Vec3::from_array(uniform.camera_position),
            Vec3::from_array(uniform.camera_direction),
            Vec3::from_array(uniform.camera_right),
            Vec3::from_array(uniform.camera_up),
        );
        FrameConfig::new(
            uniform.aspect_ratio,
            Vec3::from_array(uniform.light_position),
            camera,
        )
    }
}
