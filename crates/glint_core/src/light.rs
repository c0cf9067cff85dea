use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::Color;

/// Power of the light synthesized for scenes that declare none.
pub const DEFAULT_LIGHT_POWER: Color = Color::splat(4000.0);

/// A point light.
///
/// `color` is radiant intensity for Cook-Torrance (falls off with the
/// squared distance) and emitted power for Blinn-Phong.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }

    /// White light of `DEFAULT_LIGHT_POWER` at `position`.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, DEFAULT_LIGHT_POWER)
    }
}
