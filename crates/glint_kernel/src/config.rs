//! Render configuration.

use glint_core::Color;
use serde::{Deserialize, Serialize};

use crate::bucket::DEFAULT_BUCKET_SIZE;

/// Which local illumination model shades every hit in a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadingModel {
    /// GGX / Smith / Schlick microfacet BRDF. Occluded lights contribute nothing.
    #[default]
    CookTorrance,
    /// Blinn-Phong with inverse-distance falloff. Occluded lights are darkened.
    BlinnPhong,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub shading: ShadingModel,
    /// Reflection bounces after the primary hit
    pub max_bounces: u32,
    /// Hits at or below this distance are ignored (self-intersection guard)
    pub epsilon: f32,
    /// Search bound for primary and bounce rays
    pub max_distance: f32,
    /// Color when a ray doesn't hit anything
    pub background: Color,
    /// Blinn-Phong multiplier for occluded lights
    pub shadow_factor: f32,
    /// Blend weight of the primary hit; halves every bounce
    pub reflection_strength: f32,
    /// Tile edge length for the parallel frame driver
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shading: ShadingModel::CookTorrance,
            max_bounces: 2,
            epsilon: 0.01,
            max_distance: 1000.0,
            background: Color::ZERO,
            shadow_factor: 0.5,
            reflection_strength: 1.0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Default configuration with the given shading model.
    pub fn with_shading(shading: ShadingModel) -> Self {
        Self {
            shading,
            ..Default::default()
        }
    }
}
