//! Surface materials shared by both shading models.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Surface parameters, addressed by index from every primitive.
///
/// Carries the inputs of both shading models so a scene can be rendered
/// with either: `roughness`/`metalness` drive Cook-Torrance, `shininess`
/// drives Blinn-Phong. `reflective` gates bounce rays for both.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base color (diffuse albedo for dielectrics, F0 tint for metals)
    pub albedo: Color,

    /// Roughness: 0 = smooth, 1 = rough
    pub roughness: f32,

    /// Metalness: 0 = dielectric, 1 = metal
    pub metalness: f32,

    /// Whether the bounce tracer spawns a mirror ray off this surface
    pub reflective: bool,

    /// Blinn-Phong specular exponent
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Color::new(0.8, 0.8, 0.8),
            roughness: 0.5,
            metalness: 0.0,
            reflective: false,
            shininess: 32.0,
        }
    }
}

impl Material {
    /// Create a physically-based material.
    pub fn pbr(albedo: Color, roughness: f32, metalness: f32) -> Self {
        Self {
            albedo,
            roughness: roughness.clamp(0.0, 1.0),
            metalness: metalness.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// Create a Blinn-Phong style material.
    pub fn phong(albedo: Color, reflective: bool) -> Self {
        Self {
            albedo,
            reflective,
            ..Default::default()
        }
    }

    /// Builder method to mark the surface as a mirror for bounce rays.
    pub fn with_reflective(mut self, reflective: bool) -> Self {
        self.reflective = reflective;
        self
    }

    /// Builder method to set the Blinn-Phong exponent.
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(0.0);
        self
    }
}
