//! Local illumination at a hit point.
//!
//! Two models share one entry point, `shade`:
//! - Cook-Torrance: GGX distribution, Smith/Schlick-GGX geometry and Schlick
//!   Fresnel, with inverse-square falloff. Occluded lights are dropped.
//! - Blinn-Phong: diffuse plus a half-vector lobe with `1/(4πd)` falloff.
//!   Occluded lights are darkened by `RenderConfig::shadow_factor`.

use std::f32::consts::PI;

use glint_core::{Color, Light, Material, Scene};
use glint_math::Vec3;

use crate::config::{RenderConfig, ShadingModel};
use crate::intersect::Intersection;
use crate::shadow::is_occluded;

/// Reflectance at normal incidence for dielectrics.
const DIELECTRIC_F0: Color = Color::splat(0.04);

/// Keeps the GGX distribution finite for perfectly smooth surfaces.
const MIN_ROUGHNESS: f32 = 0.05;

/// Guards the specular denominator at grazing angles.
const SPECULAR_EPSILON: f32 = 0.001;

/// Result of shading one hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    pub color: Color,
    /// At least one light was blocked
    pub occluded: bool,
}

/// GGX / Trowbridge-Reitz normal distribution.
pub fn distribution_ggx(n_dot_h: f32, roughness: f32) -> f32 {
    let roughness = roughness.max(MIN_ROUGHNESS);
    let a = roughness * roughness;
    let a2 = a * a;
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Schlick-GGX masking for one direction.
fn geometry_schlick_ggx(n_dot_x: f32, k: f32) -> f32 {
    n_dot_x / (n_dot_x * (1.0 - k) + k)
}

/// Smith geometry term: masking times shadowing.
pub fn geometry_smith(n_dot_v: f32, n_dot_l: f32, roughness: f32) -> f32 {
    let r = roughness + 1.0;
    let k = r * r / 8.0;
    geometry_schlick_ggx(n_dot_v.max(0.0), k) * geometry_schlick_ggx(n_dot_l.max(0.0), k)
}

/// Schlick's approximation for Fresnel reflectance.
pub fn fresnel_schlick(cos_theta: f32, f0: Color) -> Color {
    f0 + (Color::ONE - f0) * (1.0 - cos_theta.clamp(0.0, 1.0)).powi(5)
}

/// F0: 4% for dielectrics, tinted by albedo as metalness rises.
pub fn base_reflectance(material: &Material) -> Color {
    DIELECTRIC_F0.lerp(material.albedo, material.metalness)
}

/// Split incoming light into specular (`k_s`) and diffuse (`k_d`) weights.
///
/// `k_s` is the Fresnel term at the half vector; metals get no diffuse.
pub fn energy_split(material: &Material, h_dot_v: f32) -> (Color, Color) {
    let k_s = fresnel_schlick(h_dot_v, base_reflectance(material));
    let k_d = (Color::ONE - k_s) * (1.0 - material.metalness);
    (k_s, k_d)
}

/// Cook-Torrance radiance from one unoccluded light.
///
/// `n`, `v`, `l` are unit vectors: surface normal, direction to the viewer,
/// direction to the light.
pub fn cook_torrance(
    n: Vec3,
    v: Vec3,
    l: Vec3,
    material: &Material,
    light_color: Color,
    light_distance: f32,
) -> Color {
    let h = (v + l).normalize_or_zero();
    let n_dot_v = n.dot(v).max(0.0);
    let n_dot_l = n.dot(l).max(0.0);

    let d = distribution_ggx(n.dot(h).max(0.0), material.roughness);
    let g = geometry_smith(n_dot_v, n_dot_l, material.roughness);
    let (f, k_d) = energy_split(material, h.dot(v));

    let specular = d * g * f / (4.0 * n_dot_v * n_dot_l + SPECULAR_EPSILON);

    let radiance = light_color / (light_distance * light_distance);
    (k_d * material.albedo / PI + specular) * radiance * n_dot_l
}

/// Blinn-Phong color from one light.
pub fn blinn_phong(
    n: Vec3,
    v: Vec3,
    l: Vec3,
    material: &Material,
    light_power: Color,
    light_distance: f32,
) -> Color {
    let intensity = light_power / (4.0 * PI * light_distance);
    let h = (v + l).normalize_or_zero();

    let diffuse = intensity * material.albedo * n.dot(l).max(0.0);
    let specular = intensity * n.dot(h).clamp(0.0, 1.0).powf(material.shininess);
    diffuse + specular
}

/// Shade a hit as seen along `view_dir`, summing every light.
///
/// `view_dir` is the direction of the ray that produced the hit; the vector
/// toward the viewer is its negation, which for primary rays equals the
/// normalized vector back to the camera.
pub fn shade(
    scene: &Scene,
    lights: &[Light],
    config: &RenderConfig,
    view_dir: Vec3,
    hit: &Intersection,
) -> Shading {
    let material = &scene.materials[hit.material_id as usize];
    let n = hit.normal;
    let v = -view_dir.normalize();

    let mut color = Color::ZERO;
    let mut occluded = false;

    for light in lights {
        let to_light = light.position - hit.point;
        let distance = to_light.length();
        let l = to_light / distance;
        let blocked = is_occluded(scene, hit.point, light.position, config.epsilon);
        occluded |= blocked;

        color += match config.shading {
            ShadingModel::CookTorrance if blocked => Color::ZERO,
            ShadingModel::CookTorrance => cook_torrance(n, v, l, material, light.color, distance),
            ShadingModel::BlinnPhong => {
                let lit = blinn_phong(n, v, l, material, light.color, distance);
                if blocked {
                    lit * config.shadow_factor
                } else {
                    lit
                }
            }
        };
    }

    Shading { color, occluded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Plane, SceneBuilder, Sphere};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_unit(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let len_sq = v.length_squared();
            if len_sq > 1e-4 && len_sq <= 1.0 {
                return v / len_sq.sqrt();
            }
        }
    }

    #[test]
    fn test_ggx_peaks_at_normal() {
        let at_normal = distribution_ggx(1.0, 0.3);
        let off_normal = distribution_ggx(0.8, 0.3);
        assert!(at_normal > off_normal);
        assert!(distribution_ggx(1.0, 0.0).is_finite());
    }

    #[test]
    fn test_ggx_value_at_normal() {
        // alpha = 0.25, so D(1) = 1 / (pi * alpha^2)
        let expected = 1.0 / (PI * 0.0625);
        assert!((distribution_ggx(1.0, 0.5) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_ggx_rough_is_flatter() {
        // Rougher surfaces spread the lobe: lower peak
        assert!(distribution_ggx(1.0, 0.9) < distribution_ggx(1.0, 0.3));
    }

    #[test]
    fn test_geometry_smith_bounds() {
        assert_eq!(geometry_smith(0.0, 0.5, 0.5), 0.0);
        let g = geometry_smith(1.0, 1.0, 0.5);
        assert!((g - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_geometry_smith_value() {
        let k = 1.5 * 1.5 / 8.0;
        let g1 = 0.5 / (0.5 * (1.0 - k) + k);
        assert!((geometry_smith(0.5, 0.5, 0.5) - g1 * g1).abs() < 1e-6);
        assert!((geometry_smith(0.5, 0.5, 0.5) - 0.609_161).abs() < 1e-5);
    }

    #[test]
    fn test_fresnel_limits() {
        let f0 = Color::splat(0.04);
        assert!((fresnel_schlick(1.0, f0) - f0).length() < 1e-6);
        assert!((fresnel_schlick(0.0, f0) - Color::ONE).length() < 1e-6);
    }

    #[test]
    fn test_base_reflectance_follows_metalness() {
        let albedo = Color::new(0.9, 0.6, 0.2);
        assert_eq!(base_reflectance(&Material::pbr(albedo, 0.5, 0.0)), DIELECTRIC_F0);
        assert!((base_reflectance(&Material::pbr(albedo, 0.5, 1.0)) - albedo).length() < 1e-6);
    }

    #[test]
    fn test_energy_split_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2000 {
            let albedo = Color::new(rng.gen(), rng.gen(), rng.gen());
            let material = Material::pbr(albedo, rng.gen(), rng.gen());
            let cos_theta: f32 = rng.gen();

            let (k_s, k_d) = energy_split(&material, cos_theta);
            let total = k_d * material.albedo + k_s;

            assert!(
                total.max_element() <= 1.0 + 1e-5,
                "energy {:?} for {:?} at cos {}",
                total,
                material,
                cos_theta
            );
            assert!(k_d.min_element() >= 0.0);
        }
    }

    #[test]
    fn test_energy_split_values() {
        let dielectric = Material::pbr(Color::splat(0.5), 0.5, 0.0);
        let (k_s, k_d) = energy_split(&dielectric, 1.0);
        assert!((k_s - Color::splat(0.04)).length() < 1e-6);
        assert!((k_d - Color::splat(0.96)).length() < 1e-6);

        let metal = Material::pbr(Color::new(0.9, 0.6, 0.2), 0.5, 1.0);
        let (k_s, k_d) = energy_split(&metal, 0.3);
        assert_eq!(k_d, Color::ZERO);
        assert!(k_s.min_element() > 0.0);
    }

    #[test]
    fn test_cook_torrance_is_finite_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = Vec3::Y;

        for _ in 0..2000 {
            let albedo = Color::new(rng.gen(), rng.gen(), rng.gen());
            let material = Material::pbr(albedo, rng.gen(), rng.gen());
            let v = random_unit(&mut rng);
            let l = random_unit(&mut rng);
            if (v + l).length_squared() < 1e-6 {
                continue;
            }
            let c = cook_torrance(n, v, l, &material, Color::ONE, 1.0);
            assert!(c.is_finite(), "{:?}", c);
            assert!(c.min_element() >= 0.0, "{:?}", c);
        }
    }

    #[test]
    fn test_cook_torrance_dark_when_light_below_horizon() {
        let material = Material::pbr(Color::ONE, 0.5, 0.0);
        let below = Vec3::new(1.0, -0.2, 0.0).normalize();
        let c = cook_torrance(Vec3::Y, Vec3::Y, below, &material, Color::ONE, 1.0);
        assert_eq!(c, Color::ZERO);
    }

    #[test]
    fn test_cook_torrance_head_on_dielectric() {
        // N = V = L: D = 16/pi, G = 1, F = 0.04, kD = 0.96
        let material = Material::pbr(Color::splat(0.5), 0.5, 0.0);
        let c = cook_torrance(Vec3::Y, Vec3::Y, Vec3::Y, &material, Color::ONE, 1.0);

        let specular = 16.0 / PI * 0.04 / (4.0 + SPECULAR_EPSILON);
        let diffuse = 0.96 * 0.5 / PI;
        assert!((specular + diffuse - 0.203_706).abs() < 1e-5);
        assert!((c - Color::splat(specular + diffuse)).length() < 1e-5);
    }

    #[test]
    fn test_cook_torrance_metal_has_no_diffuse() {
        // F = albedo at normal incidence and kD = 0, so only the lobe remains
        let material = Material::pbr(Color::splat(0.5), 0.5, 1.0);
        let c = cook_torrance(Vec3::Y, Vec3::Y, Vec3::Y, &material, Color::ONE, 1.0);

        let specular = 16.0 / PI * 0.5 / (4.0 + SPECULAR_EPSILON);
        assert!((c - Color::splat(specular)).length() < 1e-5);
    }

    #[test]
    fn test_cook_torrance_inverse_square_falloff() {
        let material = Material::pbr(Color::splat(0.5), 0.5, 0.0);
        let l = Vec3::new(0.0, 1.0, 1.0).normalize();
        let near = cook_torrance(Vec3::Y, Vec3::Y, l, &material, Color::ONE, 1.0);
        let far = cook_torrance(Vec3::Y, Vec3::Y, l, &material, Color::ONE, 2.0);
        assert!((near / far - Color::splat(4.0)).length() < 1e-3);
    }

    #[test]
    fn test_blinn_phong_head_on() {
        let material = Material::phong(Color::splat(0.5), false).with_shininess(16.0);
        let power = Color::splat(4.0 * PI * 10.0);
        // intensity = 1 at distance 10; N·L = N·H = 1
        let c = blinn_phong(Vec3::Y, Vec3::Y, Vec3::Y, &material, power, 10.0);
        assert!((c - Color::splat(1.5)).length() < 1e-4);
    }

    fn lit_scene(occluder: bool) -> Scene {
        let mut builder = SceneBuilder::new();
        let m = builder.add_material(Material::pbr(Color::splat(0.8), 0.5, 0.0));
        builder.add_plane(Plane::ground(0.0, m));
        if occluder {
            builder.add_sphere(Sphere::new(Vec3::new(0.0, 10.0, 0.0), 2.0, m));
        }
        builder.build().unwrap()
    }

    fn floor_hit() -> Intersection {
        Intersection {
            distance: 10.0,
            point: Vec3::ZERO,
            normal: Vec3::Y,
            material_id: 0,
        }
    }

    #[test]
    fn test_shade_cook_torrance_drops_occluded_light() {
        let lights = [Light::new(Vec3::new(0.0, 20.0, 0.0), Color::splat(400.0))];
        let config = RenderConfig::with_shading(ShadingModel::CookTorrance);
        let view = Vec3::new(0.0, -1.0, 1.0).normalize();

        let open = shade(&lit_scene(false), &lights, &config, view, &floor_hit());
        let blocked = shade(&lit_scene(true), &lights, &config, view, &floor_hit());

        assert!(!open.occluded);
        assert!(open.color.max_element() > 0.0);
        assert!(blocked.occluded);
        assert_eq!(blocked.color, Color::ZERO);
    }

    #[test]
    fn test_shade_blinn_phong_darkens_occluded_light() {
        let lights = [Light::new(Vec3::new(0.0, 20.0, 0.0), Color::splat(400.0))];
        let config = RenderConfig::with_shading(ShadingModel::BlinnPhong);
        let view = Vec3::new(0.0, -1.0, 1.0).normalize();

        let open = shade(&lit_scene(false), &lights, &config, view, &floor_hit());
        let blocked = shade(&lit_scene(true), &lights, &config, view, &floor_hit());

        assert!(blocked.occluded);
        assert!((blocked.color - open.color * config.shadow_factor).length() < 1e-5);
    }

    #[test]
    fn test_shade_sums_lights() {
        let light = Light::new(Vec3::new(0.0, 20.0, 0.0), Color::splat(400.0));
        let config = RenderConfig::default();
        let view = Vec3::new(0.0, -1.0, 1.0).normalize();
        let scene = lit_scene(false);

        let one = shade(&scene, &[light], &config, view, &floor_hit());
        let two = shade(&scene, &[light, light], &config, view, &floor_hit());
        assert!((two.color - one.color * 2.0).length() < 1e-5);
    }
}
