//! Shadow rays.

use glint_core::Scene;
use glint_math::{Interval, Ray, Vec3};

use crate::intersect::trace;

/// Check whether anything sits between `point` and a light.
///
/// The search is bounded by the distance to the light, so geometry behind
/// the light never casts a shadow.
pub fn is_occluded(scene: &Scene, point: Vec3, light_position: Vec3, epsilon: f32) -> bool {
    let to_light = light_position - point;
    let distance = to_light.length();
    if distance <= epsilon {
        return false;
    }

    let ray = Ray::new(point, to_light / distance);
    trace(scene, &ray, Interval::new(epsilon, distance)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Material, Plane, SceneBuilder, Sphere};

    const EPSILON: f32 = 0.01;

    fn scene(occluder: Option<Sphere>) -> Scene {
        let mut builder = SceneBuilder::new();
        let m = builder.add_material(Material::default());
        builder.add_plane(Plane::ground(0.0, m));
        if let Some(sphere) = occluder {
            builder.add_sphere(sphere);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_occluder_between_point_and_light() {
        let light = Vec3::new(0.0, 20.0, 0.0);
        let blocked = scene(Some(Sphere::new(Vec3::new(0.0, 10.0, 0.0), 2.0, 0)));
        let open = scene(None);

        assert!(is_occluded(&blocked, Vec3::ZERO, light, EPSILON));
        assert!(!is_occluded(&open, Vec3::ZERO, light, EPSILON));
    }

    #[test]
    fn test_occluder_beyond_light_is_ignored() {
        let light = Vec3::new(0.0, 20.0, 0.0);
        let behind = scene(Some(Sphere::new(Vec3::new(0.0, 30.0, 0.0), 2.0, 0)));

        assert!(!is_occluded(&behind, Vec3::ZERO, light, EPSILON));
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        // Point on top of a sphere, light straight above
        let s = scene(Some(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 2.0, 0)));
        let top = Vec3::new(0.0, 7.0, 0.0);
        assert!(!is_occluded(&s, top, Vec3::new(0.0, 20.0, 0.0), EPSILON));
    }
}
