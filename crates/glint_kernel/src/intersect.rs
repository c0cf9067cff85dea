//! Closed-form ray/primitive intersection and the nearest-hit resolver.
//!
//! Each distance function returns a signed scalar where anything at or
//! below the resolver's epsilon means "no forward hit". Misses use the
//! sentinels `-1.0` (sphere, triangle) and `0.0` (plane).

use glint_core::{Plane, Scene, Sphere, Triangle};
use glint_math::{Interval, Ray, Vec3};

/// Sentinel distance for "no hit".
pub const NO_HIT: f32 = -1.0;

/// Minimum triangle determinant. Also rejects back faces, since the
/// determinant is negative when the ray sees the clockwise side.
pub const DETERMINANT_EPSILON: f32 = 1e-6;

/// Nearest valid intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the ray
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Outward unit normal
    pub normal: Vec3,
    /// Index into the scene's material table
    pub material_id: u32,
}

/// Something the resolver can intersect.
pub trait Primitive: Send + Sync {
    /// Signed distance to the first forward hit, or a sentinel <= 0.
    fn distance(&self, ray: &Ray) -> f32;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    fn material_id(&self) -> u32;
}

/// Near root of `|O + tD - C|² = r²`.
///
/// Only the near root is returned, so a ray starting inside the sphere
/// reports a negative distance and therefore no hit.
pub fn sphere_distance(ray: &Ray, sphere: &Sphere) -> f32 {
    let oc = ray.origin - sphere.center;
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.length_squared() - sphere.radius * sphere.radius;
    let h = b * b - 4.0 * c;
    if h < 0.0 {
        return NO_HIT;
    }
    (-b - h.sqrt()) / 2.0
}

/// Distance to the plane `dot(N, P) + d = 0`, clamped at zero.
///
/// A ray parallel to the plane returns exactly `0.0`, which the resolver's
/// `> epsilon` filter treats as a miss like any hit behind the origin.
pub fn plane_distance(ray: &Ray, plane: &Plane) -> f32 {
    let d = ray.direction.dot(plane.normal);
    if d == 0.0 {
        return 0.0;
    }
    let dist = -(plane.distance + ray.origin.dot(plane.normal)) / d;
    dist.max(0.0)
}

/// Möller-Trumbore ray-triangle intersection, front faces only.
pub fn triangle_distance(ray: &Ray, triangle: &Triangle) -> f32 {
    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;

    let h = ray.direction.cross(edge2);
    let det = edge1.dot(h);

    // Parallel or back-facing
    if det < DETERMINANT_EPSILON {
        return NO_HIT;
    }

    let f = 1.0 / det;
    let s = ray.origin - triangle.v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return NO_HIT;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return NO_HIT;
    }

    f * edge2.dot(q)
}

impl Primitive for Sphere {
    fn distance(&self, ray: &Ray) -> f32 {
        sphere_distance(ray, self)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }

    fn material_id(&self) -> u32 {
        self.material_id
    }
}

impl Primitive for Plane {
    fn distance(&self, ray: &Ray) -> f32 {
        plane_distance(ray, self)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material_id(&self) -> u32 {
        self.material_id
    }
}

impl Primitive for Triangle {
    fn distance(&self, ray: &Ray) -> f32 {
        triangle_distance(ray, self)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.face_normal()
    }

    fn material_id(&self) -> u32 {
        self.material_id
    }
}

/// Find the closest primitive hit strictly inside `search`.
///
/// Primitives are visited triangles first, then spheres, then planes, each
/// in scene order. A later primitive only wins if it is strictly closer, so
/// the first one found keeps equal-distance ties.
pub fn trace(scene: &Scene, ray: &Ray, search: Interval) -> Option<Intersection> {
    let primitives = scene
        .triangles
        .iter()
        .map(|p| p as &dyn Primitive)
        .chain(scene.spheres.iter().map(|p| p as &dyn Primitive))
        .chain(scene.planes.iter().map(|p| p as &dyn Primitive));

    let (distance, primitive) = primitives.fold(None, |best, primitive| {
        let bound = best.map_or(search, |(t, _)| search.with_max(t));
        let t = primitive.distance(ray);
        if bound.surrounds(t) {
            Some((t, primitive))
        } else {
            best
        }
    })?;

    let point = ray.at(distance);
    Some(Intersection {
        distance,
        point,
        normal: primitive.normal_at(point),
        material_id: primitive.material_id(),
    })
}
