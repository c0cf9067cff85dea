//! Analytic primitive records.
//!
//! These are plain data. Intersection math lives in the kernel; the
//! records only know their own shape and which material they use.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    /// Always > 0 once the sphere is part of a built `Scene`
    pub radius: f32,
    pub material_id: u32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material_id: u32) -> Self {
        Self {
            center,
            radius,
            material_id,
        }
    }
}

/// An infinite plane: `dot(normal, p) + distance = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal (normalized by `SceneBuilder`)
    pub normal: Vec3,
    /// Signed offset from the origin along `-normal`
    pub distance: f32,
    pub material_id: u32,
}

impl Plane {
    /// Create a new plane.
    pub fn new(normal: Vec3, distance: f32, material_id: u32) -> Self {
        Self {
            normal,
            distance,
            material_id,
        }
    }

    /// Horizontal ground plane `y = height`, facing +Y.
    pub fn ground(height: f32, material_id: u32) -> Self {
        Self::new(Vec3::Y, -height, material_id)
    }
}

/// A triangle primitive.
///
/// Winding matters: the face normal is `(v1 - v0) × (v2 - v0)` and only
/// rays hitting that side register as hits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub material_id: u32,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material_id: u32) -> Self {
        Self {
            v0,
            v1,
            v2,
            material_id,
        }
    }

    /// Unit face normal from the winding order.
    pub fn face_normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v0).normalize()
    }

    /// Twice the triangle's area.
    pub fn doubled_area(&self) -> f32 {
        (self.v1 - self.v0).cross(self.v2 - self.v0).length()
    }
}
