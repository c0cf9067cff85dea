//! Scene store.
//!
//! A `Scene` is a flat, ordered list of primitives per kind plus the
//! material and light tables they reference. It is built once per frame by
//! the caller and only read by the kernel, so it can be shared by reference
//! across worker threads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::FrameConfig;
use crate::error::{SceneError, SceneResult};
use crate::light::Light;
use crate::material::Material;
use crate::primitive::{Plane, Sphere, Triangle};

/// Smallest doubled triangle area accepted by validation.
const MIN_TRIANGLE_AREA: f32 = 1e-12;

/// An immutable, validated scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
    pub triangles: Vec<Triangle>,
    pub materials: Vec<Material>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Parse and validate a JSON scene description.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let raw: Scene = serde_json::from_str(json)?;
        SceneBuilder::from_scene(raw).build()
    }

    /// Load and validate a JSON scene description from disk.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene {}: {} primitives, {} materials, {} lights",
            path.display(),
            scene.primitive_count(),
            scene.materials.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a material by ID.
    ///
    /// Primitive material IDs are checked at build time, so the kernel
    /// indexes directly; this is the checked accessor for everyone else.
    pub fn material(&self, id: u32) -> Option<&Material> {
        self.materials.get(id as usize)
    }

    /// Get total primitive count across all kinds.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.triangles.len()
    }

    /// Lights as seen by one frame.
    ///
    /// The first scene light is moved to the frame's light position; the
    /// others keep their stored positions. A scene without lights gets a
    /// single white light at the frame's light position.
    pub fn frame_lights(&self, frame: &FrameConfig) -> Vec<Light> {
        match self.lights.split_first() {
            Some((primary, rest)) => {
                let mut lights = Vec::with_capacity(self.lights.len());
                lights.push(Light::new(frame.light_position, primary.color));
                lights.extend_from_slice(rest);
                lights
            }
            None => vec![Light::white(frame.light_position)],
        }
    }

    /// Check every invariant the kernel relies on.
    fn validate(&self) -> SceneResult<()> {
        if self.materials.is_empty() {
            return Err(SceneError::NoMaterials);
        }

        let count = self.materials.len();
        let check = |kind: &'static str, index: usize, material_id: u32| {
            if (material_id as usize) < count {
                Ok(())
            } else {
                Err(SceneError::InvalidMaterial {
                    kind,
                    index,
                    material_id,
                    count,
                })
            }
        };

        for (index, sphere) in self.spheres.iter().enumerate() {
            check("Sphere", index, sphere.material_id)?;
            if !(sphere.radius > 0.0) {
                return Err(SceneError::NonPositiveRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }

        for (index, plane) in self.planes.iter().enumerate() {
            check("Plane", index, plane.material_id)?;
        }

        for (index, triangle) in self.triangles.iter().enumerate() {
            check("Triangle", index, triangle.material_id)?;
            if triangle.doubled_area() <= MIN_TRIANGLE_AREA {
                return Err(SceneError::DegenerateTriangle { index });
            }
        }

        Ok(())
    }
}

/// Incremental scene construction with validation on `build`.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an unvalidated scene, e.g. one just deserialized.
    pub fn from_scene(scene: Scene) -> Self {
        Self { scene }
    }

    /// Add a material and return its ID.
    pub fn add_material(&mut self, material: Material) -> u32 {
        let id = self.scene.materials.len() as u32;
        self.scene.materials.push(material);
        id
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, sphere: Sphere) -> &mut Self {
        self.scene.spheres.push(sphere);
        self
    }

    /// Add a plane.
    pub fn add_plane(&mut self, plane: Plane) -> &mut Self {
        self.scene.planes.push(plane);
        self
    }

    /// Add a triangle.
    pub fn add_triangle(&mut self, triangle: Triangle) -> &mut Self {
        self.scene.triangles.push(triangle);
        self
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.scene.lights.push(light);
        self
    }

    /// Normalize plane normals, validate, and freeze the scene.
    pub fn build(self) -> SceneResult<Scene> {
        let mut scene = self.scene;

        for (index, plane) in scene.planes.iter_mut().enumerate() {
            let length = plane.normal.length();
            if !(length > 0.0) || !length.is_finite() {
                return Err(SceneError::DegeneratePlaneNormal { index });
            }
            // Rescale the offset with the normal so the plane itself stays put
            plane.normal /= length;
            plane.distance /= length;
        }

        scene.validate()?;

        log::debug!(
            "Built scene: {} spheres, {} planes, {} triangles, {} materials",
            scene.spheres.len(),
            scene.planes.len(),
            scene.triangles.len(),
            scene.materials.len()
        );

        Ok(scene)
    }
}
