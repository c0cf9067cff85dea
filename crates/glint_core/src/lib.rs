//! Glint Core - Scene store and frame configuration.
//!
//! This crate provides:
//!
//! - **Scene records**: `Sphere`, `Plane`, `Triangle`, `Material`, `Light`
//! - **Scene store**: an immutable `Scene` built and validated by `SceneBuilder`,
//!   or loaded from a JSON description
//! - **Frame configuration**: `Camera` basis, `FrameConfig`, and the
//!   fixed-layout `FrameUniform` record
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{Material, Scene, SceneBuilder, Sphere};
//!
//! let mut builder = SceneBuilder::new();
//! let red = builder.add_material(Material::pbr(Vec3::new(0.8, 0.1, 0.1), 0.4, 0.0));
//! builder.add_sphere(Sphere::new(Vec3::new(0.0, 16.0, 0.0), 16.0, red));
//! let scene = builder.build()?;
//! ```

pub mod camera;
pub mod error;
pub mod light;
pub mod material;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use camera::{Camera, FrameConfig, FrameUniform};
pub use error::{SceneError, SceneResult};
pub use light::{Light, DEFAULT_LIGHT_POWER};
pub use material::{Color, Material};
pub use primitive::{Plane, Sphere, Triangle};
pub use scene::{Scene, SceneBuilder};
