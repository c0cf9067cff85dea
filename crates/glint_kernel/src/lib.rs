//! Glint Kernel - per-pixel ray tracing.
//!
//! Casts one camera ray per output pixel into an analytic scene of spheres,
//! planes and triangles, shades the nearest hit with Cook-Torrance or
//! Blinn-Phong, tests shadows, and follows a bounded number of mirror
//! bounces. Pixels are independent; `render_frame` spreads them over rayon.

mod bounce;
mod bucket;
mod camera;
mod config;
mod intersect;
mod renderer;
mod shading;
mod shadow;

pub use bounce::{trace_bounces, BounceState, BounceTracer, Traced};
pub use bucket::{
    generate_buckets, render_bucket, render_frame, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::primary_ray;
pub use config::{RenderConfig, ShadingModel};
pub use intersect::{
    plane_distance, sphere_distance, trace, triangle_distance, Intersection, Primitive,
    DETERMINANT_EPSILON, NO_HIT,
};
pub use renderer::{color_to_rgba, render_frame_serial, render_pixel, FrameContext, ImageBuffer};
pub use shading::{
    base_reflectance, blinn_phong, cook_torrance, distribution_ggx, energy_split,
    fresnel_schlick, geometry_smith, shade, Shading,
};
pub use shadow::is_occluded;

/// Re-export scene and math types used in the kernel's signatures
pub use glint_core::{
    Camera, Color, FrameConfig, Light, Material, Plane, Scene, SceneBuilder, Sphere, Triangle,
};
pub use glint_math::{Interval, Ray, Vec3, Vec4};
