//! Primary ray generation.

use glint_core::FrameConfig;
use glint_math::{Ray, Vec2};

/// Map an output pixel to its camera ray.
///
/// The pixel coordinate is scaled to `[-1, 1]` on both axes, offset along
/// the camera's right/up vectors, and the horizontal component is stretched
/// by the aspect ratio before normalizing.
pub fn primary_ray(frame: &FrameConfig, x: u32, y: u32, width: u32, height: u32) -> Ray {
    let uv = Vec2::new(x as f32, y as f32) / Vec2::new(width as f32, height as f32);
    let ndc = 2.0 * uv - Vec2::ONE;

    let camera = &frame.camera;
    let mut direction = camera.direction + camera.right * ndc.x + camera.up * ndc.y;
    direction.x *= frame.aspect_ratio;

    Ray::new(camera.position, direction.normalize())
}
