//! Per-pixel frame driver.
//!
//! Maps one output pixel to one camera ray, runs the bounce loop, and
//! produces an RGBA value with alpha fixed at 1.0. Pixels share nothing but
//! read-only inputs, so the parallel driver in `bucket` can split a frame
//! any way it likes.

use glint_core::{Color, FrameConfig, Light, Scene};
use glint_math::{Interval, Vec4};
use image::RgbaImage;

use crate::bounce::trace_bounces;
use crate::camera::primary_ray;
use crate::config::RenderConfig;

/// Read-only inputs for one frame, with the frame's light set resolved once.
pub struct FrameContext<'a> {
    pub scene: &'a Scene,
    pub frame: &'a FrameConfig,
    pub config: &'a RenderConfig,
    pub lights: Vec<Light>,
    pub width: u32,
    pub height: u32,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: &'a Scene,
        frame: &'a FrameConfig,
        config: &'a RenderConfig,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            scene,
            frame,
            config,
            lights: scene.frame_lights(frame),
            width,
            height,
        }
    }

    /// Shade the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Vec4 {
        let ray = primary_ray(self.frame, x, y, self.width, self.height);
        let traced = trace_bounces(self.scene, &self.lights, self.config, ray);
        traced.color.extend(1.0)
    }
}

/// Render a single pixel of a `width` x `height` frame.
///
/// Resolves the frame's lights on every call; use `FrameContext` or
/// `render_frame` when rendering more than a handful of pixels.
pub fn render_pixel(
    scene: &Scene,
    frame: &FrameConfig,
    config: &RenderConfig,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Vec4 {
    FrameContext::new(scene, frame, config, width, height).pixel(x, y)
}

/// Render the entire frame on the calling thread.
///
/// Produces the same pixels as the parallel `render_frame`.
pub fn render_frame_serial(
    scene: &Scene,
    frame: &FrameConfig,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> ImageBuffer {
    let ctx = FrameContext::new(scene, frame, config, width, height);
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            image.set(x, y, ctx.pixel(x, y));
        }
    }

    image
}

/// Convert a linear RGBA value to 8-bit, clamping each channel to [0, 1].
pub fn color_to_rgba(color: Vec4) -> [u8; 4] {
    color
        .to_array()
        .map(|channel| (255.0 * Interval::UNIT.clamp(channel)) as u8)
}

/// RGBA output surface, one write per pixel.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec4>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with opaque background black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO.extend(1.0); (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec4 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec4) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Convert to an `image` buffer, ready to encode as PNG and friends.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(color_to_rgba(self.get(x, y)))
        })
    }
}
