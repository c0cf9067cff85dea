//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Tiling is only a scheduling hint: every
//! pixel is computed the same way whichever bucket it lands in.

use std::time::Instant;

use glint_core::{FrameConfig, Scene};
use glint_math::Vec4;
use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::renderer::{FrameContext, ImageBuffer};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 16;

/// Generate buckets for an image, sorted in spiral order from center.
///
/// Edge buckets are cropped to the image. A `bucket_size` of 0 is treated
/// as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center (spiral order).
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let cx = b.x as f32 + b.width as f32 / 2.0;
        let cy = b.y as f32 + b.height as f32 / 2.0;
        (cx - center_x).powi(2) + (cy - center_y).powi(2)
    };

    buckets.sort_by(|a, b| {
        distance(a)
            .partial_cmp(&distance(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Pixel colors in row-major order within the bucket
    pub pixels: Vec<Vec4>,
}

/// Render a single bucket.
pub fn render_bucket(bucket: &Bucket, ctx: &FrameContext) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(ctx.pixel(bucket.x + local_x, bucket.y + local_y));
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
    }
}

/// Render a whole frame, one rayon task per bucket.
pub fn render_frame(
    scene: &Scene,
    frame: &FrameConfig,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> ImageBuffer {
    let start = Instant::now();
    let ctx = FrameContext::new(scene, frame, config, width, height);
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::debug!(
        "Rendering {}x{} in {} buckets of {}px, {} lights",
        width,
        height,
        buckets.len(),
        config.bucket_size,
        ctx.lights.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, &ctx))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        let b = result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let i = i as u32;
            image.set(b.x + i % b.width, b.y + i / b.width, *color);
        }
    }

    log::info!("Rendered {}x{} frame in {:?}", width, height, start.elapsed());
    image
}
