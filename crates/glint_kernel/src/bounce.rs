//! Reflection bounce loop.
//!
//! A camera ray is shaded, and if it lands on an unshadowed reflective
//! surface it is mirrored and traced again, up to `max_bounces` times.
//! Each pass is blended into the running color with a weight that halves
//! after every pass.

use glint_core::{Color, Light, Scene};
use glint_math::{Interval, Ray};

use crate::config::RenderConfig;
use crate::intersect::trace;
use crate::shading::shade;

/// Where the loop is after a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BounceState {
    /// `ray` is traced next; `bounce` is 0 for the camera ray.
    Active { bounce: u32, ray: Ray },
    Terminated,
}

/// Final color of one camera ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traced {
    pub color: Color,
    /// Shading passes executed: primary hit plus bounces
    pub passes: u32,
}

/// Accumulator driving the bounce state machine for one camera ray.
pub struct BounceTracer<'a> {
    scene: &'a Scene,
    lights: &'a [Light],
    config: &'a RenderConfig,
    color: Color,
    weight: f32,
    passes: u32,
}

impl<'a> BounceTracer<'a> {
    pub fn new(scene: &'a Scene, lights: &'a [Light], config: &'a RenderConfig) -> Self {
        Self {
            scene,
            lights,
            config,
            color: config.background,
            weight: config.reflection_strength,
            passes: 0,
        }
    }

    /// Run one shading pass and decide what comes next.
    pub fn step(&mut self, state: BounceState) -> BounceState {
        let (bounce, ray) = match state {
            BounceState::Active { bounce, ray } => (bounce, ray),
            BounceState::Terminated => return BounceState::Terminated,
        };
        self.passes += 1;

        let search = Interval::new(self.config.epsilon, self.config.max_distance);
        let Some(hit) = trace(self.scene, &ray, search) else {
            self.accumulate(self.config.background);
            return BounceState::Terminated;
        };

        let shading = shade(self.scene, self.lights, self.config, ray.direction, &hit);
        self.accumulate(shading.color);

        let reflective = self.scene.materials[hit.material_id as usize].reflective;
        if reflective && !shading.occluded && bounce < self.config.max_bounces {
            BounceState::Active {
                bounce: bounce + 1,
                ray: ray.reflected(hit.point, hit.normal),
            }
        } else {
            BounceState::Terminated
        }
    }

    /// Blend a pass into the running color, then halve the weight.
    fn accumulate(&mut self, pass_color: Color) {
        let w = self.weight;
        self.color = (1.0 - w) * self.color + w * pass_color.lerp(self.color, 1.0 - w);
        self.weight *= 0.5;
    }

    pub fn finish(self) -> Traced {
        Traced {
            color: self.color,
            passes: self.passes,
        }
    }
}

/// Trace a camera ray through every bounce it earns.
pub fn trace_bounces(scene: &Scene, lights: &[Light], config: &RenderConfig, ray: Ray) -> Traced {
    let mut tracer = BounceTracer::new(scene, lights, config);
    let mut state = BounceState::Active { bounce: 0, ray };
    while state != BounceState::Terminated {
        state = tracer.step(state);
    }
    tracer.finish()
}
