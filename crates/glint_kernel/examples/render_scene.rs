//! Render the reference scene to a PNG.
//!
//! Usage: cargo run --example render_scene -- [scene.json] [output.png]
//!
//! Without a scene file, renders a mirrored sphere on a floor next to a
//! matte sphere and a triangle.

use anyhow::{Context, Result};
use glint_kernel::{
    render_frame, Camera, Color, FrameConfig, Light, Material, Plane, RenderConfig, Scene,
    SceneBuilder, ShadingModel, Sphere, Triangle, Vec3,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene = match args.next() {
        Some(path) => Scene::load(&path).with_context(|| format!("loading {}", path))?,
        None => build_scene()?,
    };
    let output = args.next().unwrap_or_else(|| "glint.png".to_string());

    // Image rows grow downward, so the up vector points at -Y on screen
    let camera = Camera::new(Vec3::new(0.0, 20.0, -80.0), Vec3::Z, Vec3::X, -Vec3::Y);
    let frame = FrameConfig::new(
        WIDTH as f32 / HEIGHT as f32,
        Vec3::new(16.0, 64.0, -64.0),
        camera,
    );

    let config = RenderConfig {
        background: Color::new(0.05, 0.05, 0.08),
        ..RenderConfig::with_shading(ShadingModel::CookTorrance)
    };

    let image = render_frame(&scene, &frame, &config, WIDTH, HEIGHT);
    image
        .to_image()
        .save(&output)
        .with_context(|| format!("saving {}", output))?;
    log::info!("Saved {}", output);

    Ok(())
}

fn build_scene() -> Result<Scene> {
    let mut builder = SceneBuilder::new();
    let chrome = builder
        .add_material(Material::pbr(Color::new(0.95, 0.93, 0.88), 0.2, 1.0).with_reflective(true));
    let clay = builder.add_material(Material::pbr(Color::new(0.8, 0.3, 0.2), 0.6, 0.0));
    let floor = builder.add_material(Material::pbr(Color::splat(0.5), 0.9, 0.0));

    builder
        .add_sphere(Sphere::new(Vec3::new(0.0, 16.0, 0.0), 16.0, chrome))
        .add_sphere(Sphere::new(Vec3::new(28.0, 8.0, -12.0), 8.0, clay))
        .add_plane(Plane::ground(0.0, floor))
        .add_triangle(Triangle::new(
            Vec3::new(-50.0, 0.0, 20.0),
            Vec3::new(-30.0, 36.0, 20.0),
            Vec3::new(-14.0, 0.0, 20.0),
            clay,
        ))
        .add_light(Light::new(Vec3::ZERO, Color::splat(6000.0)));

    Ok(builder.build()?)
}
