//! Renders a small showcase scene to `lumen.png`.
//!
//! Usage: `cargo run --example simple_render [tracer-config.json]`
//!
//! The optional JSON file overrides tracer settings, e.g.
//! `{ "max_level": 4, "jitter": true }`.

use anyhow::Context;
use lumen_core::{
    AmbientLight, Color, Cylinder, Geometry, Material, Plane, PointLight, Scene, Sphere, SpotLight,
    Triangle,
};
use lumen_math::{Point, Ray, Vector};
use lumen_renderer::{
    print_grid, render, Camera, ImageBuffer, PixelSink, RenderConfig, SimpleRayTracer, TracerConfig,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tracer_config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => TracerConfig::default(),
    };

    let scene = build_scene()?;
    let camera = Camera::builder()
        .with_location(Point::new(0.0, 0.0, 1000.0))
        .with_direction(-Vector::Z, Vector::Y)
        .with_vp_size(200.0, 200.0)
        .with_vp_distance(1000.0)
        .build()?;

    let tracer = SimpleRayTracer::with_config(&scene, tracer_config)?;
    let mut image = ImageBuffer::new(600, 600).with_output("lumen.png");
    render(&camera, &tracer, &mut image, &RenderConfig::default());

    if std::env::var_os("LUMEN_GRID").is_some() {
        print_grid(&mut image, 50, Color::new(1.0, 1.0, 0.0));
    }
    image.finalize()?;
    Ok(())
}

fn build_scene() -> anyhow::Result<Scene> {
    let floor = Geometry::new(Plane::new(Point::new(0.0, -60.0, 0.0), Vector::Y))
        .with_emission(Color::new(0.05, 0.05, 0.08))
        .with_material(Material::new().with_kd(0.5).with_kr(0.3));

    let glass = Geometry::new(Sphere::new(Point::new(-40.0, -20.0, -50.0), 40.0)?)
        .with_emission(Color::new(0.0, 0.1, 0.3))
        .with_material(
            Material::new()
                .with_kd(0.2)
                .with_ks(0.5)
                .with_shininess(60)
                .with_kt(0.6),
        );

    let core = Geometry::new(Sphere::new(Point::new(-40.0, -20.0, -50.0), 15.0)?)
        .with_emission(Color::new(0.6, 0.1, 0.1))
        .with_material(Material::new().with_kd(0.5).with_ks(0.5).with_shininess(30));

    let pillar = Geometry::new(Cylinder::new(
        Ray::new(Point::new(50.0, -60.0, -80.0), Vector::Y),
        15.0,
        70.0,
    )?)
    .with_emission(Color::new(0.1, 0.3, 0.1))
    .with_material(Material::new().with_kd(0.6).with_ks(0.3).with_shininess(20));

    let mirror = Geometry::new(Triangle::new(
        Point::new(-100.0, -60.0, -150.0),
        Point::new(100.0, -60.0, -150.0),
        Point::new(0.0, 90.0, -160.0),
    )?)
    .with_material(Material::new().with_kd(0.1).with_kr(0.7));

    let key = SpotLight::new(
        Color::new(30.0, 24.0, 18.0),
        Point::new(-100.0, 100.0, 100.0),
        Vector::new(1.0, -1.0, -1.5)?,
    )
    .with_attenuation(1.0, 0.0005, 0.0005)?
    .with_radius(10.0)?;

    let fill = PointLight::new(Color::new(8.0, 8.0, 10.0), Point::new(100.0, 60.0, 50.0))
        .with_attenuation(1.0, 0.001, 0.0008)?
        .with_radius(6.0)?;

    Ok(Scene::builder("showcase")
        .with_background(Color::new(0.02, 0.02, 0.05))
        .with_ambient_light(AmbientLight::new(Color::new(0.2, 0.2, 0.25), 0.15))
        .add_geometry(floor)
        .add_geometry(glass)
        .add_geometry(core)
        .add_geometry(pillar)
        .add_geometry(mirror)
        .add_light(key)
        .add_light(fill)
        .build())
}
