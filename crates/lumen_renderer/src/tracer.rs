//! Recursive Phong ray tracer.
//!
//! Color at a hit is the geometry's emission plus diffuse and specular terms
//! from every light, attenuated by shadow transparency, plus reflected and
//! refracted contributions traced recursively. Recursion stops at
//! `max_level`, or earlier once the accumulated attenuation `k` falls
//! below `min_k` in every channel.

use lumen_core::{BlackBoard, Color, GeoPoint, Intersectable, Material, Scene};
use lumen_math::{align_zero, is_zero, Double3, Point, Ray, Vector};
use rand::RngCore;

use crate::{ConfigError, TracerConfig};

/// Anything that can produce the color seen along a ray.
pub trait RayTracer: Send + Sync {
    /// Color seen along `ray`. `rng` drives shadow sample jitter.
    fn trace_ray(&self, ray: &Ray, rng: &mut dyn RngCore) -> Color;
}

/// Whitted-style tracer with Phong shading and soft shadows.
pub struct SimpleRayTracer<'s> {
    pub(crate) scene: &'s Scene,
    pub(crate) config: TracerConfig,
    pub(crate) board: BlackBoard,
}

impl<'s> SimpleRayTracer<'s> {
    /// A tracer with the default settings.
    pub fn new(scene: &'s Scene) -> Self {
        Self::build(scene, TracerConfig::default())
    }

    /// A tracer with custom settings, rejected if any field is unusable.
    pub fn with_config(scene: &'s Scene, config: TracerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(scene, config))
    }

    fn build(scene: &'s Scene, config: TracerConfig) -> Self {
        if scene.geometries().is_empty() {
            log::warn!("Scene '{}' has no geometry; every ray sees the background", scene.name());
        }
        let board = BlackBoard::new(config.grid_cells).with_jitter(config.jitter);
        log::debug!(
            "Tracer for '{}': max level {}, min k {}, {} lights, {}x{} shadow grid (jitter {})",
            scene.name(),
            config.max_level,
            config.min_k,
            scene.lights().len(),
            board.cells(),
            board.cells(),
            board.jitter()
        );
        Self { scene, config, board }
    }

    pub fn scene(&self) -> &'s Scene {
        self.scene
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    fn find_closest_intersection(&self, ray: &Ray) -> Option<GeoPoint<'s>> {
        let scene: &'s Scene = self.scene;
        let hits = scene.geometries().find_geo_intersections(ray);
        ray.find_closest_by(&hits, |gp| gp.point).copied()
    }

    fn calc_color(
        &self,
        gp: GeoPoint<'s>,
        ray: &Ray,
        level: u32,
        k: Double3,
        rng: &mut dyn RngCore,
    ) -> Color {
        let color = self.calc_local_effects(gp, ray, k, rng);
        if level <= 1 {
            color
        } else {
            color + self.calc_global_effects(gp, ray, level, k, rng)
        }
    }

    fn calc_local_effects(
        &self,
        gp: GeoPoint<'s>,
        ray: &Ray,
        k: Double3,
        rng: &mut dyn RngCore,
    ) -> Color {
        let geometry = gp.geometry;
        let mut color = geometry.emission();
        let v = ray.direction();
        let Ok(n) = geometry.normal_at(gp.point) else {
            return color;
        };
        let nv = align_zero(n.dot(&v));
        if nv == 0.0 {
            return color;
        }

        let material = geometry.material();
        for light in self.scene.lights() {
            let Ok(l) = light.direction(gp.point) else {
                continue;
            };
            let nl = align_zero(n.dot(&l));
            // Light and viewer on the same side of the surface
            if nl * nv <= 0.0 {
                continue;
            }
            let ktr = self.transparency(gp, light.as_ref(), l, n, rng);
            if (ktr * k).max_element() < self.config.min_k {
                continue;
            }
            let il = light.intensity(gp.point) * ktr;
            color += il * (calc_diffusive(material, nl) + calc_specular(material, n, l, nl, v));
        }
        color
    }

    fn calc_global_effects(
        &self,
        gp: GeoPoint<'s>,
        ray: &Ray,
        level: u32,
        k: Double3,
        rng: &mut dyn RngCore,
    ) -> Color {
        let Ok(n) = gp.geometry.normal_at(gp.point) else {
            return Color::ZERO;
        };
        let v = ray.direction();
        let material = gp.geometry.material();

        let reflected = construct_reflected_ray(n, gp.point, v);
        let refracted = material
            .is_transparent()
            .then(|| construct_refracted_ray(n, gp.point, v));
        self.calc_global_effect(reflected, level, k, material.kr, rng)
            + self.calc_global_effect(refracted, level, k, material.kt, rng)
    }

    fn calc_global_effect(
        &self,
        ray: Option<Ray>,
        level: u32,
        k: Double3,
        kx: Double3,
        rng: &mut dyn RngCore,
    ) -> Color {
        let kkx = k * kx;
        if kkx.max_element() < self.config.min_k {
            return Color::ZERO;
        }
        let Some(ray) = ray else {
            return Color::ZERO;
        };

        match self.find_closest_intersection(&ray) {
            None => self.scene.background() * kx,
            Some(gp) => {
                let grazing = gp
                    .geometry
                    .normal_at(gp.point)
                    .map(|n| is_zero(n.dot(&ray.direction())))
                    .unwrap_or(true);
                if grazing {
                    Color::ZERO
                } else {
                    self.calc_color(gp, &ray, level - 1, kkx, rng) * kx
                }
            }
        }
    }
}

impl RayTracer for SimpleRayTracer<'_> {
    fn trace_ray(&self, ray: &Ray, rng: &mut dyn RngCore) -> Color {
        match self.find_closest_intersection(ray) {
            None => self.scene.background(),
            Some(gp) => {
                self.calc_color(gp, ray, self.config.max_level, Double3::ONE, rng)
                    + self.scene.ambient_light().intensity()
            }
        }
    }
}

fn calc_diffusive(material: &Material, nl: f64) -> Double3 {
    material.kd * nl.abs()
}

fn calc_specular(material: &Material, n: Vector, l: Vector, nl: f64, v: Vector) -> Double3 {
    let r = match n.scale(2.0 * nl).and_then(|twice| l.subtract(&twice)) {
        Ok(r) => r.normalize(),
        Err(_) => return Double3::ZERO,
    };
    let vr = -v.dot(&r);
    material.ks * vr.max(0.0).powf(f64::from(material.shininess))
}

/// Mirror ray leaving `point` for incoming direction `v`.
///
/// `None` when `v` grazes the surface.
pub fn construct_reflected_ray(normal: Vector, point: Point, v: Vector) -> Option<Ray> {
    let nv = align_zero(normal.dot(&v));
    if nv == 0.0 {
        return None;
    }
    let r = normal.scale(2.0 * nv).and_then(|twice| v.subtract(&twice)).ok()?;
    Some(Ray::nudged(point, r, normal))
}

/// Straight-through ray continuing `v` past `point`.
pub fn construct_refracted_ray(normal: Vector, point: Point, v: Vector) -> Ray {
    Ray::nudged(point, v, normal)
}
