//! Geometry: a shape plus how it looks.

use std::fmt;

use lumen_math::{Interval, MathResult, Point, Ray, Vector};

use crate::{Color, GeoPoint, Intersectable, Material};

/// A surface that can be intersected and has a normal everywhere on it.
///
/// Each shape is implemented on its own; there is no shared base state.
pub trait Shape: fmt::Debug + Send + Sync {
    /// Unit normal at `point`, which is expected to lie on the surface.
    ///
    /// Fails only when the point makes the normal undefined, e.g. the
    /// centre of a sphere.
    fn normal_at(&self, point: Point) -> MathResult<Vector>;

    /// Distances along `ray` at which it meets the surface, restricted to
    /// those `ray_t` strictly surrounds, in ascending order.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f64>;
}

/// A shape with an emission color and a material.
#[derive(Debug)]
pub struct Geometry {
    shape: Box<dyn Shape>,
    emission: Color,
    material: Material,
}

impl Geometry {
    /// Wrap a shape with black emission and the default material.
    pub fn new(shape: impl Shape + 'static) -> Self {
        Self {
            shape: Box::new(shape),
            emission: Color::ZERO,
            material: Material::default(),
        }
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn emission(&self) -> Color {
        self.emission
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Unit surface normal at `point`.
    pub fn normal_at(&self, point: Point) -> MathResult<Vector> {
        self.shape.normal_at(point)
    }
}

impl Intersectable for Geometry {
    fn find_geo_intersections_within<'a>(
        &'a self,
        ray: &Ray,
        max_distance: f64,
    ) -> Vec<GeoPoint<'a>> {
        let ray_t = Interval {
            max: max_distance,
            ..Interval::FORWARD
        };
        self.shape
            .intersect(ray, ray_t)
            .into_iter()
            .map(|t| GeoPoint::new(self, ray.point_at(t)))
            .collect()
    }
}
