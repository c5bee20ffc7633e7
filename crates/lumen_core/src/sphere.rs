//! Sphere primitive for ray tracing.

use lumen_math::{align_zero, Interval, MathResult, Point, Ray, Vector};

use crate::{GeometryError, GeometryResult, Shape};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Point, radius: f64) -> GeometryResult<Self> {
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Sphere {
    fn normal_at(&self, point: Point) -> MathResult<Vector> {
        Ok(point.subtract(&self.center)?.normalize())
    }

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f64> {
        // From the centre every direction leaves through the surface at t = r
        let Ok(u) = self.center.subtract(&ray.origin()) else {
            return if ray_t.surrounds(self.radius) {
                vec![self.radius]
            } else {
                Vec::new()
            };
        };

        let tm = align_zero(ray.direction().dot(&u));
        let d = align_zero((u.length_squared() - tm * tm).max(0.0).sqrt());
        if d >= self.radius {
            return Vec::new();
        }

        let th = align_zero((self.radius * self.radius - d * d).sqrt());
        if th == 0.0 {
            return Vec::new();
        }

        [align_zero(tm - th), align_zero(tm + th)]
            .into_iter()
            .filter(|t| ray_t.surrounds(*t))
            .collect()
    }
}
