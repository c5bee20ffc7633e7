//! Infinite plane.

use lumen_math::{align_zero, Interval, MathResult, Point, Ray, Vector};

use crate::{GeometryError, GeometryResult, Shape};

/// A plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point,
    normal: Vector,
}

impl Plane {
    /// Create a plane from a point on it and a normal. The normal is
    /// normalized.
    pub fn new(point: Point, normal: Vector) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Create the plane through three points.
    ///
    /// Fails if the points are collinear or any two coincide.
    pub fn from_points(p1: Point, p2: Point, p3: Point) -> GeometryResult<Self> {
        let v1 = p2
            .subtract(&p1)
            .map_err(|_| GeometryError::CollinearVertices)?;
        let v2 = p3
            .subtract(&p1)
            .map_err(|_| GeometryError::CollinearVertices)?;
        let normal = v1
            .cross(&v2)
            .map_err(|_| GeometryError::CollinearVertices)?;
        Ok(Self::new(p1, normal))
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }
}

impl Shape for Plane {
    fn normal_at(&self, _point: Point) -> MathResult<Vector> {
        Ok(self.normal)
    }

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f64> {
        // A ray starting on the reference point has no usable offset vector
        let Ok(to_plane) = self.point.subtract(&ray.origin()) else {
            return Vec::new();
        };

        // Ray is parallel to the plane
        let nv = align_zero(self.normal.dot(&ray.direction()));
        if nv == 0.0 {
            return Vec::new();
        }

        let t = align_zero(self.normal.dot(&to_plane) / nv);
        if ray_t.surrounds(t) {
            vec![t]
        } else {
            Vec::new()
        }
    }
}
