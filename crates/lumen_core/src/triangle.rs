//! Triangle primitive.
//!
//! A three-vertex [`Polygon`]: the plane hit is accepted only when it lies
//! strictly inside all three edges.

use lumen_math::{Interval, MathResult, Point, Ray, Vector};

use crate::{GeometryResult, Polygon, Shape};

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Fails if the vertices are collinear or any two coincide.
    pub fn new(v0: Point, v1: Point, v2: Point) -> GeometryResult<Self> {
        Ok(Self {
            polygon: Polygon::new(vec![v0, v1, v2])?,
        })
    }

    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }
}

impl Shape for Triangle {
    fn normal_at(&self, point: Point) -> MathResult<Vector> {
        self.polygon.normal_at(point)
    }

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f64> {
        self.polygon.intersect(ray, ray_t)
    }
}
