//! Rays with a normalized direction.
//!
//! A ray spawned from a surface can be nudged along the surface normal by
//! [`DELTA`] so it does not immediately hit the surface it left.

use crate::{align_zero, is_zero, Point, Vector};

/// Offset applied to secondary ray origins along the surface normal.
pub const DELTA: f64 = 0.1;

/// A half-line from `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    /// Create a new ray. The direction is normalized.
    #[inline]
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray leaving a surface point.
    ///
    /// The origin is moved by `DELTA` along `normal`, towards the side of the
    /// surface the direction points into.
    pub fn nudged(point: Point, direction: Vector, normal: Vector) -> Self {
        let direction = direction.normalize();
        let nd = align_zero(normal.dot(&direction));
        let offset = if nd > 0.0 { DELTA } else { -DELTA };
        // normal is non-zero and offset is never zero, so scaling cannot fail
        let origin = match normal.scale(offset) {
            Ok(eps) => point.add(&eps),
            Err(_) => point,
        };
        Self { origin, direction }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the ray's unit direction.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Compute a point along the ray at distance t.
    /// P(t) = origin + t * direction
    pub fn point_at(&self, t: f64) -> Point {
        if is_zero(t) {
            return self.origin;
        }
        match self.direction.scale(t) {
            Ok(step) => self.origin.add(&step),
            Err(_) => self.origin,
        }
    }

    /// Of `points`, the one closest to the ray origin.
    pub fn find_closest_point(&self, points: &[Point]) -> Option<Point> {
        self.find_closest_by(points, |p| *p).copied()
    }

    /// Of `items`, the one whose position (as given by `position`) is
    /// closest to the ray origin. Ties keep the first encountered.
    pub fn find_closest_by<'a, T>(
        &self,
        items: &'a [T],
        position: impl Fn(&T) -> Point,
    ) -> Option<&'a T> {
        let mut closest = None;
        let mut best = f64::INFINITY;
        for item in items {
            let d = self.origin.distance_squared(&position(item));
            if d < best {
                best = d;
                closest = Some(item);
            }
        }
        closest
    }
}
