//! Infinite tube (cylinder without ends) around an axis ray.

use lumen_math::{align_zero, is_zero, Interval, MathResult, Point, Ray, Vector};

use crate::{GeometryError, GeometryResult, Shape};

/// The set of points at distance `radius` from the line of `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    axis: Ray,
    radius: f64,
}

impl Tube {
    /// Create a new tube. The radius must be positive.
    pub fn new(axis: Ray, radius: f64) -> GeometryResult<Self> {
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { axis, radius })
    }

    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed distance of the projection of `point` along the axis.
    pub(crate) fn axial_distance(&self, point: Point) -> f64 {
        match point.subtract(&self.axis.origin()) {
            Ok(v) => align_zero(self.axis.direction().dot(&v)),
            Err(_) => 0.0,
        }
    }
}

impl Shape for Tube {
    fn normal_at(&self, point: Point) -> MathResult<Vector> {
        // point_at(0) is the axis origin, which covers the foot-at-origin case
        let foot = self.axis.point_at(self.axial_distance(point));
        Ok(point.subtract(&foot)?.normalize())
    }

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f64> {
        let axis = self.axis.direction().xyz();
        let d = ray.direction().xyz();
        let oc = ray.origin().xyz() - self.axis.origin().xyz();

        // Project onto the plane perpendicular to the axis:
        // |oc_perp + t * d_perp|^2 = r^2
        let d_perp = d - d.dot(axis) * axis;
        let oc_perp = oc - oc.dot(axis) * axis;

        let a = d_perp.length_squared();
        // Ray is parallel to the axis
        if is_zero(a) {
            return Vec::new();
        }
        let b = 2.0 * oc_perp.dot(d_perp);
        let c = oc_perp.length_squared() - self.radius * self.radius;

        let discriminant = align_zero(b * b - 4.0 * a * c);
        if discriminant <= 0.0 {
            return Vec::new();
        }

        let sqrt_disc = discriminant.sqrt();
        [
            align_zero((-b - sqrt_disc) / (2.0 * a)),
            align_zero((-b + sqrt_disc) / (2.0 * a)),
        ]
        .into_iter()
        .filter(|t| ray_t.surrounds(*t))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_tube() -> Tube {
        Tube::new(Ray::new(Point::ZERO, Vector::Z), 1.0).unwrap()
    }

    #[test]
    fn test_normal() {
        let tube = z_tube();
        assert_eq!(tube.normal_at(Point::new(1.0, 0.0, 6.0)).unwrap(), Vector::X);
        assert_eq!(tube.normal_at(Point::new(0.0, -1.0, -2.0)).unwrap(), -Vector::Y);
    }

    #[test]
    fn test_normal_at_axis_origin_level() {
        // Projection falls on the axis origin itself
        let tube = z_tube();
        assert_eq!(tube.normal_at(Point::new(0.0, 1.0, 0.0)).unwrap(), Vector::Y);
    }

    #[test]
    fn test_normal_on_axis_is_undefined() {
        assert!(z_tube().normal_at(Point::new(0.0, 0.0, 3.0)).is_err());
    }

    #[test]
    fn test_perpendicular_hits() {
        let tube = z_tube();
        let ray = Ray::new(Point::new(-5.0, 0.0, 2.0), Vector::X);
        let hits = tube.intersect(&ray, Interval::FORWARD);

        assert_eq!(hits.len(), 2);
        assert!((hits[0] - 4.0).abs() < 1e-12);
        assert!((hits[1] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_oblique_hit_points_lie_on_surface() {
        let tube = z_tube();
        let ray = Ray::new(
            Point::new(-3.0, 0.2, -1.0),
            Vector::new(1.0, 0.1, 0.7).unwrap(),
        );
        let hits = tube.intersect(&ray, Interval::FORWARD);
        assert_eq!(hits.len(), 2);
        for t in hits {
            let p = ray.point_at(t);
            assert!(((p.x() * p.x() + p.y() * p.y()).sqrt() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_misses() {
        let tube = z_tube();

        let parallel = Ray::new(Point::new(0.5, 0.0, -10.0), Vector::Z);
        assert!(tube.intersect(&parallel, Interval::FORWARD).is_empty());

        let beside = Ray::new(Point::new(-5.0, 2.0, 0.0), Vector::X);
        assert!(tube.intersect(&beside, Interval::FORWARD).is_empty());

        let tangent = Ray::new(Point::new(-5.0, 1.0, 0.0), Vector::X);
        assert!(tube.intersect(&tangent, Interval::FORWARD).is_empty());
    }

    #[test]
    fn test_inside_one_hit() {
        let ray = Ray::new(Point::ZERO, Vector::X);
        assert_eq!(z_tube().intersect(&ray, Interval::FORWARD), vec![1.0]);
    }
}
