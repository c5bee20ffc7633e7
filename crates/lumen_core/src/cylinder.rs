//! Finite cylinder: a tube cut to a height and closed with two caps.

use lumen_math::{align_zero, Interval, MathResult, Point, Ray, Vector};

use crate::{GeometryError, GeometryResult, Plane, Shape, Tube};

/// A closed cylinder from the axis origin to `height` along the axis.
///
/// The rim circles belong to neither the side nor the caps, so rays through
/// them are misses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
    bottom: Plane,
    top: Plane,
}

impl Cylinder {
    /// Create a new cylinder. Radius and height must be positive.
    pub fn new(axis: Ray, radius: f64, height: f64) -> GeometryResult<Self> {
        let tube = Tube::new(axis, radius)?;
        if !(height > 0.0) {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        let dir = axis.direction();
        Ok(Self {
            tube,
            height,
            bottom: Plane::new(axis.origin(), dir),
            top: Plane::new(axis.point_at(height), dir),
        })
    }

    pub fn tube(&self) -> &Tube {
        &self.tube
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// True if `point`, taken on a cap plane, lies strictly inside the disc.
    fn within_cap(&self, cap: &Plane, point: Point) -> bool {
        let r = self.tube.radius();
        align_zero(point.distance_squared(&cap.point()) - r * r) < 0.0
    }
}

impl Shape for Cylinder {
    fn normal_at(&self, point: Point) -> MathResult<Vector> {
        let dir = self.tube.axis().direction();
        let axial = self.tube.axial_distance(point);
        if axial == 0.0 {
            return Ok(-dir);
        }
        if align_zero(axial - self.height) == 0.0 {
            return Ok(dir);
        }
        self.tube.normal_at(point)
    }

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f64> {
        let side = Interval::new(0.0, self.height);
        let mut hits: Vec<f64> = self
            .tube
            .intersect(ray, ray_t)
            .into_iter()
            .filter(|t| side.surrounds(self.tube.axial_distance(ray.point_at(*t))))
            .collect();

        for cap in [&self.bottom, &self.top] {
            hits.extend(
                cap.intersect(ray, ray_t)
                    .into_iter()
                    .filter(|t| self.within_cap(cap, ray.point_at(*t))),
            );
        }

        hits.sort_by(|a, b| a.total_cmp(b));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyl() -> Cylinder {
        Cylinder::new(Ray::new(Point::ZERO, Vector::Z), 1.0, 2.0).unwrap()
    }

    #[test]
    fn test_invalid_dimensions() {
        let axis = Ray::new(Point::ZERO, Vector::Z);
        assert_eq!(
            Cylinder::new(axis, 1.0, 0.0),
            Err(GeometryError::NonPositiveHeight(0.0))
        );
        assert_eq!(
            Cylinder::new(axis, -1.0, 2.0),
            Err(GeometryError::NonPositiveRadius(-1.0))
        );
    }

    #[test]
    fn test_normals() {
        let cyl = cyl();
        // Side
        assert_eq!(cyl.normal_at(Point::new(1.0, 0.0, 1.0)).unwrap(), Vector::X);
        // Bottom cap, including its centre
        assert_eq!(cyl.normal_at(Point::new(0.5, 0.0, 0.0)).unwrap(), -Vector::Z);
        assert_eq!(cyl.normal_at(Point::ZERO).unwrap(), -Vector::Z);
        // Top cap, including its centre
        assert_eq!(cyl.normal_at(Point::new(0.0, 0.5, 2.0)).unwrap(), Vector::Z);
        assert_eq!(cyl.normal_at(Point::new(0.0, 0.0, 2.0)).unwrap(), Vector::Z);
    }

    #[test]
    fn test_side_hits() {
        let ray = Ray::new(Point::new(-5.0, 0.0, 1.0), Vector::X);
        let hits = cyl().intersect(&ray, Interval::FORWARD);
        assert_eq!(hits.len(), 2);
        assert!((hits[0] - 4.0).abs() < 1e-12);
        assert!((hits[1] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_side_misses_beyond_height() {
        let ray = Ray::new(Point::new(-5.0, 0.0, 3.0), Vector::X);
        assert!(cyl().intersect(&ray, Interval::FORWARD).is_empty());
    }

    #[test]
    fn test_through_both_caps() {
        let ray = Ray::new(Point::new(0.5, 0.0, -1.0), Vector::Z);
        assert_eq!(cyl().intersect(&ray, Interval::FORWARD), vec![1.0, 3.0]);
    }

    #[test]
    fn test_cap_and_side() {
        // Enters through the top cap, leaves through the side
        let ray = Ray::new(
            Point::new(0.0, 0.0, 2.5),
            Vector::new(1.0, 0.0, -1.0).unwrap(),
        );
        let hits = cyl().intersect(&ray, Interval::FORWARD);
        assert_eq!(hits.len(), 2);
        let entry = ray.point_at(hits[0]);
        let exit = ray.point_at(hits[1]);
        assert!((entry.z() - 2.0).abs() < 1e-9);
        assert!((exit.x() - 1.0).abs() < 1e-9);
        assert!((exit.z() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_rim_is_exclusive() {
        // Parallel to the axis, exactly on the rim circle
        let ray = Ray::new(Point::new(1.0, 0.0, -1.0), Vector::Z);
        assert!(cyl().intersect(&ray, Interval::FORWARD).is_empty());
    }
}
