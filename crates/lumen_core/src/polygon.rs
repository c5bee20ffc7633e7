//! Convex planar polygon.

use lumen_math::{align_zero, is_zero, Interval, MathResult, Point, Ray, Vector};

use crate::{GeometryError, GeometryResult, Plane, Shape};

/// A convex polygon. Vertices are in order around the boundary and all lie
/// in one plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    plane: Plane,
}

impl Polygon {
    /// Create a polygon, validating vertex count, planarity and convexity.
    pub fn new(vertices: Vec<Point>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        if vertices.len() == 3 {
            return Ok(Self { vertices, plane });
        }

        let n = plane.normal();
        for v in &vertices[3..] {
            let offset = v
                .subtract(&vertices[0])
                .map_err(|_| GeometryError::CollinearVertices)?;
            if !is_zero(offset.dot(&n)) {
                return Err(GeometryError::NonPlanarVertices);
            }
        }

        // Every turn between consecutive edges must go the same way round n
        let count = vertices.len();
        let mut orientation = 0.0;
        for i in 0..count {
            let prev = vertices[(i + count - 1) % count];
            let here = vertices[i];
            let next = vertices[(i + 1) % count];
            let e1 = here
                .subtract(&prev)
                .map_err(|_| GeometryError::CollinearVertices)?;
            let e2 = next
                .subtract(&here)
                .map_err(|_| GeometryError::CollinearVertices)?;
            let turn = e1
                .cross(&e2)
                .map_err(|_| GeometryError::NonConvexPolygon)?;
            let sign = align_zero(turn.dot(&n));
            if sign == 0.0 || sign * orientation < 0.0 {
                return Err(GeometryError::NonConvexPolygon);
            }
            orientation = sign;
        }

        Ok(Self { vertices, plane })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// True if the ray, extended from its origin, passes strictly inside the
    /// polygon outline. Edges and vertices count as outside.
    fn contains_projection(&self, ray: &Ray) -> bool {
        let origin = ray.origin();
        let dir = ray.direction();
        let count = self.vertices.len();
        let mut sign = 0.0;

        for i in 0..count {
            let (Ok(vi), Ok(vj)) = (
                self.vertices[i].subtract(&origin),
                self.vertices[(i + 1) % count].subtract(&origin),
            ) else {
                return false;
            };
            let Ok(edge_normal) = vi.cross(&vj) else {
                return false;
            };
            let s = align_zero(dir.dot(&edge_normal));
            if s == 0.0 || s * sign < 0.0 {
                return false;
            }
            sign = s;
        }
        true
    }
}

impl Shape for Polygon {
    fn normal_at(&self, _point: Point) -> MathResult<Vector> {
        Ok(self.plane.normal())
    }

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f64> {
        let hits = self.plane.intersect(ray, ray_t);
        if hits.is_empty() || !self.contains_projection(ray) {
            return Vec::new();
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(-1.0, 1.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Polygon::new(vec![Point::ZERO, Point::new(1.0, 0.0, 0.0)]),
            Err(GeometryError::TooFewVertices(2))
        );

        // Last vertex out of the plane
        let non_planar = Polygon::new(vec![
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(-1.0, 1.0, 2.0),
        ]);
        assert_eq!(non_planar, Err(GeometryError::NonPlanarVertices));

        // Vertex order crosses itself
        let bow_tie = Polygon::new(vec![
            Point::new(0.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(-1.0, 1.0, 1.0),
        ]);
        assert_eq!(bow_tie, Err(GeometryError::NonConvexPolygon));

        // Three consecutive collinear vertices
        let flat_corner = Polygon::new(vec![
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.5, 0.5),
        ]);
        assert_eq!(flat_corner, Err(GeometryError::NonConvexPolygon));
    }

    #[test]
    fn test_normal_is_plane_normal() {
        let poly = square();
        let n = poly.normal_at(Point::new(0.0, 0.0, 1.0)).unwrap();
        let expected = 1.0 / 3f64.sqrt();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x().abs() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_hit_inside_and_miss_outside() {
        let poly = Polygon::new(vec![
            Point::new(-1.0, -1.0, 0.0),
            Point::new(1.0, -1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(-1.0, 1.0, 0.0),
        ])
        .unwrap();

        let inside = Ray::new(Point::new(0.5, 0.5, 2.0), -Vector::Z);
        assert_eq!(poly.intersect(&inside, Interval::FORWARD), vec![2.0]);

        let outside = Ray::new(Point::new(1.5, 0.5, 2.0), -Vector::Z);
        assert!(poly.intersect(&outside, Interval::FORWARD).is_empty());

        let on_edge = Ray::new(Point::new(1.0, 0.5, 2.0), -Vector::Z);
        assert!(poly.intersect(&on_edge, Interval::FORWARD).is_empty());
    }
}
