//! Intersectable trait and GeoPoint for ray-geometry intersection.

use lumen_math::{Point, Ray};

use crate::Geometry;

/// An intersection point paired with the geometry that produced it.
///
/// The geometry is borrowed from the scene, never owned.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint<'a> {
    pub geometry: &'a Geometry,
    pub point: Point,
}

impl<'a> GeoPoint<'a> {
    pub fn new(geometry: &'a Geometry, point: Point) -> Self {
        Self { geometry, point }
    }
}

impl PartialEq for GeoPoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.geometry, other.geometry) && self.point == other.point
    }
}

/// Trait for anything a ray can be intersected with.
///
/// No intersections is an empty list, never an error.
pub trait Intersectable: Send + Sync {
    /// All intersections strictly in front of the ray origin and strictly
    /// closer than `max_distance`.
    fn find_geo_intersections_within<'a>(
        &'a self,
        ray: &Ray,
        max_distance: f64,
    ) -> Vec<GeoPoint<'a>>;

    /// All intersections in front of the ray origin.
    fn find_geo_intersections<'a>(&'a self, ray: &Ray) -> Vec<GeoPoint<'a>> {
        self.find_geo_intersections_within(ray, f64::INFINITY)
    }

    /// Intersection points without their geometry.
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        self.find_geo_intersections(ray)
            .into_iter()
            .map(|gp| gp.point)
            .collect()
    }
}
