//! Composite of intersectables.

use lumen_math::Ray;

use crate::{GeoPoint, Intersectable};

/// A flat list of intersectables, itself intersectable.
///
/// Children may be geometries or other `Geometries`, so a scene can be a
/// tree. Intersecting the composite concatenates the children's results in
/// insertion order.
#[derive(Default)]
pub struct Geometries {
    children: Vec<Box<dyn Intersectable>>,
}

impl Geometries {
    /// Create a new empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an intersectable to the composite.
    pub fn add(&mut self, child: impl Intersectable + 'static) {
        self.children.push(Box::new(child));
    }

    /// Builder form of [`Geometries::add`].
    pub fn with(mut self, child: impl Intersectable + 'static) -> Self {
        self.add(child);
        self
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the composite is empty.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Intersectable for Geometries {
    fn find_geo_intersections_within<'a>(
        &'a self,
        ray: &Ray,
        max_distance: f64,
    ) -> Vec<GeoPoint<'a>> {
        self.children
            .iter()
            .flat_map(|child| child.find_geo_intersections_within(ray, max_distance))
            .collect()
    }
}
