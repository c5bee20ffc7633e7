//! Shadow transparency with adaptive area-light sampling.
//!
//! An area light is sampled on a disc of grid points. Four spread-out
//! samples are traced first; the rest of the grid is traced only when those
//! disagree, so fully lit and fully shadowed regions stay cheap.

use lumen_core::{GeoPoint, Intersectable, LightSource};
use lumen_math::{Double3, Point, Ray, Vector};
use rand::RngCore;

use crate::SimpleRayTracer;

impl<'s> SimpleRayTracer<'s> {
    /// Fraction of `light` reaching `gp`, per color channel.
    ///
    /// `l` points from the light toward the hit and `n` is the surface
    /// normal there. Returns zero when the result is below `min_k`.
    pub(crate) fn transparency(
        &self,
        gp: GeoPoint<'s>,
        light: &dyn LightSource,
        l: Vector,
        n: Vector,
        rng: &mut dyn RngCore,
    ) -> Double3 {
        let mut targets = light.grid_points(l, &self.board, rng);
        if targets.is_empty() {
            targets.push(gp.point.add(&-l));
        }
        let bounded = light.distance(gp.point).is_finite();
        let sample = |target: &Point| self.sample_transparency(gp, *target, bounded, n);

        let samples: Vec<Double3> = if targets.len() < 4 {
            targets.iter().map(sample).collect()
        } else {
            let last = targets.len() - 1;
            let mid = targets.len() / 2;
            let mut coarse = vec![0, last, mid, mid - 1];
            coarse.sort_unstable();
            coarse.dedup();

            let mut samples: Vec<Double3> = coarse.iter().map(|&i| sample(&targets[i])).collect();
            if should_sample_more(&samples, self.config.adaptive_threshold) {
                log::trace!("Refining shadow at {} with {} samples", gp.point, targets.len());
                samples.extend(
                    targets
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| !coarse.contains(i))
                        .map(|(_, target)| sample(target)),
                );
            }
            samples
        };

        let ktr = samples.iter().fold(Double3::ZERO, |acc, s| acc + *s) / samples.len() as f64;
        if ktr.max_element() < self.config.min_k {
            Double3::ZERO
        } else {
            ktr
        }
    }

    /// Product of the `kt` of everything between `gp` and `target`.
    ///
    /// Occluders past the target only count for unbounded lights.
    fn sample_transparency(
        &self,
        gp: GeoPoint<'s>,
        target: Point,
        bounded: bool,
        n: Vector,
    ) -> Double3 {
        let Ok(dir) = target.subtract(&gp.point) else {
            return Double3::ONE;
        };
        let ray = Ray::nudged(gp.point, dir, n);
        let max_distance = if bounded {
            ray.origin().distance(&target)
        } else {
            f64::INFINITY
        };
        self.scene
            .geometries()
            .find_geo_intersections_within(&ray, max_distance)
            .iter()
            .fold(Double3::ONE, |ktr, hit| ktr * hit.geometry.material().kt)
    }
}

/// True when any two samples differ by more than `threshold` times their
/// average magnitude.
fn should_sample_more(samples: &[Double3], threshold: f64) -> bool {
    samples.iter().enumerate().any(|(i, a)| {
        samples[i + 1..]
            .iter()
            .any(|b| !is_close(*a, *b, threshold))
    })
}

fn is_close(a: Double3, b: Double3, threshold: f64) -> bool {
    let avg = (a.length() + b.length()) / 2.0;
    a.distance(b) <= threshold * avg
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Color, Geometry, Material, Plane, PointLight, Polygon, Scene, Sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn floor() -> Geometry {
        Geometry::new(Plane::new(Point::ZERO, Vector::Z)).with_material(Material::new().with_kd(1.0))
    }

    fn blocker(kt: f64) -> Geometry {
        Geometry::new(Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0).unwrap())
            .with_material(Material::new().with_kt(kt))
    }

    /// Transparency toward the scene's first light from the floor point
    /// at (`x`, 0, 0).
    fn shadow_at(scene: &Scene, x: f64) -> Double3 {
        let tracer = SimpleRayTracer::new(scene);
        let surface = floor();
        let gp = GeoPoint::new(&surface, Point::new(x, 0.0, 0.0));
        let light = scene.lights()[0].as_ref();
        let l = light.direction(gp.point).unwrap();
        tracer.transparency(gp, light, l, Vector::Z, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_is_close() {
        assert!(is_close(Double3::ONE, Double3::ONE, 0.25));
        assert!(is_close(Double3::ZERO, Double3::ZERO, 0.25));
        assert!(!is_close(Double3::ONE, Double3::ZERO, 0.25));
        assert!(is_close(Double3::splat(1.0), Double3::splat(0.9), 0.25));
    }

    #[test]
    fn test_should_sample_more() {
        assert!(!should_sample_more(&[Double3::ONE; 4], 0.25));
        assert!(should_sample_more(
            &[Double3::ONE, Double3::ONE, Double3::ZERO, Double3::ONE],
            0.25
        ));
        assert!(!should_sample_more(&[], 0.25));
    }

    #[test]
    fn test_unoccluded_point_light() {
        let scene = Scene::builder("open")
            .add_geometry(floor())
            .add_light(PointLight::new(Color::ONE, Point::new(0.0, 0.0, 10.0)))
            .build();
        assert_eq!(shadow_at(&scene, 0.0), Double3::ONE);
    }

    #[test]
    fn test_opaque_occluder() {
        let scene = Scene::builder("blocked")
            .add_geometry(floor())
            .add_geometry(blocker(0.0))
            .add_light(PointLight::new(Color::ONE, Point::new(0.0, 0.0, 10.0)))
            .build();
        assert_eq!(shadow_at(&scene, 0.0), Double3::ZERO);
    }

    #[test]
    fn test_transparent_occluder_multiplies_per_crossing() {
        let scene = Scene::builder("glass")
            .add_geometry(floor())
            .add_geometry(blocker(0.5))
            .add_light(PointLight::new(Color::ONE, Point::new(0.0, 0.0, 10.0)))
            .build();
        // The shadow ray enters and leaves the sphere
        assert!((shadow_at(&scene, 0.0) - Double3::splat(0.25)).length() < 1e-12);
    }

    #[test]
    fn test_occluder_beyond_light_ignored() {
        let scene = Scene::builder("behind")
            .add_geometry(floor())
            .add_geometry(blocker(0.0))
            .add_light(PointLight::new(Color::ONE, Point::new(0.0, 0.0, 2.0)))
            .build();
        assert_eq!(shadow_at(&scene, 0.0), Double3::ONE);
    }

    #[test]
    fn test_area_light_penumbra() {
        // A square occluder covering half of the light disc seen from the origin
        let half = Polygon::new(vec![
            Point::new(0.0, -3.0, 5.0),
            Point::new(3.0, -3.0, 5.0),
            Point::new(3.0, 3.0, 5.0),
            Point::new(0.0, 3.0, 5.0),
        ])
        .unwrap();
        let light = PointLight::new(Color::ONE, Point::new(0.0, 0.0, 10.0))
            .with_radius(2.0)
            .unwrap();
        let scene = Scene::builder("penumbra")
            .add_geometry(floor())
            .add_geometry(Geometry::new(half))
            .add_light(light)
            .build();

        let ktr = shadow_at(&scene, 0.0);
        assert!(ktr.x > 0.0 && ktr.x < 1.0, "expected partial shadow, got {}", ktr);
        assert_eq!(ktr.x, ktr.y);
    }

    #[test]
    fn test_uniform_area_light_stays_coarse() {
        let light = PointLight::new(Color::ONE, Point::new(0.0, 0.0, 10.0))
            .with_radius(2.0)
            .unwrap();
        let scene = Scene::builder("lit")
            .add_geometry(floor())
            .add_light(light)
            .build();
        assert_eq!(shadow_at(&scene, 3.0), Double3::ONE);
    }

    #[test]
    fn test_below_min_k_is_zero() {
        let scene = Scene::builder("dark glass")
            .add_geometry(floor())
            .add_geometry(blocker(0.01))
            .add_light(PointLight::new(Color::ONE, Point::new(0.0, 0.0, 10.0)))
            .build();
        // 0.01 squared is under the cutoff
        assert_eq!(shadow_at(&scene, 0.0), Double3::ZERO);
    }
}
