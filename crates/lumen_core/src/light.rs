//! Light sources.
//!
//! Directions returned by [`LightSource::direction`] point FROM the light TO
//! the lit point; shading code relies on that convention.

use std::fmt;

use lumen_math::{orthonormal_basis, MathResult, Point, Vector};
use rand::RngCore;

use crate::{BlackBoard, Color, IntoDouble3, LightError};

/// Trait for lights that illuminate a point from somewhere.
pub trait LightSource: fmt::Debug + Send + Sync {
    /// Intensity arriving at `point`.
    fn intensity(&self, point: Point) -> Color;

    /// Unit direction from the light towards `point`.
    ///
    /// Fails only when `point` is exactly at the light position.
    fn direction(&self, point: Point) -> MathResult<Vector>;

    /// Distance from the light to `point`; infinite for directional lights.
    fn distance(&self, point: Point) -> f64;

    /// Radius of the emitting disc. Zero means a point light.
    fn radius(&self) -> f64 {
        0.0
    }

    /// Sample positions across the emitting disc facing along `l`.
    ///
    /// An empty list means the light has no position to sample and callers
    /// fall back to a single sample along `-l`.
    fn grid_points(&self, _l: Vector, _board: &BlackBoard, _rng: &mut dyn RngCore) -> Vec<Point> {
        Vec::new()
    }
}

/// Uniform light reaching every point from every direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    /// No ambient light at all.
    pub const NONE: AmbientLight = AmbientLight {
        intensity: Color::ZERO,
    };

    /// Ambient light of color `ia` scaled by `ka` (scalar or per channel).
    pub fn new(ia: Color, ka: impl IntoDouble3) -> Self {
        Self {
            intensity: ia * ka.into_double3(),
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::NONE
    }
}

/// Light from infinitely far away along a fixed direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    intensity: Color,
    direction: Vector,
}

impl DirectionalLight {
    pub fn new(intensity: Color, direction: Vector) -> Self {
        Self {
            intensity,
            direction: direction.normalize(),
        }
    }
}

impl LightSource for DirectionalLight {
    fn intensity(&self, _point: Point) -> Color {
        self.intensity
    }

    fn direction(&self, _point: Point) -> MathResult<Vector> {
        Ok(self.direction)
    }

    fn distance(&self, _point: Point) -> f64 {
        f64::INFINITY
    }
}

/// Omnidirectional light at a position, fading with distance as
/// `1 / (kc + kl*d + kq*d^2)`.
///
/// A positive radius turns it into a disc light for soft shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    intensity: Color,
    position: Point,
    kc: f64,
    kl: f64,
    kq: f64,
    radius: f64,
}

impl PointLight {
    /// A point light with no attenuation (kc = 1, kl = kq = 0).
    pub fn new(intensity: Color, position: Point) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
            radius: 0.0,
        }
    }

    /// Set the constant, linear and quadratic attenuation factors.
    pub fn with_attenuation(mut self, kc: f64, kl: f64, kq: f64) -> Result<Self, LightError> {
        let valid = [kc, kl, kq].iter().all(|k| k.is_finite() && *k >= 0.0);
        if !valid || kc + kl + kq <= 0.0 {
            return Err(LightError::InvalidAttenuation { kc, kl, kq });
        }
        self.kc = kc;
        self.kl = kl;
        self.kq = kq;
        Ok(self)
    }

    /// Set the radius of the emitting disc.
    pub fn with_radius(mut self, radius: f64) -> Result<Self, LightError> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(LightError::InvalidRadius(radius));
        }
        self.radius = radius;
        Ok(self)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// (kc, kl, kq)
    pub fn attenuation(&self) -> (f64, f64, f64) {
        (self.kc, self.kl, self.kq)
    }
}

impl LightSource for PointLight {
    fn intensity(&self, point: Point) -> Color {
        let d = self.position.distance(&point);
        let denominator = self.kc + self.kl * d + self.kq * d * d;
        // Only reachable at the light itself when kc is zero
        if denominator <= 0.0 {
            return self.intensity;
        }
        self.intensity / denominator
    }

    fn direction(&self, point: Point) -> MathResult<Vector> {
        Ok(point.subtract(&self.position)?.normalize())
    }

    fn distance(&self, point: Point) -> f64 {
        self.position.distance(&point)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn grid_points(&self, l: Vector, board: &BlackBoard, rng: &mut dyn RngCore) -> Vec<Point> {
        if self.radius == 0.0 {
            return vec![self.position];
        }
        let (right, up) = orthonormal_basis(l);
        board.construct_circle(self.position, up, right, self.radius, rng)
    }
}

/// A point light aimed along a direction, fading as `max(0, dir . l)` away
/// from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    light: PointLight,
    direction: Vector,
}

impl SpotLight {
    pub fn new(intensity: Color, position: Point, direction: Vector) -> Self {
        Self {
            light: PointLight::new(intensity, position),
            direction: direction.normalize(),
        }
    }

    pub fn with_attenuation(mut self, kc: f64, kl: f64, kq: f64) -> Result<Self, LightError> {
        self.light = self.light.with_attenuation(kc, kl, kq)?;
        Ok(self)
    }

    pub fn with_radius(mut self, radius: f64) -> Result<Self, LightError> {
        self.light = self.light.with_radius(radius)?;
        Ok(self)
    }

    pub fn position(&self) -> Point {
        self.light.position()
    }

    pub fn aim(&self) -> Vector {
        self.direction
    }
}

impl LightSource for SpotLight {
    fn intensity(&self, point: Point) -> Color {
        let Ok(l) = self.light.direction(point) else {
            return Color::ZERO;
        };
        let factor = self.direction.dot(&l).max(0.0);
        self.light.intensity(point) * factor
    }

    fn direction(&self, point: Point) -> MathResult<Vector> {
        self.light.direction(point)
    }

    fn distance(&self, point: Point) -> f64 {
        self.light.distance(point)
    }

    fn radius(&self) -> f64 {
        self.light.radius()
    }

    fn grid_points(&self, l: Vector, board: &BlackBoard, rng: &mut dyn RngCore) -> Vec<Point> {
        self.light.grid_points(l, board, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ambient() {
        let a = AmbientLight::new(Color::new(1.0, 0.5, 0.2), 0.5);
        assert_eq!(a.intensity(), Color::new(0.5, 0.25, 0.1));
        let b = AmbientLight::new(Color::ONE, Color::new(0.1, 0.2, 0.3));
        assert_eq!(b.intensity(), Color::new(0.1, 0.2, 0.3));
        assert_eq!(AmbientLight::default().intensity(), Color::ZERO);
    }

    #[test]
    fn test_directional() {
        let light = DirectionalLight::new(Color::ONE, Vector::new(0.0, 0.0, -2.0).unwrap());
        let p = Point::new(3.0, 4.0, 5.0);
        assert_eq!(light.direction(p).unwrap(), -Vector::Z);
        assert_eq!(light.distance(p), f64::INFINITY);
        assert_eq!(light.intensity(p), Color::ONE);
        assert_eq!(light.radius(), 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(light.grid_points(-Vector::Z, &BlackBoard::default(), &mut rng).is_empty());
    }

    #[test]
    fn test_point_light_attenuation() {
        let light = PointLight::new(Color::splat(100.0), Point::ZERO)
            .with_attenuation(1.0, 1.0, 1.0)
            .unwrap();
        let p = Point::new(0.0, 0.0, 3.0);
        // 100 / (1 + 3 + 9)
        let expected = 100.0 / 13.0;
        assert!((light.intensity(p).x - expected).abs() < 1e-12);
        assert_eq!(light.direction(p).unwrap(), Vector::Z);
        assert_eq!(light.distance(p), 3.0);
        assert!(light.direction(Point::ZERO).is_err());
    }

    #[test]
    fn test_point_light_invalid_settings() {
        let light = PointLight::new(Color::ONE, Point::ZERO);
        assert!(light.with_attenuation(0.0, 0.0, 0.0).is_err());
        assert!(light.with_attenuation(1.0, -1.0, 0.0).is_err());
        assert_eq!(light.with_radius(-1.0), Err(LightError::InvalidRadius(-1.0)));
        assert_eq!(
            light.with_radius(f64::INFINITY),
            Err(LightError::InvalidRadius(f64::INFINITY))
        );
        assert!(matches!(
            light.with_radius(f64::NAN),
            Err(LightError::InvalidRadius(r)) if r.is_nan()
        ));
        assert!(SpotLight::new(Color::ONE, Point::ZERO, Vector::Z)
            .with_radius(f64::INFINITY)
            .is_err());
    }

    #[test]
    fn test_point_light_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = BlackBoard::default();
        let position = Point::new(0.0, 10.0, 0.0);

        let small = PointLight::new(Color::ONE, position);
        assert_eq!(small.grid_points(-Vector::Y, &board, &mut rng), vec![position]);

        let area = small.with_radius(2.0).unwrap();
        let points = area.grid_points(-Vector::Y, &board, &mut rng);
        assert!(points.len() > 1);
        // Disc is perpendicular to the light direction
        assert!(points.iter().all(|p| (p.y() - 10.0).abs() < 1e-12));
        assert!(points.iter().all(|p| p.distance(&position) <= 2.0 + 1e-12));
    }

    #[test]
    fn test_spot_falloff() {
        let spot = SpotLight::new(Color::ONE, Point::ZERO, -Vector::Z);

        // Straight ahead
        let ahead = spot.intensity(Point::new(0.0, 0.0, -2.0));
        assert!((ahead.x - 1.0).abs() < 1e-12);

        // 60 degrees off the aim
        let side = spot.intensity(Point::new(3f64.sqrt(), 0.0, -1.0));
        assert!((side.x - 0.5).abs() < 1e-12);

        // Behind the spot
        assert_eq!(spot.intensity(Point::new(0.0, 0.0, 2.0)), Color::ZERO);
    }
}
