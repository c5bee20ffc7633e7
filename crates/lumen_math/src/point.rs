use std::fmt;

use crate::{Double3, MathError, MathResult, Vector};

/// A position in 3D space.
///
/// Equality is exact; shading code compares distances with an epsilon
/// instead of comparing points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    xyz: Double3,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { xyz: Double3::ZERO };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Double3::new(x, y, z),
        }
    }

    pub const fn from_xyz(xyz: Double3) -> Self {
        Self { xyz }
    }

    #[inline]
    pub fn xyz(&self) -> Double3 {
        self.xyz
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.xyz.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.xyz.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.xyz.z
    }

    /// Move this point by a vector.
    #[inline]
    pub fn add(&self, v: &Vector) -> Point {
        Point {
            xyz: self.xyz + v.xyz(),
        }
    }

    /// The vector from `other` to `self`.
    ///
    /// Fails if the points coincide.
    pub fn subtract(&self, other: &Point) -> MathResult<Vector> {
        Vector::from_xyz(self.xyz - other.xyz).map_err(|_| MathError::CoincidentPoints)
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        self.xyz.distance_squared(other.xyz)
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.xyz.distance(other.xyz)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.xyz.x, self.xyz.y, self.xyz.z)
    }
}
