use std::fmt;
use std::ops::Neg;

use crate::{Double3, MathError, MathResult};

/// A direction or displacement in 3D space.
///
/// A `Vector` is never the zero vector: every constructor and every
/// operation that could cancel out to zero returns [`MathError::ZeroVector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    xyz: Double3,
}

impl Vector {
    /// Unit vector along +X.
    pub const X: Vector = Vector { xyz: Double3::X };
    /// Unit vector along +Y.
    pub const Y: Vector = Vector { xyz: Double3::Y };
    /// Unit vector along +Z.
    pub const Z: Vector = Vector { xyz: Double3::Z };

    /// Create a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> MathResult<Self> {
        Self::from_xyz(Double3::new(x, y, z))
    }

    /// Create a vector from a raw triple.
    pub fn from_xyz(xyz: Double3) -> MathResult<Self> {
        if xyz == Double3::ZERO {
            return Err(MathError::ZeroVector);
        }
        Ok(Self { xyz })
    }

    /// The underlying triple.
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

    /// Vector sum. Fails when the two vectors cancel out.
    pub fn add(&self, other: &Vector) -> MathResult<Vector> {
        Self::from_xyz(self.xyz + other.xyz)
    }

    /// Vector difference. Fails when the two vectors are equal.
    pub fn subtract(&self, other: &Vector) -> MathResult<Vector> {
        Self::from_xyz(self.xyz - other.xyz)
    }

    /// Multiply by a scalar. Fails for a zero scalar.
    pub fn scale(&self, scalar: f64) -> MathResult<Vector> {
        Self::from_xyz(self.xyz * scalar)
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.xyz.dot(other.xyz)
    }

    /// Cross product. Fails for parallel vectors.
    pub fn cross(&self, other: &Vector) -> MathResult<Vector> {
        Self::from_xyz(self.xyz.cross(other.xyz))
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    pub fn normalize(&self) -> Vector {
        Vector {
            xyz: self.xyz / self.length(),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector { xyz: -self.xyz }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.xyz.x, self.xyz.y, self.xyz.z)
    }
}
