//! Lumen math primitives.
//!
//! Points, non-zero vectors and normalized rays on top of `glam::DVec3`.
//! Every operation that could produce a zero vector is fallible, so a
//! `Vector` in hand is always a valid direction.

mod error;
mod interval;
mod point;
mod ray;
mod util;
mod vector;

pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use point::Point;
pub use ray::{Ray, DELTA};
pub use util::{align_zero, is_zero, orthonormal_basis, EPSILON};
pub use vector::Vector;

// Re-export glam's double-precision vector for component-wise triples
pub use glam::DVec3;

/// Three doubles with component-wise arithmetic.
///
/// Backs material coefficients, attenuation factors and colors.
pub type Double3 = DVec3;
