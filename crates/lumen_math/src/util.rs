//! Floating point helpers shared by the geometry code.

use crate::Vector;

/// Values closer to zero than this are treated as zero.
pub const EPSILON: f64 = 1e-10;

/// Returns true if `x` is zero within [`EPSILON`].
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Snaps `x` to exactly zero when it is within [`EPSILON`] of zero.
#[inline]
pub fn align_zero(x: f64) -> f64 {
    if is_zero(x) {
        0.0
    } else {
        x
    }
}

/// Build a `(right, up)` pair of unit vectors perpendicular to `dir` and to
/// each other.
pub fn orthonormal_basis(dir: Vector) -> (Vector, Vector) {
    let d = dir.normalize();
    // Pick the world axis least aligned with dir so the cross product is stable
    let helper = if d.x().abs() < 0.9 { Vector::X } else { Vector::Y };
    let right = d
        .cross(&helper)
        .map(|v| v.normalize())
        .unwrap_or(Vector::Z);
    let up = right.cross(&d).map(|v| v.normalize()).unwrap_or(Vector::Y);
    (right, up)
}
