//! Phong material coefficients.

use lumen_math::Double3;

/// Color type alias (RGB, unclamped; values above 1 are legal until output)
pub type Color = Double3;

/// Conversion for coefficient setters that take either one value for all
/// channels or a per-channel triple.
pub trait IntoDouble3 {
    fn into_double3(self) -> Double3;
}

impl IntoDouble3 for f64 {
    fn into_double3(self) -> Double3 {
        Double3::splat(self)
    }
}

impl IntoDouble3 for Double3 {
    fn into_double3(self) -> Double3 {
        self
    }
}

/// Surface response to light.
///
/// - `kd`: diffuse reflection
/// - `ks`: specular (Phong) reflection
/// - `kr`: mirror reflection feeding the reflected ray
/// - `kt`: transmission feeding the refracted ray and shadow transparency
///
/// All coefficients default to zero. Values are built once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kd: Double3,
    pub ks: Double3,
    pub kr: Double3,
    pub kt: Double3,
    pub shininess: u32,
}

impl Material {
    /// A black, opaque, non-reflective material.
    pub const fn new() -> Self {
        Self {
            kd: Double3::ZERO,
            ks: Double3::ZERO,
            kr: Double3::ZERO,
            kt: Double3::ZERO,
            shininess: 0,
        }
    }

    pub fn with_kd(mut self, kd: impl IntoDouble3) -> Self {
        self.kd = kd.into_double3();
        self
    }

    pub fn with_ks(mut self, ks: impl IntoDouble3) -> Self {
        self.ks = ks.into_double3();
        self
    }

    pub fn with_kr(mut self, kr: impl IntoDouble3) -> Self {
        self.kr = kr.into_double3();
        self
    }

    pub fn with_kt(mut self, kt: impl IntoDouble3) -> Self {
        self.kt = kt.into_double3();
        self
    }

    pub fn with_shininess(mut self, shininess: u32) -> Self {
        self.shininess = shininess;
        self
    }

    /// True if the material lets any light through.
    pub fn is_transparent(&self) -> bool {
        self.kt.max_element() > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}
