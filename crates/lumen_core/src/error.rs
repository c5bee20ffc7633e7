use lumen_math::MathError;
use thiserror::Error;

/// Errors raised while constructing geometry.
///
/// Degenerate input is rejected here so intersection code never has to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("vector math error: {0}")]
    Math(#[from] MathError),

    #[error("vertices are collinear or coincident")]
    CollinearVertices,

    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon vertices do not lie in one plane")]
    NonPlanarVertices,

    #[error("polygon is not convex")]
    NonConvexPolygon,

    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while configuring a light source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightError {
    #[error("attenuation factors must be non-negative and not all zero (kc={kc}, kl={kl}, kq={kq})")]
    InvalidAttenuation { kc: f64, kl: f64, kq: f64 },

    #[error("light radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
}
