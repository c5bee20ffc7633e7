use lumen_math::MathError;
use thiserror::Error;

/// Errors raised by [`crate::CameraBuilder::build`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("camera is missing {0}")]
    MissingField(&'static str),

    #[error("camera direction vectors are not orthogonal")]
    NotOrthogonal,

    #[error("camera {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("vector math error: {0}")]
    Math(#[from] MathError),
}

/// Errors raised by [`crate::TracerConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_level must be at least 1")]
    ZeroMaxLevel,

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidFactor { field: &'static str, value: f64 },

    #[error("grid_cells must be between 1 and {max}, got {value}")]
    GridCells { value: usize, max: usize },
}

/// Errors raised while writing render output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("pixel buffer of {len} bytes does not match a {width}x{height} image")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
