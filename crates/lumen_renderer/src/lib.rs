//! Lumen Renderer - recursive CPU ray tracing.
//!
//! Casts one primary ray per pixel through a pinhole [`Camera`], resolves
//! the nearest hit in a [`lumen_core::Scene`] and shades it with Phong local
//! lighting, soft shadows from disc-sampled lights, and reflection and
//! refraction rays. Recursion stops at a maximum depth or once the carried
//! energy drops below a threshold, whichever comes first.
//!
//! Pixels are independent, so [`render`] splits the image into buckets and
//! traces them in parallel with rayon. Every pixel owns a seeded RNG, which
//! keeps output reproducible regardless of scheduling.

mod bucket;
mod camera;
mod config;
mod error;
mod renderer;
mod shadow;
mod sink;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraBuilder};
pub use config::{RenderConfig, TracerConfig};
pub use error::{CameraError, ConfigError, RenderError};
pub use renderer::{pixel_seed, print_grid, render, render_pixel};
pub use sink::{color_to_rgba, ImageBuffer, PixelSink};
pub use tracer::{construct_reflected_ray, construct_refracted_ray, RayTracer, SimpleRayTracer};

/// Re-export the color type shared with lumen_core
pub use lumen_core::Color;
