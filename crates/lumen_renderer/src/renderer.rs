//! Image loop: one primary ray per pixel, buckets in parallel.

use std::time::Instant;

use lumen_core::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::{Camera, PixelSink, RayTracer, RenderConfig};

/// Seed of the random generator owned by pixel (`x`, `y`).
pub fn pixel_seed(seed: u64, x: u32, y: u32) -> u64 {
    seed ^ ((u64::from(y) << 32) | u64::from(x))
}

/// Trace the primary ray of pixel (`x`, `y`) of a `width` by `height`
/// image.
pub fn render_pixel(
    camera: &Camera,
    tracer: &dyn RayTracer,
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    seed: u64,
) -> Color {
    let mut rng = StdRng::seed_from_u64(pixel_seed(seed, x, y));
    let ray = camera.construct_ray(width, height, x, y);
    tracer.trace_ray(&ray, &mut rng)
}

/// Render every pixel of `sink`.
///
/// The sink's size sets the pixel grid. Pixels are written once each; call
/// [`PixelSink::finalize`] afterwards to flush the result.
pub fn render(
    camera: &Camera,
    tracer: &dyn RayTracer,
    sink: &mut dyn PixelSink,
    config: &RenderConfig,
) {
    let (width, height) = (sink.width(), sink.height());
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::info!(
        "Rendering {}x{} in {} buckets ({})",
        width,
        height,
        buckets.len(),
        if config.parallel { "parallel" } else { "serial" }
    );
    let start = Instant::now();

    let trace = |bucket: &crate::Bucket| {
        let pixels = render_bucket(bucket, camera, tracer, width, height, config.seed);
        BucketResult::new(*bucket, pixels)
    };
    let results: Vec<BucketResult> = if config.parallel {
        buckets.par_iter().map(trace).collect()
    } else {
        buckets.iter().map(trace).collect()
    };

    for result in &results {
        for (x, y, color) in result.iter() {
            sink.write_pixel(x, y, color);
        }
    }

    log::info!("Rendered {} pixels in {:.2?}", u64::from(width) * u64::from(height), start.elapsed());
}

/// Overwrite every `interval`-th row and column of `sink` with `color`.
///
/// An `interval` of zero leaves the sink untouched.
pub fn print_grid(sink: &mut dyn PixelSink, interval: u32, color: Color) {
    if interval == 0 {
        log::warn!("Grid interval of zero ignored");
        return;
    }
    for y in 0..sink.height() {
        for x in 0..sink.width() {
            if x % interval == 0 || y % interval == 0 {
                sink.write_pixel(x, y, color);
            }
        }
    }
}
