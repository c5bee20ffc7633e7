//! Pixel sinks: where rendered colors end up.

use std::path::{Path, PathBuf};

use lumen_core::Color;
use lumen_math::Interval;

use crate::RenderError;

/// Destination for rendered pixels.
pub trait PixelSink {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Store the color of pixel (`x`, `y`), origin at the top left.
    fn write_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Flush everything written so far to the final destination.
    fn finalize(&mut self) -> Result<(), RenderError>;
}

/// In-memory image buffer, optionally saved as PNG on finalize.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
    output: Option<PathBuf>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
            output: None,
        }
    }

    /// Save to `path` as PNG when finalized.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let bytes = self.to_rgba();
        let len = bytes.len();
        let image = image::RgbaImage::from_raw(self.width, self.height, bytes).ok_or(
            RenderError::BufferSize {
                width: self.width,
                height: self.height,
                len,
            },
        )?;
        image.save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl PixelSink for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            log::warn!(
                "Pixel ({}, {}) outside {}x{} image, dropped",
                x,
                y,
                self.width,
                self.height
            );
            return;
        }
        self.set(x, y, color);
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        match &self.output {
            Some(path) => self.save_png(path),
            None => Ok(()),
        }
    }
}

/// Convert a linear color to 8-bit RGBA, clamping each channel to [0, 1].
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    const UNIT: Interval = Interval::new(0.0, 1.0);
    let channel = |c: f64| (255.0 * UNIT.clamp(c)).round() as u8;
    [channel(color.x), channel(color.y), channel(color.z), 255]
}
