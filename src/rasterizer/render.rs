//! Core rendering functions
//! Half-plane triangle fill into a float color buffer

use std::path::PathBuf;
use log::{debug, info};
use rayon::prelude::*;

use super::bmp::{bmp_sizes, save_bmp};
use super::math::{Vec2, Vec3};
use super::types::{RenderSettings, Triangle};
use crate::error::RenderError;

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<Vec3>, // RGB in 0.0-1.0, row-major
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    /// New buffer, every pixel black
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Vec3::ZERO; width * height],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Vec3) {
        self.pixels.fill(color);
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Vec3) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Vec3 {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Vec3::ZERO
        }
    }

    /// Row slice; panics when `y >= height`
    pub(crate) fn row(&self, y: usize) -> &[Vec3] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn count_color(&self, color: Vec3) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

/// Fill one row; the sample point of pixel x is its corner (x, y)
fn rasterize_row(row: &mut [Vec3], y: usize, triangle: &Triangle, color: Vec3) -> usize {
    let mut written = 0;
    for (x, pixel) in row.iter_mut().enumerate() {
        let p = Vec2::new(x as f32, y as f32);
        if triangle.contains(p) {
            *pixel = color;
            written += 1;
        }
    }
    written
}

/// Rasterize a single triangle, returning the number of pixels written
pub fn rasterize_triangle(fb: &mut Framebuffer, triangle: &Triangle, color: Vec3) -> usize {
    if fb.width == 0 {
        return 0;
    }
    fb.pixels
        .chunks_mut(fb.width)
        .enumerate()
        .map(|(y, row)| rasterize_row(row, y, triangle, color))
        .sum()
}

/// Same as `rasterize_triangle` with rows split across rayon workers.
/// Each pixel is owned by exactly one row chunk, so the result is identical.
pub fn rasterize_triangle_parallel(fb: &mut Framebuffer, triangle: &Triangle, color: Vec3) -> usize {
    if fb.width == 0 {
        return 0;
    }
    fb.pixels
        .par_chunks_mut(fb.width)
        .enumerate()
        .map(|(y, row)| rasterize_row(row, y, triangle, color))
        .sum()
}

/// Render the configured triangle into a fresh framebuffer
pub fn render(settings: &RenderSettings) -> Result<Framebuffer, RenderError> {
    // Reject anything the bitmap header cannot describe before allocating
    bmp_sizes(settings.width, settings.height)?;

    let triangle = settings.triangle();
    debug!(
        "Rendering {}x{} triangle {} {} {} ({})",
        settings.width,
        settings.height,
        triangle.a,
        triangle.b,
        triangle.c,
        if settings.parallel { "parallel" } else { "sequential" },
    );

    let mut fb = Framebuffer::new(settings.width, settings.height);
    let written = if settings.parallel {
        rasterize_triangle_parallel(&mut fb, &triangle, settings.fill)
    } else {
        rasterize_triangle(&mut fb, &triangle, settings.fill)
    };

    info!("Covered {} of {} pixels", written, settings.width * settings.height);
    Ok(fb)
}

/// Render the configured triangle and write it out as a bitmap
pub fn create_test_image(settings: &RenderSettings) -> Result<PathBuf, RenderError> {
    let fb = render(settings)?;
    save_bmp(&fb, &settings.output_name, settings.row_order)
}
