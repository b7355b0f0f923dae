//! Core types for the rasterizer

use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use super::bmp::bmp_path;
use super::math::{point_in_triangle, Vec2, Vec3};
use super::{HEIGHT, WIDTH};

/// Pure blue, the default fill color
pub const BLUE: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

/// A screen-space triangle (vertices in pixels, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Build a triangle from vertices given as fractions of the image extent
    pub fn from_fractions(width: usize, height: usize, fa: Vec2, fb: Vec2, fc: Vec2) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self {
            a: Vec2::new(fa.x * w, fa.y * h),
            b: Vec2::new(fb.x * w, fb.y * h),
            c: Vec2::new(fc.x * w, fc.y * h),
        }
    }

    /// The reference triangle: (0.2, 0.2), (0.7, 0.4), (0.4, 0.8) of the canvas
    pub fn test_triangle(width: usize, height: usize) -> Self {
        Self::from_fractions(
            width,
            height,
            Vec2::new(0.2, 0.2),
            Vec2::new(0.7, 0.4),
            Vec2::new(0.4, 0.8),
        )
    }

    /// Inclusive containment test, either winding
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_triangle(self.a, self.b, self.c, p)
    }

    pub fn centroid(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }
}

/// Row order of the pixel data in the written bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowOrder {
    /// Rows written top to bottom under a positive header height. Viewers
    /// show the image flipped vertically; kept for byte compatibility.
    #[default]
    TopDown,
    /// Standard bitmap order: last buffer row first
    BottomUp,
}

/// Everything a single render needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    /// Triangle vertices in pixels
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    /// Color written for covered pixels (components in 0.0-1.0)
    pub fill: Vec3,
    /// Output base name; ".bmp" is appended
    pub output_name: String,
    pub row_order: RowOrder,
    /// Split rows across the rayon thread pool
    pub parallel: bool,
}

impl RenderSettings {
    pub fn triangle(&self) -> Triangle {
        Triangle::new(self.a, self.b, self.c)
    }

    pub fn output_path(&self) -> PathBuf {
        bmp_path(&self.output_name)
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        let tri = Triangle::test_triangle(WIDTH, HEIGHT);
        Self {
            width: WIDTH,
            height: HEIGHT,
            a: tri.a,
            b: tri.b,
            c: tri.c,
            fill: BLUE,
            output_name: "art".to_string(),
            row_order: RowOrder::TopDown,
            parallel: false,
        }
    }
}
