//! Software triangle rasterizer
//!
//! - Half-plane inside test, independent of vertex winding
//! - Pixel-corner sampling into a float RGB framebuffer
//! - Optional row-parallel fill on the rayon pool
//! - Uncompressed 32-bit BGRA bitmap output

mod math;
mod types;
mod render;
mod bmp;

pub use math::*;
pub use types::*;
pub use render::*;
pub use bmp::*;

/// Default canvas dimensions
pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 64;
