//! tri-raster: renders one triangle to an uncompressed BMP
//!
//! ```no_run
//! use tri_raster::rasterizer::{create_test_image, RenderSettings};
//!
//! let path = create_test_image(&RenderSettings::default()).unwrap();
//! println!("wrote {}", path.display());
//! ```

pub mod config;
pub mod error;
pub mod rasterizer;

pub use error::RenderError;
