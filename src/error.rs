//! Error type for rendering and bitmap I/O

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    IoError(std::io::Error),
    ImageError(image::ImageError),
    /// Zero-sized canvas, or one too large for the 32-bit BMP header fields
    InvalidDimensions { width: usize, height: usize },
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::IoError(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::ImageError(e)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::IoError(e) => write!(f, "IO error: {}", e),
            RenderError::ImageError(e) => write!(f, "Image error: {}", e),
            RenderError::InvalidDimensions { width, height } => {
                write!(f, "Invalid image dimensions: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::IoError(e) => Some(e),
            RenderError::ImageError(e) => Some(e),
            RenderError::InvalidDimensions { .. } => None,
        }
    }
}
