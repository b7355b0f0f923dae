//! Uncompressed 32-bit BMP output
//!
//! Layout (all little-endian):
//! - 14-byte file header: "BM", file size, reserved, pixel data offset (54)
//! - 40-byte BITMAPINFOHEADER with a positive height
//! - BGRA pixels, 4 bytes each, alpha always 255

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::info;

use super::math::Vec3;
use super::render::Framebuffer;
use super::types::RowOrder;
use crate::error::RenderError;

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
const BYTES_PER_PIXEL: u32 = 4;

/// Quantize a 0.0-1.0 channel to a byte
fn channel_to_byte(c: f32) -> u8 {
    (c * 255.0).round() as u8
}

fn pixel_bytes(col: Vec3) -> [u8; 4] {
    [
        channel_to_byte(col.b()),
        channel_to_byte(col.g()),
        channel_to_byte(col.r()),
        255,
    ]
}

/// Pixel data size and total file size for a `width` x `height` bitmap.
/// Fails when the canvas is empty or does not fit the 32-bit header fields.
pub fn bmp_sizes(width: usize, height: usize) -> Result<(u32, u32), RenderError> {
    let invalid = || RenderError::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    i32::try_from(width).map_err(|_| invalid())?;
    i32::try_from(height).map_err(|_| invalid())?;
    let pixel_data_size = (width as u32)
        .checked_mul(height as u32)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(invalid)?;
    let file_size = pixel_data_size
        .checked_add(PIXEL_DATA_OFFSET)
        .ok_or_else(invalid)?;
    Ok((pixel_data_size, file_size))
}

/// Output file for a base name
pub fn bmp_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.bmp", name))
}

/// Stream the bitmap to any writer
pub fn write_bmp<W: Write>(fb: &Framebuffer, row_order: RowOrder, writer: &mut W) -> Result<(), RenderError> {
    let (pixel_data_size, file_size) = bmp_sizes(fb.width, fb.height)?;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Reserved
    writer.write_all(&PIXEL_DATA_OFFSET.to_le_bytes())?;

    // Info header
    writer.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(fb.width as i32).to_le_bytes())?;
    writer.write_all(&(fb.height as i32).to_le_bytes())?; // positive: bottom-up by convention
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&32u16.to_le_bytes())?; // Bits per pixel
    writer.write_all(&0u32.to_le_bytes())?; // Compression (none)
    writer.write_all(&pixel_data_size.to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors in color table
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    // Pixel data
    for i in 0..fb.height {
        let y = match row_order {
            RowOrder::TopDown => i,
            RowOrder::BottomUp => fb.height - 1 - i,
        };
        for &col in fb.row(y) {
            writer.write_all(&pixel_bytes(col))?;
        }
    }

    Ok(())
}

/// Encode the bitmap into memory
pub fn encode_bmp(fb: &Framebuffer, row_order: RowOrder) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::with_capacity(PIXEL_DATA_OFFSET as usize + fb.pixels.len() * 4);
    write_bmp(fb, row_order, &mut bytes)?;
    Ok(bytes)
}

/// Write `<name>.bmp`, truncating any existing file. The file is flushed
/// before returning and closed on every path, including write errors.
pub fn save_bmp(fb: &Framebuffer, name: &str, row_order: RowOrder) -> Result<PathBuf, RenderError> {
    let path = bmp_path(name);
    let mut writer = BufWriter::new(File::create(&path)?);
    write_bmp(fb, row_order, &mut writer)?;
    writer.flush()?;
    info!("Wrote {}x{} bitmap to {}", fb.width, fb.height, path.display());
    Ok(path)
}

/// Read a bitmap back into a framebuffer. `row_order` must match what the
/// file was written with so rows land where they were rendered.
pub fn read_bmp<P: AsRef<Path>>(path: P, row_order: RowOrder) -> Result<Framebuffer, RenderError> {
    let img = image::open(path.as_ref())?.to_rgb8();
    let (width, height) = img.dimensions();
    let mut fb = Framebuffer::new(width as usize, height as usize);

    for (x, y, p) in img.enumerate_pixels() {
        // The decoder already applies the bottom-up convention; a TopDown
        // file therefore comes back vertically flipped.
        let y = match row_order {
            RowOrder::BottomUp => y,
            RowOrder::TopDown => height - 1 - y,
        };
        let col = Vec3::rgb(
            p[0] as f32 / 255.0,
            p[1] as f32 / 255.0,
            p[2] as f32 / 255.0,
        );
        fb.set_pixel(x as usize, y as usize, col);
    }

    Ok(fb)
}
