//! Image decoding.

use std::path::Path;

use image::GenericImageView;

use crate::error::{Result, VeilError};
use crate::types::{Mode, PixelData, Rgb};

/// Dimensions and colour model of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
}

impl ImageInfo {
    /// (width, height) tuple.
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total pixel count.
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Decode an image file into a row-major pixel sequence.
///
/// Grayscale files (with or without alpha) decode to [`PixelData::Luma`];
/// everything else is normalized to 8-bit RGB. Alpha channels are dropped.
pub fn decode(path: &Path) -> Result<(PixelData, ImageInfo)> {
    let img = image::open(path).map_err(|e| VeilError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to decode image: {}", e),
    })?;

    let (width, height) = img.dimensions();

    let (pixels, mode) = if img.color().has_color() {
        let buf = img.to_rgb8();
        let pixels = buf
            .pixels()
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        (PixelData::Rgb(pixels), Mode::Rgb)
    } else {
        (PixelData::Luma(img.to_luma8().into_raw()), Mode::Luma)
    };

    Ok((pixels, ImageInfo { width, height, mode }))
}
