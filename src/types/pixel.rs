//! Pixel and pixel-sequence types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VeilError};

/// One decoded RGB sample, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a pixel from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in R, G, B order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Image colour model: three-channel RGB or single-channel grayscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Rgb,
    Luma,
}

impl Mode {
    /// Canonical mode tag ("RGB" or "L").
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Rgb => "RGB",
            Mode::Luma => "L",
        }
    }

    /// Samples per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Mode::Rgb => 3,
            Mode::Luma => 1,
        }
    }
}

impl FromStr for Mode {
    type Err = VeilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RGB" => Ok(Mode::Rgb),
            "L" => Ok(Mode::Luma),
            other => Err(VeilError::Parse {
                message: format!("Unknown image mode: {}", other),
                help: Some("Use RGB or L".to_string()),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A row-major pixel sequence.
///
/// The variant carries the shape invariant: every element of an RGB sequence
/// is a 3-channel sample, every element of a Luma sequence a single intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelData {
    Rgb(Vec<Rgb>),
    Luma(Vec<u8>),
}

impl PixelData {
    /// The colour model this sequence was decoded with.
    pub fn mode(&self) -> Mode {
        match self {
            PixelData::Rgb(_) => Mode::Rgb,
            PixelData::Luma(_) => Mode::Luma,
        }
    }

    /// Number of pixels (not samples).
    pub fn len(&self) -> usize {
        match self {
            PixelData::Rgb(px) => px.len(),
            PixelData::Luma(px) => px.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow as RGB pixels, failing if the sequence is grayscale.
    pub fn as_rgb(&self) -> Result<&[Rgb]> {
        match self {
            PixelData::Rgb(px) => Ok(px),
            PixelData::Luma(_) => Err(VeilError::Shape {
                message: "Expected RGB pixels, got grayscale".to_string(),
                help: Some("This operation only works on 3-channel images".to_string()),
            }),
        }
    }

    /// Borrow as grayscale intensities, failing if the sequence is RGB.
    pub fn as_luma(&self) -> Result<&[u8]> {
        match self {
            PixelData::Luma(px) => Ok(px),
            PixelData::Rgb(_) => Err(VeilError::Shape {
                message: "Expected grayscale pixels, got RGB".to_string(),
                help: Some("This operation only works on single-channel images".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::Rgb.name(), "RGB");
        assert_eq!(Mode::Luma.name(), "L");
        assert_eq!(Mode::Rgb.channels(), 3);
        assert_eq!(Mode::Luma.channels(), 1);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("RGB".parse::<Mode>().unwrap(), Mode::Rgb);
        assert_eq!("L".parse::<Mode>().unwrap(), Mode::Luma);
        assert!("CMYK".parse::<Mode>().is_err());
        assert!("rgb".parse::<Mode>().is_err());
    }

    #[test]
    fn test_pixel_data_mode_and_len() {
        let rgb = PixelData::Rgb(vec![Rgb::new(1, 2, 3); 4]);
        assert_eq!(rgb.mode(), Mode::Rgb);
        assert_eq!(rgb.len(), 4);

        let luma = PixelData::Luma(vec![7; 9]);
        assert_eq!(luma.mode(), Mode::Luma);
        assert_eq!(luma.len(), 9);
        assert!(!luma.is_empty());
    }

    #[test]
    fn test_shape_mismatch_errors() {
        let luma = PixelData::Luma(vec![0, 1]);
        assert!(luma.as_rgb().is_err());
        assert!(luma.as_luma().is_ok());

        let rgb = PixelData::Rgb(vec![Rgb::default()]);
        assert!(rgb.as_luma().is_err());
        assert!(rgb.as_rgb().is_ok());
    }
}
