//! Image encoding.

use std::path::Path;

use crate::error::{Result, VeilError};
use crate::types::PixelData;

/// Encode a pixel sequence to an image file.
///
/// The output format is chosen from the file extension. The sequence length
/// must equal `width * height`.
pub fn encode(pixels: &PixelData, size: (u32, u32), path: &Path) -> Result<()> {
    let (width, height) = size;
    check_size(pixels.len(), size)?;

    match pixels {
        PixelData::Rgb(px) => {
            let raw: Vec<u8> = px.iter().flat_map(|p| p.channels()).collect();
            let buf = image::RgbImage::from_raw(width, height, raw).ok_or_else(|| {
                VeilError::Shape {
                    message: "RGB buffer did not match image dimensions".to_string(),
                    help: None,
                }
            })?;
            save(buf, path)
        }
        PixelData::Luma(px) => {
            let buf = image::GrayImage::from_raw(width, height, px.clone()).ok_or_else(|| {
                VeilError::Shape {
                    message: "Grayscale buffer did not match image dimensions".to_string(),
                    help: None,
                }
            })?;
            save(buf, path)
        }
    }
}

/// Encode filtered pixels, which carry unclamped i32 channels.
///
/// Each channel is narrowed to its low byte, matching the wrapping behavior
/// of the reference encoder for out-of-range values.
pub fn encode_filtered(pixels: &[[i32; 3]], size: (u32, u32), path: &Path) -> Result<()> {
    let (width, height) = size;
    check_size(pixels.len(), size)?;

    let raw: Vec<u8> = pixels
        .iter()
        .flat_map(|p| p.map(|c| c as u8))
        .collect();
    let buf = image::RgbImage::from_raw(width, height, raw).ok_or_else(|| VeilError::Shape {
        message: "RGB buffer did not match image dimensions".to_string(),
        help: None,
    })?;
    save(buf, path)
}

fn check_size(len: usize, (width, height): (u32, u32)) -> Result<()> {
    let expected = width as usize * height as usize;
    if len != expected {
        return Err(VeilError::Shape {
            message: format!(
                "Pixel count {} does not match {}x{} image",
                len, width, height
            ),
            help: Some("The size tuple must satisfy width * height == pixel count".to_string()),
        });
    }
    Ok(())
}

fn save<P>(buf: image::ImageBuffer<P, Vec<u8>>, path: &Path) -> Result<()>
where
    P: image::Pixel<Subpixel = u8> + image::PixelWithColorType,
{
    buf.save(path).map_err(|e| VeilError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_encode_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let pixels = PixelData::Rgb(vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        encode(&pixels, (2, 1), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);
        assert_eq!(img.get_pixel(1, 0).0, [4, 5, 6]);
    }

    #[test]
    fn test_encode_luma() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        encode(&PixelData::Luma(vec![0, 255]), (1, 2), &path).unwrap();

        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(0, 1).0, [255]);
    }

    #[test]
    fn test_encode_size_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let pixels = PixelData::Rgb(vec![Rgb::default(); 3]);
        let err = encode(&pixels, (2, 2), &path);
        assert!(err.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_encode_filtered_wraps_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        // 256 wraps to 0, -1 wraps to 255
        encode_filtered(&[[256, -1, 300]], (1, 1), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 44]);
    }
}
