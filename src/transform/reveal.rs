//! Hidden-image extraction from low-order pixel bits.

use crate::types::{PixelData, Rgb};

/// Rescale step for a 2-bit value: {0,1,2,3} -> {0,85,170,255}.
const TWO_BIT_STEP: u8 = 255 / 3;

/// Extract the steganographic bit planes from a pixel sequence and rescale
/// them to full visible range.
///
/// RGB sequences use the two least-significant bits of each channel; grayscale
/// sequences use the single least-significant bit of each intensity. The
/// output keeps the input's variant, length, and order.
pub fn reveal(pixels: &PixelData) -> PixelData {
    match pixels {
        PixelData::Rgb(px) => PixelData::Rgb(
            px.iter()
                .map(|p| {
                    Rgb::new(
                        (p.r % 4) * TWO_BIT_STEP,
                        (p.g % 4) * TWO_BIT_STEP,
                        (p.b % 4) * TWO_BIT_STEP,
                    )
                })
                .collect(),
        ),
        PixelData::Luma(px) => PixelData::Luma(px.iter().map(|p| (p % 2) * 255).collect()),
    }
}
