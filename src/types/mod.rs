//! Core domain types for veil.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Rgb` / `PixelData` - pixel samples and sequences
//! - `Mode` - image colour model (RGB or grayscale)
//! - `Deficiency` - colour-vision deficiency categories
//! - `Mat3` - 3x3 linear colour transforms

mod deficiency;
mod matrix;
mod pixel;

pub use deficiency::Deficiency;
pub use matrix::Mat3;
pub use pixel::{Mode, PixelData, Rgb};
