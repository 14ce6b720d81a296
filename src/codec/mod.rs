//! Image file decode/encode.
//!
//! Boundary between pixel transforms and the filesystem. Decoding normalizes
//! any supported file into a [`PixelData`](crate::types::PixelData) sequence
//! plus an [`ImageInfo`] descriptor; encoding materializes a sequence back
//! into an image file.

mod decode;
mod encode;

pub use decode::{decode, ImageInfo};
pub use encode::{encode, encode_filtered};
