//! # Image Normalization and Rasterization
//!
//! This module turns arbitrary encoded images into 1-bit rasters the
//! printer's graphics command can carry.
//!
//! ## Pipeline Position
//!
//! ```text
//! encoded bytes ──► normalize ──► DynamicImage ──► rasterize ──► MonoRaster
//!                   (decode,                       (binarize,
//!                    fit width)                     bit-pack)
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: decode and constrain to the printer's dot width
//! - [`binarize`]: luminance → ink bits under a [`Binarization`] policy

pub mod binarize;
pub mod normalize;

pub use binarize::{Binarization, rasterize};
pub use normalize::normalize;

/// # Monochrome Raster
///
/// A packed 1-bit-per-dot bitmap in the layout the printer's raster-image
/// command expects.
///
/// ## Invariants
///
/// - Each row is `width_bytes()` bytes: `ceil(width_dots / 8)`.
/// - Bit 7 (MSB) of each byte is the leftmost dot; bit value 1 = ink.
/// - Rows are stored top-to-bottom, matching the source image orientation.
/// - Trailing bits of the last byte in a row are 0 (blank padding).
/// - `data.len() == width_bytes() * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoRaster {
    width_dots: u32,
    height: u32,
    data: Vec<u8>,
}

impl MonoRaster {
    /// Assemble a raster from packed rows.
    ///
    /// Callers are expected to pack with [`binarize::pack_row`]; the length
    /// invariant is checked in debug builds only.
    pub fn new(width_dots: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width_dots.div_ceil(8) as usize * height as usize,
            "raster data must be width_bytes * height bytes"
        );
        Self {
            width_dots,
            height,
            data,
        }
    }

    /// Width in dots before byte padding.
    pub fn width_dots(&self) -> u32 {
        self.width_dots
    }

    /// Row stride in bytes.
    pub fn width_bytes(&self) -> u32 {
        self.width_dots.div_ceil(8)
    }

    /// Height in rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed bit data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
