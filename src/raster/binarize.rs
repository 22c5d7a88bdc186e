//! # Binarization
//!
//! This module reduces a grayscale image to the 1-bit-per-dot bitmap the
//! printer's raster command carries.
//!
//! ## What is Binarization?
//!
//! A thermal head either burns a dot or it doesn't. Every pixel of the
//! normalized image has to collapse to that single decision:
//!
//! ```text
//! Luminance:    0 ──────── cut ──────── 255
//!               ███ ink ███ │ ░░ blank ░░
//! ```
//!
//! ## Policies
//!
//! Which cut to apply is content-dependent (a hard mid-gray cut keeps text
//! and line art crisp but posterizes photographs), so the policy is chosen
//! by the caller, never by this module:
//!
//! | Policy | Cut | Best for |
//! |--------|-----|----------|
//! | `Passthrough` | device default (128) | text, line art, pre-dithered input |
//! | `Threshold(T)` | explicit `T` | photographic content, tuned per deployment |
//!
//! `Passthrough` defers the bit-depth decision to the same mid-gray cut the
//! printer firmware applies to multi-level data; since the raster command
//! carries exactly one bit per dot, that is the closest a host-side encoder
//! can get to "forward the samples unmodified".
//!
//! ## Bit Packing
//!
//! Rows are packed MSB-first, top-to-bottom, padded with blank bits to a
//! byte boundary:
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use std::fmt;
use std::str::FromStr;

use image::DynamicImage;

use super::MonoRaster;

/// Luminance cut applied by the printer firmware when it reduces
/// multi-level data itself. `Passthrough` mirrors it host-side.
pub const DEVICE_DEFAULT_CUT: u8 = 128;

/// # Binarization Policy
///
/// Decides how an 8-bit luminance sample becomes one ink bit. Selected by
/// the caller per job; the rasterizer itself has no preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binarization {
    /// Apply the device firmware's own mid-gray cut ([`DEVICE_DEFAULT_CUT`]).
    Passthrough,

    /// Ink every dot whose luminance falls below the given cut-point.
    Threshold(u8),
}

impl Binarization {
    /// The effective luminance cut-point for this policy.
    fn cut(&self) -> u8 {
        match self {
            Self::Passthrough => DEVICE_DEFAULT_CUT,
            Self::Threshold(t) => *t,
        }
    }

    /// Whether a dot with the given luminance gets ink.
    ///
    /// Luminance 0 = black = ink; 255 = white = blank.
    #[inline]
    pub fn ink(&self, luma: u8) -> bool {
        luma < self.cut()
    }
}

impl Default for Binarization {
    fn default() -> Self {
        Self::Passthrough
    }
}

impl FromStr for Binarization {
    type Err = String;

    /// Parse a policy string.
    ///
    /// Accepted forms:
    /// - `"passthrough"` → [`Binarization::Passthrough`]
    /// - `"threshold"` → [`Binarization::Threshold`] at the device default cut
    /// - `"threshold:N"` → [`Binarization::Threshold`] at cut `N` (0-255)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passthrough" => Ok(Self::Passthrough),
            "threshold" => Ok(Self::Threshold(DEVICE_DEFAULT_CUT)),
            other if other.starts_with("threshold:") => {
                let cut = &other["threshold:".len()..];
                cut.parse::<u8>()
                    .map(Self::Threshold)
                    .map_err(|_| format!("Invalid threshold cut-point: {}", cut))
            }
            _ => Err(format!(
                "Unknown binarization '{}'. Use 'passthrough', 'threshold' or 'threshold:N'",
                s
            )),
        }
    }
}

impl fmt::Display for Binarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough => write!(f, "passthrough"),
            Self::Threshold(t) => write!(f, "threshold:{}", t),
        }
    }
}

/// Convert a normalized image into a packed 1-bit raster.
///
/// Samples luminance per pixel, applies the policy's cut, and packs each
/// row MSB-first with blank padding up to the byte boundary. Deterministic
/// given input and policy; no side effects.
pub fn rasterize(img: &DynamicImage, policy: Binarization) -> MonoRaster {
    let gray = img.to_luma8();
    let width = gray.width();
    let height = gray.height();
    let width_bytes = width.div_ceil(8) as usize;

    let mut data = Vec::with_capacity(width_bytes * height as usize);
    let mut row = Vec::with_capacity(width as usize);

    for y in 0..height {
        row.clear();
        for x in 0..width {
            row.push(policy.ink(gray.get_pixel(x, y)[0]));
        }
        data.extend(pack_row(&row));
    }

    MonoRaster::new(width, height, data)
}

/// Pack a row of ink decisions into bytes.
///
/// ## Bit Packing
///
/// - Bit 7 (MSB) = leftmost dot
/// - Bit 0 (LSB) = rightmost dot
/// - 1 = ink (print dot), 0 = blank (no dot)
///
/// ## Padding
///
/// If the row length is not a multiple of 8, the last byte is padded
/// with zeros (blank) on the right.
///
/// ## Example
///
/// ```
/// use tinta::raster::binarize::pack_row;
///
/// // 8 dots pack into 1 byte
/// let row = vec![true, true, true, true, false, false, false, false];
/// assert_eq!(pack_row(&row), vec![0xF0]); // 11110000
///
/// // 12 dots pack into 2 bytes (4 bits padding)
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]); // 11111111 11110000
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            let byte_idx = i / 8;
            let bit_idx = 7 - (i % 8); // MSB first
            bytes[byte_idx] |= 1 << bit_idx;
        }
    }

    bytes
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, GrayImage};

    fn gray_image(width: u32, height: u32, luma: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([luma])))
    }

    #[test]
    fn test_passthrough_matches_device_cut() {
        let p = Binarization::Passthrough;
        assert!(p.ink(0));
        assert!(p.ink(127));
        assert!(!p.ink(128));
        assert!(!p.ink(255));
    }

    #[test]
    fn test_threshold_cut_is_exclusive() {
        let t = Binarization::Threshold(64);
        assert!(t.ink(63));
        assert!(!t.ink(64));
    }

    #[test]
    fn test_threshold_zero_never_inks() {
        let t = Binarization::Threshold(0);
        assert!(!t.ink(0));
        assert!(!t.ink(255));
    }

    #[test]
    fn test_parse_policies() {
        assert_eq!(
            "passthrough".parse::<Binarization>().unwrap(),
            Binarization::Passthrough
        );
        assert_eq!(
            "threshold".parse::<Binarization>().unwrap(),
            Binarization::Threshold(128)
        );
        assert_eq!(
            "threshold:96".parse::<Binarization>().unwrap(),
            Binarization::Threshold(96)
        );
        assert_eq!(
            "THRESHOLD:200".parse::<Binarization>().unwrap(),
            Binarization::Threshold(200)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("bayer".parse::<Binarization>().is_err());
        assert!("threshold:300".parse::<Binarization>().is_err());
        assert!("threshold:".parse::<Binarization>().is_err());
        assert!("".parse::<Binarization>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [Binarization::Passthrough, Binarization::Threshold(42)] {
            let shown = policy.to_string();
            assert_eq!(shown.parse::<Binarization>().unwrap(), policy);
        }
    }

    #[test]
    fn test_pack_row_8_pixels() {
        // All ink
        assert_eq!(pack_row(&[true; 8]), vec![0xFF]);
        // All blank
        assert_eq!(pack_row(&[false; 8]), vec![0x00]);
        // Alternating
        assert_eq!(
            pack_row(&[true, false, true, false, true, false, true, false]),
            vec![0xAA]
        );
    }

    #[test]
    fn test_pack_row_padding() {
        // 4 dots pad to 1 byte
        assert_eq!(pack_row(&[true, true, true, true]), vec![0xF0]);

        // 9 dots pad to 2 bytes
        let nine = vec![true; 9];
        let packed = pack_row(&nine);
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0], 0xFF);
        assert_eq!(packed[1], 0x80); // 10000000
    }

    #[test]
    fn test_pack_row_empty() {
        assert_eq!(pack_row(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_rasterize_white_is_all_blank() {
        let img = gray_image(576, 10, 255);
        let raster = rasterize(&img, Binarization::Threshold(128));
        assert_eq!(raster.width_bytes(), 72);
        assert_eq!(raster.height(), 10);
        assert!(raster.data().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_rasterize_black_is_all_ink() {
        let img = gray_image(16, 2, 0);
        let raster = rasterize(&img, Binarization::Passthrough);
        assert_eq!(raster.data(), &[0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_rasterize_pads_partial_byte_with_blanks() {
        // 12 black dots per row: 0xFF 0xF0, never 0xFF 0xFF
        let img = gray_image(12, 1, 0);
        let raster = rasterize(&img, Binarization::Passthrough);
        assert_eq!(raster.data(), &[0xFF, 0xF0]);
    }

    #[test]
    fn test_rasterize_one_by_one() {
        let img = gray_image(1, 1, 0);
        let raster = rasterize(&img, Binarization::Passthrough);
        assert_eq!(raster.width_dots(), 1);
        assert_eq!(raster.width_bytes(), 1);
        assert_eq!(raster.height(), 1);
        assert_eq!(raster.data(), &[0x80]); // single ink dot, MSB
    }

    #[test]
    fn test_rasterize_row_orientation() {
        // Top row black, bottom row white: first byte inked, second blank.
        let mut img = GrayImage::from_pixel(8, 2, Luma([255]));
        for x in 0..8 {
            img.put_pixel(x, 0, Luma([0]));
        }
        let raster = rasterize(&DynamicImage::ImageLuma8(img), Binarization::Passthrough);
        assert_eq!(raster.data(), &[0xFF, 0x00]);
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let img = gray_image(100, 7, 90);
        let a = rasterize(&img, Binarization::Threshold(100));
        let b = rasterize(&img, Binarization::Threshold(100));
        assert_eq!(a, b);
    }
}
