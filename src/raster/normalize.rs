//! # Image Normalization
//!
//! Decodes an encoded image and constrains it to the printer's dot width.
//!
//! ## Format Detection
//!
//! The format is detected from the byte content (magic bytes), never from a
//! declared content type. PNG and JPEG are the formats receipts are posted
//! in; everything else the `image` crate recognizes comes along for free.
//!
//! ## Resizing Policy
//!
//! - Wider than the printer: downscale to exactly the printer width with a
//!   Lanczos3 filter, height scaled to preserve the aspect ratio within
//!   one-pixel rounding.
//! - At or under the printer width: returned unchanged. Never upscaled.

use image::{DynamicImage, imageops::FilterType};

use crate::error::TintaError;

/// Decode `raw` and fit it to `max_width` dots.
///
/// Pure function of its input: no side effects, deterministic output.
///
/// ## Errors
///
/// Returns [`TintaError::Decode`] when the bytes do not parse as a
/// supported image format.
pub fn normalize(raw: &[u8], max_width: u32) -> Result<DynamicImage, TintaError> {
    let img = image::load_from_memory(raw)
        .map_err(|e| TintaError::Decode(format!("unsupported or corrupt image: {}", e)))?;

    if img.width() <= max_width {
        return Ok(img);
    }

    let aspect_ratio = img.height() as f32 / img.width() as f32;
    let target_height = ((max_width as f32 * aspect_ratio).round() as u32).max(1);

    // resize_exact: the width must land on max_width exactly, not on
    // whatever the fit-rounding of `resize` picks.
    Ok(img.resize_exact(max_width, target_height, FilterType::Lanczos3))
}

// ============================================================================
// TESTS
// ============================================================================
