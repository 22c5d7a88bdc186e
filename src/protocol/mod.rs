//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! spoken by Epson-compatible thermal receipt printers, and the job encoder
//! that frames a raster inside it.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control commands (init, mode select, line feed)
//! - [`graphics`]: The raster bit-image command
//!
//! ## Command Stream
//!
//! A print job is a fixed command sequence; no step is skipped, reordered,
//! or repeated:
//!
//! ```text
//! ESC @        initialize printer
//! ESC S        select standard mode
//! LF           separation before the image
//! GS v 0 ...   raster image (header + packed bytes)
//! LF           advance paper past the image
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use tinta::protocol::{commands, graphics};
//!
//! // Build a print sequence by hand
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(commands::standard_mode());
//! data.extend(commands::line_feed());
//! data.extend(graphics::raster_image(72, 24, &vec![0xAA; 72 * 24]));
//! data.extend(commands::line_feed());
//!
//! // Or let the job encoder do it (with dimension validation):
//! use tinta::raster::MonoRaster;
//! let raster = MonoRaster::new(576, 24, vec![0xAA; 72 * 24]);
//! let job = tinta::protocol::encode_job(&raster)?;
//! # Ok::<(), tinta::error::TintaError>(())
//! ```

pub mod commands;
pub mod graphics;

use crate::error::TintaError;
use crate::raster::MonoRaster;

/// Frame a raster inside the device command protocol.
///
/// Produces the literal byte sequence to send to the printer: init, mode
/// select, a separating line feed, the raster-image frame, and a trailing
/// line feed. Output depends only on the raster; encoding the same raster
/// twice yields byte-identical streams.
///
/// ## Errors
///
/// Returns [`TintaError::Encoding`] when the raster's byte-width or
/// row-count exceeds the 16-bit fields of the raster-image header. Nothing
/// is silently truncated.
pub fn encode_job(raster: &MonoRaster) -> Result<Vec<u8>, TintaError> {
    let width_bytes = u16::try_from(raster.width_bytes()).map_err(|_| {
        TintaError::Encoding(format!(
            "raster width {} bytes exceeds the protocol's addressable 65535",
            raster.width_bytes()
        ))
    })?;
    let height = u16::try_from(raster.height()).map_err(|_| {
        TintaError::Encoding(format!(
            "raster height {} rows exceeds the protocol's addressable 65535",
            raster.height()
        ))
    })?;

    let mut job = Vec::with_capacity(16 + raster.data().len());
    job.extend(commands::init());
    job.extend(commands::standard_mode());
    job.extend(commands::line_feed());
    job.extend(graphics::raster_image(width_bytes, height, raster.data()));
    job.extend(commands::line_feed());
    Ok(job)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_job_command_order() {
        let raster = MonoRaster::new(16, 2, vec![0xAB; 4]);
        let job = encode_job(&raster).unwrap();

        let mut expected = vec![
            0x1B, 0x40, // ESC @
            0x1B, 0x53, // ESC S
            0x0A, // LF
            0x1D, 0x76, 0x30, 0x00, // GS v 0, m=0
            2, 0, // xL xH (2 bytes wide)
            2, 0, // yL yH (2 rows)
        ];
        expected.extend([0xAB; 4]);
        expected.push(0x0A); // trailing LF

        assert_eq!(job, expected);
    }

    #[test]
    fn test_encode_job_blank_raster_round_trip() {
        // All-zero raster: the header still recovers the exact dimensions.
        let raster = MonoRaster::new(576, 300, vec![0x00; 72 * 300]);
        let job = encode_job(&raster).unwrap();

        // Header starts after ESC @, ESC S, LF (5 bytes)
        let header = &job[5..13];
        assert_eq!(&header[0..4], &[0x1D, 0x76, 0x30, 0x00]);
        let width_bytes = header[4] as u16 | (header[5] as u16) << 8;
        let height = header[6] as u16 | (header[7] as u16) << 8;
        assert_eq!(width_bytes, 72);
        assert_eq!(height, 300);
        assert!(job[13..13 + 72 * 300].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_encode_job_is_idempotent() {
        let raster = MonoRaster::new(40, 5, vec![0x55; 25]);
        let a = encode_job(&raster).unwrap();
        let b = encode_job(&raster).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_job_rejects_oversized_height() {
        let raster = MonoRaster::new(8, 70_000, vec![0x00; 70_000]);
        let result = encode_job(&raster);
        assert!(matches!(result, Err(TintaError::Encoding(_))));
    }

    #[test]
    fn test_encode_job_total_length() {
        let raster = MonoRaster::new(576, 10, vec![0x00; 720]);
        let job = encode_job(&raster).unwrap();
        // 2 (init) + 2 (mode) + 1 (LF) + 8 (raster header) + 720 + 1 (LF)
        assert_eq!(job.len(), 2 + 2 + 1 + 8 + 720 + 1);
    }
}
