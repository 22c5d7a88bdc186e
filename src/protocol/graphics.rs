//! # ESC/POS Raster Graphics
//!
//! This module implements the raster bit-image command for Epson-compatible
//! thermal printers.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (horizontal, 576 dots max on the M200)
//!   │
//!   │   ████████  ← Each dot is ~0.125mm (203 DPI)
//!   │   ████████
//!   ▼
//!   Y (vertical, paper feed direction)
//! ```
//!
//! ## Bit Packing
//!
//! Graphics data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! ## M200 Specifications
//!
//! | Property | Value |
//! |----------|-------|
//! | Max print width | 576 dots (72 bytes) |
//! | Resolution | 203 DPI (~8 dots/mm) |

use super::commands::{GS, u16_le};

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// Transmits a monochrome bitmap of arbitrary height and prints it as the
/// paper feeds. The header embeds the byte-width and row-count so the
/// device knows how many packed bytes follow.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
/// | Decimal | 29 118 48 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Mode (0 = normal density)
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in **dots**, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height bytes
///
/// ## Width and Height Encoding
///
/// ```text
/// width_bytes = xL + (xH × 256)
/// height_dots = yL + (yH × 256)
///
/// Example: 72 bytes wide = [0x48, 0x00] (72 = 0x0048)
/// Example: 400 rows high = [0x90, 0x01] (400 = 0x0190)
/// ```
///
/// ## Data Layout
///
/// Row-by-row, no inter-row separators; each byte is 8 horizontal dots:
///
/// ```text
/// Row 0:    d[0]      d[1]       ... d[width-1]
/// Row 1:    d[width]  d[width+1] ... d[2*width-1]
/// ...
/// Row h-1:  d[(h-1)*width]       ... d[h*width-1]
/// ```
///
/// ## Example
///
/// ```
/// use tinta::protocol::graphics;
///
/// // A 576-dot wide (72 bytes), 100-row tall image
/// let data = vec![0xAA; 72 * 100];
/// let cmd = graphics::raster_image(72, 100, &data);
///
/// // Header: GS v 0 0 72 0 100 0
/// assert_eq!(&cmd[0..4], &[0x1D, 0x76, 0x30, 0x00]);
/// assert_eq!(cmd[4], 72);  // xL
/// assert_eq!(cmd[5], 0);   // xH
/// assert_eq!(cmd[6], 100); // yL
/// assert_eq!(cmd[7], 0);   // yH
/// ```
pub fn raster_image(width_bytes: u16, height: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        width_bytes as usize * height as usize,
        width_bytes,
        height,
        data.len()
    );

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.push(GS);
    cmd.push(b'v');
    cmd.push(b'0');
    cmd.push(0); // m = 0 (normal density)
    cmd.push(xl);
    cmd.push(xh);
    cmd.push(yl);
    cmd.push(yh);
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_header() {
        let data = vec![0xFF; 72 * 100];
        let cmd = raster_image(72, 100, &data);

        assert_eq!(cmd[0], 0x1D); // GS
        assert_eq!(cmd[1], 0x76); // 'v'
        assert_eq!(cmd[2], 0x30); // '0'
        assert_eq!(cmd[3], 0); // m = normal density
        assert_eq!(cmd[4], 72); // xL
        assert_eq!(cmd[5], 0); // xH
        assert_eq!(cmd[6], 100); // yL
        assert_eq!(cmd[7], 0); // yH
    }

    #[test]
    fn test_raster_large_height() {
        // Height > 255 to verify little-endian encoding
        let height: u16 = 400;
        let data = vec![0x00; 72 * height as usize];
        let cmd = raster_image(72, height, &data);

        // 400 = 0x0190 -> [0x90, 0x01] in little-endian
        assert_eq!(cmd[6], 0x90); // yL
        assert_eq!(cmd[7], 0x01); // yH
    }

    #[test]
    fn test_raster_wide_width() {
        // Width bytes > 255 to verify little-endian encoding
        let width_bytes: u16 = 300;
        let data = vec![0x00; 300 * 2];
        let cmd = raster_image(width_bytes, 2, &data);

        // 300 = 0x012C -> [0x2C, 0x01]
        assert_eq!(cmd[4], 0x2C); // xL
        assert_eq!(cmd[5], 0x01); // xH
    }

    #[test]
    fn test_raster_total_length() {
        let data = vec![0x00; 72 * 100];
        let cmd = raster_image(72, 100, &data);

        // 8 header bytes + data
        assert_eq!(cmd.len(), 8 + 72 * 100);
    }

    #[test]
    fn test_raster_preserves_data() {
        let data: Vec<u8> = (0..72 * 50).map(|i| (i % 256) as u8).collect();
        let cmd = raster_image(72, 50, &data);

        // Data should be preserved after the 8-byte header
        assert_eq!(&cmd[8..], &data[..]);
    }

    #[test]
    fn test_raster_single_dot() {
        let cmd = raster_image(1, 1, &[0x80]);
        assert_eq!(cmd, vec![0x1D, 0x76, 0x30, 0x00, 1, 0, 1, 0, 0x80]);
    }
}
