//! # ESC/POS Control Commands
//!
//! This module implements the ESC/POS commands used to bracket a raster
//! print job on Epson-compatible thermal receipt printers.
//!
//! ## Protocol Overview
//!
//! ESC/POS commands are byte sequences starting with escape characters:
//!
//! - Single byte: `LF`, `HT`, `CR`
//! - Two bytes: `ESC @`, `ESC S`, `ESC T`
//! - Multi-byte with parameters: `GS v 0 m xL xH yL yH data...`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Reference
//!
//! Based on the "ESC/POS Application Programming Guide"
//! by Seiko Epson Corp.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefixes graphics, barcode, and cutter commands:
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount (default ~4mm).
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. This is emitted at the
/// start of each print job so one job's state never leaks into the next.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Text formatting (bold, underline, invert) disabled
/// - Character size reset to 1x1
/// - Line spacing reset to default
///
/// ## Example
///
/// ```
/// use tinta::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// MODE SELECTION COMMANDS
// ============================================================================

/// # Select Standard Mode (ESC S)
///
/// Switches the printer to standard (line-by-line) mode, leaving page mode
/// if it was active. In standard mode, data is printed and the paper fed as
/// each line completes. This is the mode the raster-image command expects.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC S |
/// | Hex     | 1B 53 |
/// | Decimal | 27 83 |
#[inline]
pub fn standard_mode() -> Vec<u8> {
    vec![ESC, b'S']
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Line Feed (LF)
///
/// Prints the line buffer and advances the paper one line. Used to separate
/// the raster image from whatever precedes it and to push the printed image
/// clear of the head afterwards.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | LF    |
/// | Hex     | 0A    |
/// | Decimal | 10    |
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use tinta::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]); // 576 = 0x0240
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_standard_mode() {
        assert_eq!(standard_mode(), vec![0x1B, 0x53]);
    }

    #[test]
    fn test_line_feed() {
        assert_eq!(line_feed(), vec![0x0A]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
        assert_eq!(u16_le(576), [0x40, 0x02]); // Common width: 576 dots
    }
}
