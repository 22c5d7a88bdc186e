//! # Printer Configuration
//!
//! This module defines hardware specifications for supported thermal printers.
//!
//! ## Supported Printers
//!
//! | Model | Width (dots) | Resolution | Queue |
//! |-------|--------------|------------|-------|
//! | Epson M200 | 576 | 203 DPI | `M200` |
//!
//! ## Usage
//!
//! ```
//! use tinta::printer::PrinterConfig;
//!
//! let config = PrinterConfig::M200;
//! println!("Print width: {} dots ({} bytes)",
//!          config.width_dots,
//!          config.width_bytes);
//! ```

/// # Printer Configuration
///
/// Defines the hardware characteristics of a thermal printer.
///
/// ## Physical Properties
///
/// - **width_dots**: Maximum printable width in dots (pixels)
/// - **width_bytes**: Width in bytes (width_dots / 8)
/// - **dpi**: Resolution in dots per inch
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_mm = width_dots / dots_per_mm
///
/// For the M200:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   width_mm = 576 / 8 = 72mm
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Maximum print width in dots (pixels)
    pub width_dots: u16,

    /// Print width in bytes (width_dots / 8)
    pub width_bytes: u16,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Default spooler queue identifier
    pub queue: &'static str,
}

impl PrinterConfig {
    /// # Epson M200 Configuration
    ///
    /// 80mm paper width thermal receipt printer on a CUPS queue.
    ///
    /// ## Specifications
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 80mm |
    /// | Print width | 72mm (576 dots) |
    /// | Resolution | 203 DPI |
    /// | Interface | USB via CUPS raw queue |
    ///
    /// ## Print Area
    ///
    /// ```text
    /// ├── 4mm ──┼────── 72mm printable ──────┼── 4mm ──┤
    /// │ margin  │         576 dots           │ margin  │
    /// ```
    pub const M200: Self = Self {
        name: "Epson M200",
        width_dots: 576,
        width_bytes: 72,
        dpi: 203,
        queue: "M200",
    };
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::M200
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_m200_dimensions() {
        let config = PrinterConfig::M200;
        assert_eq!(config.width_dots, 576);
        assert_eq!(config.width_bytes, 72);
        assert_eq!(config.width_dots, config.width_bytes * 8);
    }

    #[test]
    fn test_default_is_m200() {
        let default = PrinterConfig::default();
        assert_eq!(default.name, PrinterConfig::M200.name);
        assert_eq!(default.queue, "M200");
    }
}
