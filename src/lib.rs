//! # Tinta - Thermal Receipt Printer Image Gateway
//!
//! Tinta is a Rust library and HTTP gateway that turns arbitrary raster
//! images into ESC/POS byte streams and hands them to the OS print spooler.
//! It provides:
//!
//! - **Normalization**: decode PNG/JPEG and constrain to the printer width
//! - **Rasterization**: 1-bit binarization with pluggable policies
//! - **Protocol implementation**: ESC/POS command builders and job framing
//! - **Dispatch**: temp-file hand-off to an `lp`-style spooler
//!
//! ## Quick Start
//!
//! ```no_run
//! use tinta::{
//!     printer::PrinterConfig,
//!     protocol,
//!     raster::{self, Binarization},
//!     spool::Spooler,
//! };
//!
//! let config = PrinterConfig::M200;
//!
//! // Decode and fit to the printer's dot width
//! let raw = std::fs::read("photo.jpg")?;
//! let img = raster::normalize(&raw, config.width_dots as u32)?;
//!
//! // Reduce to one bit per dot
//! let mono = raster::rasterize(&img, Binarization::Passthrough);
//!
//! // Frame inside the device protocol
//! let job = protocol::encode_job(&mono)?;
//!
//! // Hand off to the spooler
//! let spooler = Spooler::new("lp", "M200");
//! spooler.dispatch(&job)?;
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`raster`] | Image normalization and binarization |
//! | [`protocol`] | ESC/POS command builders |
//! | [`spool`] | Print spooler dispatch |
//! | [`server`] | HTTP front end |
//! | [`printer`] | Printer configurations |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with:
//! - Epson M200 class (80mm paper, 203 DPI, 576-dot raster, CUPS queue)
//!
//! Other printers speaking the ESC/POS `GS v 0` raster command should work
//! with appropriate configuration adjustments.

pub mod error;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod server;
pub mod spool;

// Re-exports for convenience
pub use error::TintaError;
pub use printer::PrinterConfig;
pub use spool::Spooler;
