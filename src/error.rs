//! # Error Types
//!
//! This module defines error types used throughout the tinta library.

use thiserror::Error;

/// Main error type for tinta operations
#[derive(Debug, Error)]
pub enum TintaError {
    /// Image bytes did not parse as a supported format
    #[error("Decode error: {0}")]
    Decode(String),

    /// Raster exceeds the protocol's addressable dimensions
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Temp-file I/O, spooler launch, or non-zero spooler exit
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// HTTP server errors (bind, accept)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
