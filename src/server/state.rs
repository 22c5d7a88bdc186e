//! Server state and configuration.

use crate::printer::PrinterConfig;
use crate::raster::Binarization;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8090")
    pub listen_addr: String,
    /// Spooler command (e.g., "lp")
    pub spooler: String,
    /// Spooler queue identifier (e.g., "M200")
    pub queue: String,
    /// Binarization policy applied to every job
    pub binarization: Binarization,
}

/// Application state shared across handlers.
///
/// Read-only after startup; all per-request data stays inside the handler.
pub struct AppState {
    pub config: ServerConfig,
    pub printer: PrinterConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            printer: PrinterConfig::default(),
        }
    }
}
