//! # HTTP Front End
//!
//! One endpoint: POST an encoded image, get it printed.
//!
//! ## Usage
//!
//! ```bash
//! tinta serve --listen 0.0.0.0:8090 --queue M200
//! curl --data-binary @photo.png http://localhost:8090/print
//! ```
//!
//! Each request runs its own normalize → rasterize → encode → dispatch
//! pipeline with no shared mutable state; serialization of concurrent jobs
//! onto the physical printer is the spooler's job. A client disconnecting
//! mid-print does not cancel the job; it completes or fails on its own.

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::TintaError;

/// Request body cap: big enough for any sanely-sized photo upload.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use tinta::raster::Binarization;
/// use tinta::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), tinta::error::TintaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8090".to_string(),
///     spooler: "lp".to_string(),
///     queue: "M200".to_string(),
///     binarization: Binarization::Passthrough,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), TintaError> {
    let app_state = Arc::new(AppState::new(config.clone()));

    let app = Router::new()
        .route(
            "/print",
            post(handlers::print::print).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    println!("Tinta HTTP print gateway starting...");
    println!("Listening on: {}", config.listen_addr);
    println!(
        "Printer queue: {} (via '{}')",
        config.queue, config.spooler
    );
    println!("Binarization: {}", config.binarization);
    println!();
    println!(
        "POST an image to http://{}/print to print it",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            TintaError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TintaError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
