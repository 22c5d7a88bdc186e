//! Print API handler.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::{TintaError, protocol, raster, spool::Spooler};

use super::super::state::AppState;

/// POST /print - Decode the request body as an image and print it.
///
/// The body is the raw encoded image (PNG/JPEG, detected from content).
/// Success is 200 with an empty body; failures carry a JSON error object.
pub async fn print(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    let policy = state.config.binarization;
    let max_width = state.printer.width_dots as u32;
    let spooler = Spooler::new(&state.config.spooler, &state.config.queue);

    // The whole pipeline is CPU-bound plus one blocking subprocess wait;
    // move it off the async runtime.
    let print_result = tokio::task::spawn_blocking(move || {
        let img = raster::normalize(&body, max_width)?;
        let mono = raster::rasterize(&img, policy);

        tracing::debug!(
            width = mono.width_dots(),
            height = mono.height(),
            policy = %policy,
            "rasterized request image"
        );

        let job = protocol::encode_job(&mono)?;
        spooler.dispatch(&job)
    })
    .await;

    match print_result {
        Ok(Ok(())) => Ok(StatusCode::OK),
        Ok(Err(e)) => Err((
            status_for(&e),
            Json(serde_json::json!({"success": false, "error": e.to_string()})),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"success": false, "error": format!("Task error: {}", e)})),
        )),
    }
}

/// An undecodable payload is the client's fault; everything downstream of a
/// successful decode is ours.
fn status_for(error: &TintaError) -> StatusCode {
    match error {
        TintaError::Decode(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
