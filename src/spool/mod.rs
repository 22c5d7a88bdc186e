//! # Print Job Dispatch
//!
//! This module hands an encoded command stream to the OS print spooler.
//!
//! ## Hand-off Protocol
//!
//! The spooler is an external command (`lp` by default) that takes a file
//! of raw printer bytes and a queue identifier:
//!
//! ```text
//! lp -d M200 -o raw /tmp/print_XXXXXX.bin
//! ```
//!
//! The `-o raw` flag tells CUPS to pass the bytes to the device untouched,
//! with no filtering or re-rendering. The spooler owns serialization of
//! concurrent jobs to the physical device; this module does not queue.
//!
//! ## Temp File Lifecycle
//!
//! The byte buffer is staged through a [`NamedTempFile`] that is removed on
//! every exit path: write failure, launch failure, non-zero exit, or
//! success. The file is flushed and synced before the spooler is invoked so
//! the subprocess never reads a partial job.
//!
//! ## Failure Model
//!
//! A failed print attempt surfaces as [`TintaError::Dispatch`] and is never
//! retried here; the caller decides whether to report or retry. The
//! subprocess wait is unbounded, matching the spooler's own behavior of
//! returning as soon as the job is queued.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use crate::error::TintaError;

/// Default spooler command
pub const DEFAULT_SPOOLER: &str = "lp";

/// # Print Spooler Handle
///
/// Knows which spooler command to run and which queue to address. Owns no
/// other state; each [`dispatch`](Spooler::dispatch) call is independent.
///
/// ## Example
///
/// ```no_run
/// use tinta::spool::Spooler;
///
/// let spooler = Spooler::new("lp", "M200");
/// spooler.dispatch(&[0x1B, 0x40, 0x0A])?;
/// # Ok::<(), tinta::error::TintaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Spooler {
    program: String,
    queue: String,
}

impl Spooler {
    /// Create a handle for the given spooler command and queue identifier.
    pub fn new(program: impl Into<String>, queue: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            queue: queue.into(),
        }
    }

    /// The target queue identifier.
    pub fn queue(&self) -> &str {
        &self.queue
    }

    /// Write `payload` to a scoped temp file and hand it to the spooler.
    ///
    /// Subprocess stdout/stderr are forwarded to this process's own streams
    /// for operator visibility. Blocks until the spooler exits.
    ///
    /// ## Errors
    ///
    /// Returns [`TintaError::Dispatch`] when the temp file cannot be
    /// created or written, the subprocess cannot be started, or the
    /// subprocess exits non-zero. The temp file is removed in all cases.
    pub fn dispatch(&self, payload: &[u8]) -> Result<(), TintaError> {
        let file = write_job_file(payload)?;

        tracing::info!(
            bytes = payload.len(),
            queue = %self.queue,
            path = %file.path().display(),
            "dispatching print job"
        );

        let status = Command::new(&self.program)
            .arg("-d")
            .arg(&self.queue)
            .arg("-o")
            .arg("raw")
            .arg(file.path())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                TintaError::Dispatch(format!(
                    "failed to launch spooler '{}': {}",
                    self.program, e
                ))
            })?;

        if !status.success() {
            return Err(TintaError::Dispatch(format!(
                "spooler '{}' exited with {}",
                self.program, status
            )));
        }

        Ok(())
        // `file` drops here (and on every error path above), removing it
    }
}

/// Stage the payload in a unique temp file, flushed and synced to storage.
fn write_job_file(payload: &[u8]) -> Result<NamedTempFile, TintaError> {
    let mut file = tempfile::Builder::new()
        .prefix("print_")
        .suffix(".bin")
        .tempfile()
        .map_err(|e| TintaError::Dispatch(format!("failed to create temp file: {}", e)))?;

    file.write_all(payload)
        .map_err(|e| TintaError::Dispatch(format!("failed to write job file: {}", e)))?;
    file.as_file()
        .sync_all()
        .map_err(|e| TintaError::Dispatch(format!("failed to sync job file: {}", e)))?;

    Ok(file)
}

// ============================================================================
// TESTS
// ============================================================================
