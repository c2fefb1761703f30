//! Failure reporting for the request helper.
//!
//! The helper never writes to the console itself. It hands every failure to a
//! [`DiagnosticSink`], which defaults to [`TracingSink`].

use crate::error::ApiError;

/// Receives one report per failed request, before the error is returned.
pub trait DiagnosticSink: Send + Sync {
    fn request_failed(&self, url: &str, error: &ApiError);
}

/// Emits failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn request_failed(&self, url: &str, error: &ApiError) {
        match error.status() {
            Some(status) => tracing::error!(%url, status, "Error during GET request: {}", error),
            None => tracing::error!(%url, "Error during GET request: {}", error),
        }
    }
}
