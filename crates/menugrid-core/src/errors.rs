//! Error types for the Menugrid engine.

use thiserror::Error;

/// Errors at the configuration boundary.
///
/// Layout computation itself is infallible: every arithmetic path clamps to
/// its declared bounds, so the engine never produces an invalid result. The
/// only real failures are malformed configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),
}
