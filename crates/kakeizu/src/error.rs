//! Error types for chart generation.

use std::io;

use thiserror::Error;

/// The main error type for chart generation.
///
/// The input parser is total and has no error representation here; a
/// failed render is either a violated precondition (missing font), a
/// canvas/output failure propagated from the backend, or plain I/O.
/// There is no partial-success mode: a render either produces a complete
/// document or nothing.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("font family `{family}` is not registered")]
    Font { family: String },

    #[error("canvas error: {0}")]
    Canvas(Box<dyn std::error::Error + Send + Sync>),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ChartError {
    /// Wraps a backend error at the canvas seam.
    pub fn canvas(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Canvas(Box::new(err))
    }
}
