use std::io;

use thiserror::Error;

/// Failures of the drawing surface. Allocation failures are fatal to the
/// visualizer and are returned from construction.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("visualizer initialization failed: {0}")]
    Initialization(String),

    #[error("failed to write scene snapshot: {0}")]
    Snapshot(#[from] io::Error),
}

/// Transport-level failures talking to the analysis service.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("analysis service returned HTTP {0}")]
    Status(u16),

    #[error("analysis service returned a body that is not JSON: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("journal text is empty")]
    EmptyText,

    #[error(transparent)]
    Network(#[from] NetworkError),
}
