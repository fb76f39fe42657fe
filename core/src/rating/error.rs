//! Error types for artifact loading and inference

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by artifact stores and inference sessions.
///
/// None of these escape the rating engine's public API; `compute_ratings`
/// logs them and degrades to an empty map so the overlay can hide itself
/// instead of taking the host down.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Absence is ordinary: the engine falls back or degrades on this one
    #[error("no artifact at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read artifact {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load inference session from {path}: {reason}")]
    SessionLoad { path: PathBuf, reason: String },

    #[error("malformed vocabulary {path}: {reason}")]
    MalformedVocabulary { path: PathBuf, reason: String },

    #[error("inference failed: {reason}")]
    Inference { reason: String },

    #[error("inference produced {got} scores for a vocabulary of {expected}")]
    ScoreCountMismatch { expected: usize, got: usize },
}
