use std::path::PathBuf;
use thiserror::Error;

/// A language classification that could not be produced for a single record.
///
/// Non-fatal: the normalizer drops the affected record and keeps going.
#[derive(Debug, Error)]
#[error("cannot classify text: {reason}")]
pub struct ClassificationError {
    pub reason: String,
}

impl ClassificationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A polarity score that could not be produced for a single record.
///
/// Non-fatal: the scorer records a missing polarity and keeps going.
#[derive(Debug, Error)]
#[error("cannot score text: {reason}")]
pub struct ScoringError {
    pub reason: String,
}

impl ScoringError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors raised at the pipeline boundaries.
///
/// `Io` and `Format` are fatal and abort the run; the per-record variants are
/// caught inside the normalizer and scorer.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected document shape: {0}")]
    Format(String),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
