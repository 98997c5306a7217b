// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the bankbot library seams.

use thiserror::Error;

/// Errors raised while loading or parsing a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised inside the ranking boundary.
///
/// Callers that cannot surface an error convert these to an empty result via
/// [`crate::ranker::Ranker::rank_or_empty`].
#[derive(Debug, Error)]
pub enum RankError {
    #[error("embedding provider failed: {0}")]
    Provider(#[from] anyhow::Error),

    #[error("embedding dimension mismatch: query {query} vs corpus {corpus}")]
    DimensionMismatch { query: usize, corpus: usize },
}
