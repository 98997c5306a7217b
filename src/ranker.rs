// SPDX-License-Identifier: MIT OR Apache-2.0

//! Similarity ranker - scores a query against the embedded corpus.
//!
//! Cosine-scores every corpus utterance against the query embedding, keeps
//! candidates at or above the threshold, and returns the top-k with each
//! score normalized to a percentage share of the kept total.

use serde::{Deserialize, Serialize};

use crate::corpus::{Category, EmbeddedCorpus};
use crate::embedding::EmbeddingProvider;
use crate::errors::RankError;

/// Configuration for the similarity ranker
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Minimum cosine similarity (inclusive) for a candidate to qualify
    pub threshold: f32,
    /// Maximum number of responses to return
    pub top_k: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            top_k: 3,
        }
    }
}

impl RankerConfig {
    /// Create a config with the given threshold and the default top-k
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Set the maximum number of responses
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// A candidate response with its normalized confidence share
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResponse {
    /// The corpus utterance text
    pub text: String,
    /// Intent category of the utterance
    pub category: Category,
    /// Raw cosine similarity (-1.0 to 1.0)
    pub score: f32,
    /// Share of total similarity among the returned set (0-100)
    pub percent: f32,
}

/// Similarity ranker over a precomputed corpus
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    /// Create a new ranker with the given configuration
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration (threshold 0.5, top-k 3)
    pub fn with_defaults() -> Self {
        Self::new(RankerConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank the corpus against a query.
    ///
    /// Embeds the query, keeps candidates with cosine score >= threshold,
    /// sorts descending (stable, so equal scores keep corpus order), takes
    /// the top-k, and assigns each a percentage of the kept score total.
    /// Returns an empty vector when nothing qualifies.
    pub fn rank(
        &self,
        query: &str,
        provider: &mut dyn EmbeddingProvider,
        corpus: &EmbeddedCorpus,
    ) -> Result<Vec<RankedResponse>, RankError> {
        if corpus.is_empty() {
            return Ok(Vec::new());
        }

        let query_vector = provider.embed_one(query)?;
        if query_vector.len() != corpus.dimension() {
            return Err(RankError::DimensionMismatch {
                query: query_vector.len(),
                corpus: corpus.dimension(),
            });
        }

        // Filter while scoring; stable sort keeps corpus order on ties.
        let mut kept: Vec<(&str, Category, f32)> = corpus
            .entries()
            .map(|(utterance, vector)| {
                (
                    utterance.text.as_str(),
                    utterance.category,
                    Self::cosine_similarity(&query_vector, vector),
                )
            })
            .filter(|(_, _, score)| *score >= self.config.threshold)
            .collect();

        kept.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
        kept.truncate(self.config.top_k);

        if kept.is_empty() {
            return Ok(Vec::new());
        }

        let total: f32 = kept.iter().map(|(_, _, score)| score).sum();
        let kept_len = kept.len();
        let responses = kept
            .into_iter()
            .map(|(text, category, score)| {
                // Positive thresholds guarantee total > 0; a zero or negative
                // threshold can drive the total to zero, so split evenly then.
                let percent = if total > f32::EPSILON {
                    score / total * 100.0
                } else {
                    100.0 / kept_len as f32
                };
                RankedResponse {
                    text: text.to_string(),
                    category,
                    score,
                    percent,
                }
            })
            .collect();

        Ok(responses)
    }

    /// Swallowing boundary: missing provider or corpus and any ranking
    /// failure all collapse to an empty result. Callers treat empty as
    /// "no answer", indistinguishable from "no match above threshold".
    pub fn rank_or_empty(
        &self,
        query: &str,
        provider: Option<&mut (dyn EmbeddingProvider + 'static)>,
        corpus: Option<&EmbeddedCorpus>,
    ) -> Vec<RankedResponse> {
        let (Some(provider), Some(corpus)) = (provider, corpus) else {
            tracing::debug!("ranking skipped: provider or corpus unavailable");
            return Vec::new();
        };

        match self.rank(query, provider, corpus) {
            Ok(responses) => responses,
            Err(err) => {
                tracing::warn!(error = %err, "ranking failed; returning no responses");
                Vec::new()
            }
        }
    }

    /// Compute cosine similarity between two vectors.
    /// Defined as 0 for mismatched lengths or zero-norm inputs.
    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return 0.0;
        }

        dot_product / (magnitude_a * magnitude_b)
    }
}
