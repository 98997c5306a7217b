// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedding module - turns utterances into fixed-length vectors
//!
//! Provides the provider trait consumed by the ranker plus the builtin
//! fastembed, external-command, and dummy implementations.

pub mod provider;

pub use provider::{
    build_provider, CommandProvider, DummyProvider, EmbeddingProvider, EmbeddingProviderConfig,
    FastEmbedder, DEFAULT_EMBEDDING_DIM,
};
