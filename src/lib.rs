// SPDX-License-Identifier: MIT OR Apache-2.0

//! bankbot - Semantic support-reply suggester library
//!
//! Shared modules for the bankbot CLI tool.

pub mod config;
pub mod corpus;
pub mod embedding;
pub mod errors;
pub mod output;
pub mod ranker;
pub mod session;
