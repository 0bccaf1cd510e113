//! Sentira Core
//!
//! Core types, traits, and utilities shared across Sentira components.
//!
//! This crate provides:
//! - Common types for token sequences, feature vectors, and classification results
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Classification, FeatureVector, TokenSequence};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Classification, FeatureVector, TokenSequence};
}
