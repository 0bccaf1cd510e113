//! Core types for Sentira

use serde::{Deserialize, Serialize};

/// Ordered sequence of normalized word tokens.
///
/// Order and duplicates are preserved: later vectorization is
/// frequency-based, so repeated tokens matter.
pub type TokenSequence = Vec<String>;

/// Fixed-width numeric feature vector produced by the vectorizer.
///
/// The width and indexing scheme are defined entirely by the loaded
/// vectorizer artifact; consumers treat the contents as opaque.
pub type FeatureVector = Vec<f32>;

/// Result of classifying a single message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Predicted label, from the classifier artifact's label set
    pub label: String,

    /// Probability of the predicted label (0.0-1.0)
    pub score: f32,

    /// The normalized token sequence the model actually saw
    pub tokens: TokenSequence,

    /// Per-label probabilities, in artifact label order
    pub all_scores: Vec<(String, f32)>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl Classification {
    /// Create a new classification result
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
            tokens: Vec::new(),
            all_scores: Vec::new(),
            latency_us: 0,
        }
    }

    /// Check if the predicted label's probability meets a threshold
    pub fn is_confident(&self, threshold: f32) -> bool {
        self.score >= threshold
    }
}
