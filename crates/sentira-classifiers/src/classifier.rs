//! Classifier trait and common seam for callers

use async_trait::async_trait;
use sentira_core::{Classification, Result};

/// Trait for text classifiers.
///
/// This is the seam the (external) HTTP layer consumes: it receives a raw
/// message string and returns a label plus rendering-ready metadata.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
