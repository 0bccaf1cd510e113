//! Service configuration
//!
//! The bootstrap layer resolves four locations and hands them here: two
//! pre-trained artifacts (vectorizer, classifier) and two optional reference
//! data overrides (stop words, lemma dictionary).

use sentira_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Startup configuration for the classification service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path to the pre-fitted vectorizer artifact
    pub vectorizer_artifact: PathBuf,

    /// Path to the pre-trained classifier artifact
    pub classifier_artifact: PathBuf,

    /// Stop-word list override; built-in English list when absent
    #[serde(default)]
    pub stop_words: Option<PathBuf>,

    /// Lemma dictionary override; built-in English table when absent
    #[serde(default)]
    pub lemma_dict: Option<PathBuf>,
}

impl ServiceConfig {
    /// Build a configuration from the two artifact paths
    pub fn new(
        vectorizer_artifact: impl Into<PathBuf>,
        classifier_artifact: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vectorizer_artifact: vectorizer_artifact.into(),
            classifier_artifact: classifier_artifact.into(),
            stop_words: None,
            lemma_dict: None,
        }
    }

    /// Set the stop-word list override
    pub fn with_stop_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words = Some(path.into());
        self
    }

    /// Set the lemma dictionary override
    pub fn with_lemma_dict(mut self, path: impl Into<PathBuf>) -> Self {
        self.lemma_dict = Some(path.into());
        self
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("invalid service config: {e}")))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }
}
