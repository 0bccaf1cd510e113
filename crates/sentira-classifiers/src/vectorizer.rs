//! Vectorizer adapter
//!
//! Loads a pre-fitted term-frequency artifact and maps a token sequence to a
//! fixed-width feature vector. The artifact is produced by the external
//! training pipeline: a JSON document with a `vocabulary` mapping of term to
//! column index and an optional `idf` weight per column (absent means raw
//! counts).

use sentira_core::{Error, FeatureVector, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    vocabulary: HashMap<String, usize>,
    #[serde(default)]
    idf: Option<Vec<f32>>,
}

/// A loaded, immutable vectorizer artifact
#[derive(Debug)]
pub struct Vectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f32>>,
    dimension: usize,
}

impl Vectorizer {
    /// Load and validate a vectorizer artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::artifact_load(format!(
                "failed to read vectorizer artifact {}: {e}",
                path.display()
            ))
        })?;
        let artifact: VectorizerArtifact = serde_json::from_str(&raw).map_err(|e| {
            Error::artifact_load(format!(
                "failed to parse vectorizer artifact {}: {e}",
                path.display()
            ))
        })?;

        let vectorizer = Self::from_artifact(artifact)?;
        info!(
            path = %path.display(),
            dimension = vectorizer.dimension,
            weighted = vectorizer.idf.is_some(),
            "loaded vectorizer artifact"
        );
        Ok(vectorizer)
    }

    fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        let dimension = artifact.vocabulary.len();
        if dimension == 0 {
            return Err(Error::artifact_load("vectorizer vocabulary is empty"));
        }

        // Column indices must be a dense 0..dimension range
        let mut seen = vec![false; dimension];
        for (term, &column) in &artifact.vocabulary {
            if column >= dimension {
                return Err(Error::artifact_load(format!(
                    "vocabulary term {term:?} maps to column {column}, outside 0..{dimension}"
                )));
            }
            if seen[column] {
                return Err(Error::artifact_load(format!(
                    "vocabulary column {column} is assigned to more than one term"
                )));
            }
            seen[column] = true;
        }

        if let Some(idf) = &artifact.idf {
            if idf.len() != dimension {
                return Err(Error::artifact_load(format!(
                    "idf length {} does not match vocabulary size {dimension}",
                    idf.len()
                )));
            }
        }

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            dimension,
        })
    }

    /// Fixed width of every produced feature vector
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Map a token sequence to its feature vector.
    ///
    /// The tokens are joined into one space-separated document string first;
    /// the underlying transform consumes a single document, not a token list.
    /// An empty sequence yields the all-zero vector, never an error.
    pub fn transform(&self, tokens: &[String]) -> FeatureVector {
        let document = tokens.join(" ");
        self.transform_document(&document)
    }

    fn transform_document(&self, document: &str) -> FeatureVector {
        let mut features = vec![0.0f32; self.dimension];
        for term in document.split_whitespace() {
            if let Some(&column) = self.vocabulary.get(term) {
                features[column] += 1.0;
            }
        }
        if let Some(idf) = &self.idf {
            for (value, weight) in features.iter_mut().zip(idf) {
                *value *= weight;
            }
        }
        features
    }
}
