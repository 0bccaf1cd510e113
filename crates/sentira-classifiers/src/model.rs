//! Classifier adapter
//!
//! Loads a pre-trained linear sentiment model and maps a feature vector to a
//! predicted label. The artifact is JSON produced by the external training
//! pipeline: one weight row and bias per label, with softmax over the label
//! scores at predict time.

use sentira_core::{Error, Result};
use serde::Deserialize;
use std::cmp::Ordering;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    labels: Vec<String>,
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

/// A loaded, immutable classifier artifact
#[derive(Debug)]
pub struct SentimentModel {
    labels: Vec<String>,
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
    n_features: usize,
}

/// Outcome of a single predict call
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The argmax label
    pub label: String,

    /// Probability of the argmax label (0.0-1.0)
    pub score: f32,

    /// Per-label probabilities, in artifact label order
    pub all_scores: Vec<(String, f32)>,
}

impl SentimentModel {
    /// Load and validate a classifier artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::artifact_load(format!(
                "failed to read classifier artifact {}: {e}",
                path.display()
            ))
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw).map_err(|e| {
            Error::artifact_load(format!(
                "failed to parse classifier artifact {}: {e}",
                path.display()
            ))
        })?;

        let model = Self::from_artifact(artifact)?;
        info!(
            path = %path.display(),
            labels = ?model.labels,
            n_features = model.n_features,
            "loaded classifier artifact"
        );
        Ok(model)
    }

    fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.labels.is_empty() {
            return Err(Error::artifact_load("classifier has no labels"));
        }
        if artifact.weights.len() != artifact.labels.len() {
            return Err(Error::artifact_load(format!(
                "classifier has {} weight rows for {} labels",
                artifact.weights.len(),
                artifact.labels.len()
            )));
        }
        if artifact.bias.len() != artifact.labels.len() {
            return Err(Error::artifact_load(format!(
                "classifier has {} bias terms for {} labels",
                artifact.bias.len(),
                artifact.labels.len()
            )));
        }

        let n_features = artifact.weights[0].len();
        if n_features == 0 {
            return Err(Error::artifact_load("classifier weight rows are empty"));
        }
        for (row, weights) in artifact.weights.iter().enumerate() {
            if weights.len() != n_features {
                return Err(Error::artifact_load(format!(
                    "classifier weight row {row} has width {}, expected {n_features}",
                    weights.len()
                )));
            }
        }

        Ok(Self {
            labels: artifact.labels,
            weights: artifact.weights,
            bias: artifact.bias,
            n_features,
        })
    }

    /// Trained input width every feature vector must match
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Label set, in artifact order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Predict a label for one feature vector.
    ///
    /// A width disagreement is a deployment consistency bug; the startup
    /// self-check makes it unreachable at request time.
    pub fn predict(&self, features: &[f32]) -> Result<Prediction> {
        if features.len() != self.n_features {
            return Err(Error::ShapeMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let logits: Vec<f32> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                row.iter()
                    .zip(features)
                    .map(|(w, x)| w * x)
                    .sum::<f32>()
                    + bias
            })
            .collect();

        let scores = softmax(&logits);
        let (best, score) = scores
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .unwrap_or((0, 0.0));

        Ok(Prediction {
            label: self.labels[best].clone(),
            score,
            all_scores: self
                .labels
                .iter()
                .cloned()
                .zip(scores.iter().copied())
                .collect(),
        })
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact(json: &str) -> Result<SentimentModel> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        SentimentModel::load(file.path())
    }

    fn binary_model() -> SentimentModel {
        artifact(
            r#"{
                "labels": ["negative", "positive"],
                "weights": [[1.0, -1.0], [-1.0, 1.0]],
                "bias": [0.0, 0.0]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn predicts_argmax_label() {
        let model = binary_model();

        let prediction = model.predict(&[0.0, 3.0]).unwrap();
        assert_eq!(prediction.label, "positive");
        assert!(prediction.score > 0.5);

        let prediction = model.predict(&[3.0, 0.0]).unwrap();
        assert_eq!(prediction.label, "negative");
    }

    #[test]
    fn scores_sum_to_one() {
        let model = binary_model();
        let prediction = model.predict(&[1.0, 2.0]).unwrap();
        assert_eq!(prediction.all_scores.len(), 2);
        let total: f32 = prediction.all_scores.iter().map(|(_, s)| s).sum();
        assert!((total - 1.0).abs() < 1e-5, "scores should sum to ~1.0, got {total}");
    }

    #[test]
    fn zero_vector_is_valid() {
        let model = binary_model();
        let prediction = model.predict(&[0.0, 0.0]).unwrap();
        assert!((prediction.score - 0.5).abs() < 1e-5);
    }

    #[test]
    fn width_disagreement_is_shape_mismatch() {
        let model = binary_model();
        let err = model.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn rejects_missing_artifact() {
        let err = SentimentModel::load("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad(_)));
    }

    #[test]
    fn rejects_inconsistent_shapes() {
        // ragged weight rows
        let err = artifact(
            r#"{"labels": ["a", "b"], "weights": [[1.0, 2.0], [1.0]], "bias": [0.0, 0.0]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad(_)));

        // bias length disagrees with label count
        let err = artifact(
            r#"{"labels": ["a", "b"], "weights": [[1.0], [2.0]], "bias": [0.0]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad(_)));

        // no labels at all
        let err = artifact(r#"{"labels": [], "weights": [], "bias": []}"#).unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad(_)));
    }
}
