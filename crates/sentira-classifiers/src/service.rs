//! Classification service orchestration
//!
//! The sole entry point external callers use: normalize the raw text,
//! vectorize the token sequence, predict a label. The service is built once
//! at startup from its loaded dependencies and is safe to share across
//! concurrent callers; every per-request value is call-local and the loaded
//! artifacts are read-only.

use crate::classifier::Classifier;
use crate::config::ServiceConfig;
use crate::model::SentimentModel;
use crate::normalize::Normalizer;
use crate::reference::ReferenceData;
use crate::vectorizer::Vectorizer;
use async_trait::async_trait;
use sentira_core::{Classification, Error, Result};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Normalize → vectorize → predict, over artifacts loaded once at startup
#[derive(Debug)]
pub struct ClassificationService {
    name: String,
    normalizer: Normalizer,
    vectorizer: Vectorizer,
    model: SentimentModel,
}

impl ClassificationService {
    /// Load reference data and both artifacts, then run the shape self-check.
    ///
    /// Any failure here is fatal: the service never becomes ready and the
    /// operator restarts the process after fixing the deployment.
    pub fn load(config: &ServiceConfig) -> Result<Self> {
        let reference = ReferenceData::from_sources(
            config.stop_words.as_deref(),
            config.lemma_dict.as_deref(),
        )?;
        let normalizer = Normalizer::new(reference)?;
        let vectorizer = Vectorizer::load(&config.vectorizer_artifact)?;
        let model = SentimentModel::load(&config.classifier_artifact)?;

        Self::from_parts(normalizer, vectorizer, model)
    }

    /// Assemble a service from already-loaded parts, running the self-check
    pub fn from_parts(
        normalizer: Normalizer,
        vectorizer: Vectorizer,
        model: SentimentModel,
    ) -> Result<Self> {
        if vectorizer.dimension() != model.n_features() {
            return Err(Error::ShapeMismatch {
                expected: model.n_features(),
                actual: vectorizer.dimension(),
            });
        }

        info!(
            dimension = vectorizer.dimension(),
            labels = ?model.labels(),
            "classification service ready"
        );

        Ok(Self {
            name: "sentiment".to_string(),
            normalizer,
            vectorizer,
            model,
        })
    }

    /// Classify one message on the caller's execution context.
    ///
    /// Pure with respect to the loaded artifacts: the same input always
    /// yields the same result. The awaits between stages are cancellation
    /// points for callers running under a timeout.
    pub async fn classify(&self, raw: &str) -> Result<Classification> {
        let start = Instant::now();

        let tokens = self.normalizer.normalize(raw);
        tokio::task::yield_now().await;

        let features = self.vectorizer.transform(&tokens);
        tokio::task::yield_now().await;

        let prediction = self.model.predict(&features)?;

        debug!(
            label = %prediction.label,
            score = prediction.score,
            tokens = tokens.len(),
            "classified message"
        );

        Ok(Classification {
            label: prediction.label,
            score: prediction.score,
            tokens,
            all_scores: prediction.all_scores,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    /// Classify with a latency budget; expiry maps to `Error::Timeout`
    pub async fn classify_with_timeout(
        &self,
        raw: &str,
        budget: Duration,
    ) -> Result<Classification> {
        tokio::time::timeout(budget, self.classify(raw))
            .await
            .map_err(|_| Error::Timeout)?
    }

    /// Fixed feature width shared by the vectorizer and classifier
    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    /// Label set the loaded classifier can produce
    pub fn labels(&self) -> &[String] {
        self.model.labels()
    }
}

#[async_trait]
impl Classifier for ClassificationService {
    async fn classify(&self, text: &str) -> Result<Classification> {
        ClassificationService::classify(self, text).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Shared ready-state cell for the two-phase service lifecycle.
///
/// Empty while the service is uninitialized; holds the service once loading
/// succeeds. Calls before readiness fail fast with `Error::NotReady` rather
/// than blocking, and the caller retries after startup completes. A load
/// failure leaves the slot empty permanently; restart is the operator's
/// retry.
#[derive(Default)]
pub struct ServiceSlot {
    inner: OnceLock<Arc<ClassificationService>>,
}

impl ServiceSlot {
    /// Create an empty (uninitialized) slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to ready. Errors if the slot was already initialized.
    pub fn set(&self, service: ClassificationService) -> Result<()> {
        self.inner
            .set(Arc::new(service))
            .map_err(|_| Error::config("classification service already initialized"))
    }

    /// Get the ready service, or fail fast with `NotReady`
    pub fn get(&self) -> Result<Arc<ClassificationService>> {
        self.inner.get().cloned().ok_or(Error::NotReady)
    }

    /// Whether the service has reached the ready state
    pub fn is_ready(&self) -> bool {
        self.inner.get().is_some()
    }
}
