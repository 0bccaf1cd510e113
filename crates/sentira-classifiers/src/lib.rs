//! Sentira Classifiers
//!
//! Short-text normalization and sentiment classification over pre-trained
//! artifacts.
//!
//! The pipeline is a strict left-to-right flow: raw text enters the
//! [`Normalizer`], the token sequence enters the [`Vectorizer`], the feature
//! vector enters the [`SentimentModel`], and the label returns to the caller.
//! [`ClassificationService`] orchestrates the three for one request; it is
//! the only entry point external callers use.
//!
//! Artifacts and reference data are loaded once at startup and shared
//! read-only across concurrent requests.

pub mod classifier;
pub mod config;
pub mod model;
pub mod normalize;
pub mod reference;
pub mod service;
pub mod vectorizer;

pub use classifier::Classifier;
pub use config::ServiceConfig;
pub use model::{Prediction, SentimentModel};
pub use normalize::Normalizer;
pub use reference::ReferenceData;
pub use service::{ClassificationService, ServiceSlot};
pub use vectorizer::Vectorizer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::config::ServiceConfig;
    pub use crate::model::SentimentModel;
    pub use crate::normalize::Normalizer;
    pub use crate::reference::ReferenceData;
    pub use crate::service::{ClassificationService, ServiceSlot};
    pub use crate::vectorizer::Vectorizer;
    pub use sentira_core::{Classification, Error, Result};
}
