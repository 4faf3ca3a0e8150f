//! Application state holding the shared classifier.
//!
//! The classifier is read-only after load, so it sits behind a plain `Arc`
//! with no lock. Every handler clones the `Arc` and classifies concurrently.

use std::sync::Arc;

use sentiment_core::{ModelError, RobertaSentimentModel, SentimentClassifier};

use crate::config::ServerConfig;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide sentiment model.
    pub classifier: Arc<dyn SentimentClassifier>,
}

impl AppState {
    /// Wraps an already constructed classifier.
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Self {
        AppState { classifier }
    }

    /// Downloads and loads the configured model.
    ///
    /// Hub access and weight loading block, so this runs on the blocking pool.
    pub async fn load(config: &ServerConfig) -> Result<Self, ModelError> {
        let source = config.model.clone();
        let device = config.device;
        let model = tokio::task::spawn_blocking(move || {
            RobertaSentimentModel::load(&source, device)
        })
        .await
        .map_err(|e| ModelError::Inference(format!("model load task failed: {}", e)))??;

        Ok(AppState::new(Arc::new(model)))
    }
}
