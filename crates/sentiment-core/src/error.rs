//! Error types for model loading and inference.
//!
//! Uses `thiserror` for matchable variants. Errors from candle, I/O and
//! serde_json pass through unchanged; Hub and tokenizer errors are flattened
//! to strings because their concrete types are not stable across versions.

use thiserror::Error;

/// Errors produced while loading or running a sentiment model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A file could not be fetched from the Hugging Face Hub.
    #[error("download failed: {0}")]
    Download(String),

    /// The tokenizer could not be loaded or failed on an input.
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// `config.json` is missing fields or has an unusable label map.
    #[error("invalid model config: {0}")]
    Config(String),

    /// The model predicted a class id absent from its label map.
    #[error("predicted label id {id} not in label map (labels: {available})")]
    UnknownLabel { id: usize, available: String },

    /// The requested compute device is malformed or unavailable.
    #[error("device error: {0}")]
    Device(String),

    /// Inference failed for a reason not covered above.
    #[error("inference failed: {0}")]
    Inference(String),

    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;

impl From<hf_hub::api::sync::ApiError> for ModelError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        ModelError::Download(value.to_string())
    }
}
