//! Sentiment classification on top of candle.
//!
//! Loads a RoBERTa sequence-classification checkpoint from the Hugging Face
//! Hub once and classifies text into the label set declared by the model's
//! `config.json`. The [`SentimentClassifier`] trait is the seam the HTTP
//! server and the CLI depend on.

pub mod classifier;
pub mod device;
pub mod error;
pub mod labels;
pub mod roberta;
pub mod source;
pub mod tokenizer;

pub use classifier::{Prediction, SentimentClassifier};
pub use device::DeviceSpec;
pub use error::{ModelError, Result};
pub use labels::LabelMap;
pub use roberta::RobertaSentimentModel;
pub use source::{ModelFiles, ModelSource, TokenizerFiles, DEFAULT_MODEL_ID, DEFAULT_REVISION};
