//! RoBERTa sequence classification.
//!
//! RoBERTa checkpoints share their weight layout and position-id scheme with
//! XLM-RoBERTa, so candle's `xlm_roberta` implementation runs them directly.

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::xlm_roberta::{Config, XLMRobertaForSequenceClassification};
use tokenizers::Tokenizer;

use crate::classifier::{Prediction, SentimentClassifier};
use crate::device::DeviceSpec;
use crate::error::{ModelError, Result};
use crate::labels::LabelMap;
use crate::source::{ModelFiles, ModelSource};
use crate::tokenizer::load_tokenizer;

/// A loaded RoBERTa sentiment classifier. Immutable after [`load`](Self::load).
pub struct RobertaSentimentModel {
    model: XLMRobertaForSequenceClassification,
    tokenizer: Tokenizer,
    labels: LabelMap,
    device: Device,
}

impl RobertaSentimentModel {
    /// Fetches `source` from the Hub and builds the model on `device`.
    pub fn load(source: &ModelSource, device: DeviceSpec) -> Result<Self> {
        let files = source.fetch()?;
        let model = Self::from_files(&files, device.open()?)?;
        tracing::info!(
            model = %source,
            device = %device,
            labels = ?model.labels.labels(),
            "sentiment model loaded"
        );
        Ok(model)
    }

    /// Builds the model from files already on disk.
    pub fn from_files(files: &ModelFiles, device: Device) -> Result<Self> {
        let config_str = std::fs::read_to_string(&files.config)?;
        let config: Config = serde_json::from_str(&config_str)?;
        let labels = LabelMap::from_config_json(&config_str)?;

        let tokenizer = load_tokenizer(&files.tokenizer, max_sequence_length(&config))?;

        let vb = if files.weights.extension().is_some_and(|e| e == "safetensors") {
            // SAFETY: the Hub cache file is not modified while mapped.
            unsafe {
                VarBuilder::from_mmaped_safetensors(&[&files.weights], DType::F32, &device)?
            }
        } else {
            VarBuilder::from_pth(&files.weights, DType::F32, &device)?
        };

        let model = XLMRobertaForSequenceClassification::new(labels.len(), &config, vb)?;

        Ok(Self {
            model,
            tokenizer,
            labels,
            device,
        })
    }

    fn logits(&self, text: &str) -> Result<Tensor> {
        let encoding = self.tokenizer.encode(text, true).map_err(|e| {
            ModelError::Tokenization(format!(
                "{} (input '{}')",
                e,
                text.chars().take(50).collect::<String>()
            ))
        })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        Ok(self
            .model
            .forward(&input_ids, &attention_mask, &token_type_ids)?)
    }
}

impl SentimentClassifier for RobertaSentimentModel {
    fn classify(&self, text: &str) -> Result<Prediction> {
        let logits = self.logits(text)?.to_dtype(DType::F32)?;
        let probs = softmax(&logits, D::Minus1)?.squeeze(0)?.to_vec1::<f32>()?;
        self.labels.top(&probs)
    }

    fn labels(&self) -> &[String] {
        self.labels.labels()
    }
}

/// RoBERTa offsets position ids by `pad_token_id + 1`, so the usable sequence
/// length is that much shorter than `max_position_embeddings`.
fn max_sequence_length(config: &Config) -> usize {
    config
        .max_position_embeddings
        .saturating_sub(config.pad_token_id as usize + 1)
}
