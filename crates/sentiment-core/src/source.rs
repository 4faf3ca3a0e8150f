//! Hugging Face Hub model location and file download.

use std::path::PathBuf;

use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};

use crate::error::Result;

/// Twitter-trained RoBERTa with `negative` / `neutral` / `positive` labels.
pub const DEFAULT_MODEL_ID: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";
pub const DEFAULT_REVISION: &str = "main";

/// A model repository on the Hub, pinned to a revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    pub repo_id: String,
    pub revision: String,
}

/// Local paths of the files needed to build a classifier.
#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: TokenizerFiles,
    pub weights: PathBuf,
}

/// Tokenizer artifacts: a serialized fast tokenizer, or the slow byte-level
/// BPE vocabulary older RoBERTa repos ship instead.
#[derive(Debug, Clone)]
pub enum TokenizerFiles {
    Json(PathBuf),
    Bpe { vocab: PathBuf, merges: PathBuf },
}

impl Default for ModelSource {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_ID)
    }
}

impl ModelSource {
    pub fn new(repo_id: &str) -> Self {
        Self {
            repo_id: repo_id.to_string(),
            revision: DEFAULT_REVISION.to_string(),
        }
    }

    pub fn with_revision(mut self, revision: &str) -> Self {
        self.revision = revision.to_string();
        self
    }

    /// Downloads (or resolves from the local Hub cache) config, tokenizer and
    /// weights. Prefers `tokenizer.json` and `model.safetensors`, falling back
    /// to `vocab.json` + `merges.txt` and the PyTorch pickle for repos that
    /// never published the newer formats.
    pub fn fetch(&self) -> Result<ModelFiles> {
        let api = Api::new()?;
        let repo = api.repo(Repo::with_revision(
            self.repo_id.clone(),
            RepoType::Model,
            self.revision.clone(),
        ));

        tracing::info!(repo = %self.repo_id, revision = %self.revision, "resolving model files");

        let config = repo.get("config.json")?;
        let tokenizer = match repo.get("tokenizer.json") {
            Ok(path) => TokenizerFiles::Json(path),
            Err(e) => {
                tracing::debug!(error = %e, "no tokenizer.json, using vocab.json and merges.txt");
                TokenizerFiles::Bpe {
                    vocab: repo.get("vocab.json")?,
                    merges: repo.get("merges.txt")?,
                }
            }
        };
        let weights = repo
            .get("model.safetensors")
            .or_else(|_| repo.get("pytorch_model.bin"))?;

        tracing::debug!(weights = %weights.display(), "model weights resolved");

        Ok(ModelFiles {
            config,
            tokenizer,
            weights,
        })
    }
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.repo_id, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_cardiff_main() {
        let source = ModelSource::default();
        assert_eq!(source.repo_id, DEFAULT_MODEL_ID);
        assert_eq!(source.revision, "main");
        assert_eq!(
            source.to_string(),
            "cardiffnlp/twitter-roberta-base-sentiment-latest@main"
        );
    }

    #[test]
    fn revision_can_be_pinned() {
        let source = ModelSource::new("org/model").with_revision("abc123");
        assert_eq!(source.to_string(), "org/model@abc123");
    }
}
