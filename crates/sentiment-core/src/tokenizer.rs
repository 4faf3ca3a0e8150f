//! Tokenizer construction from either tokenizer format a Hub repo may ship.

use std::path::Path;

use tokenizers::models::bpe::BPE;
use tokenizers::pre_tokenizers::byte_level::ByteLevel;
use tokenizers::processors::roberta::RobertaProcessing;
use tokenizers::{AddedToken, Tokenizer, TruncationParams};

use crate::error::{ModelError, Result};
use crate::source::TokenizerFiles;

const BOS: &str = "<s>";
const EOS: &str = "</s>";
const SPECIAL_TOKENS: [&str; 5] = ["<s>", "<pad>", "</s>", "<unk>", "<mask>"];

/// Loads the tokenizer and caps encodings at `max_length` tokens.
///
/// Overlong input is cut to the model window instead of overflowing the
/// position embeddings.
pub fn load_tokenizer(files: &TokenizerFiles, max_length: usize) -> Result<Tokenizer> {
    let mut tokenizer = match files {
        TokenizerFiles::Json(path) => Tokenizer::from_file(path).map_err(|e| {
            ModelError::Tokenization(format!("cannot load '{}': {}", path.display(), e))
        })?,
        TokenizerFiles::Bpe { vocab, merges } => roberta_bpe(vocab, merges)?,
    };

    tokenizer
        .with_padding(None)
        .with_truncation(Some(TruncationParams {
            max_length,
            ..Default::default()
        }))
        .map_err(|e| ModelError::Tokenization(format!("invalid truncation: {e}")))?;

    Ok(tokenizer)
}

/// Rebuilds the RoBERTa fast tokenizer from the slow `vocab.json` +
/// `merges.txt` pair: byte-level BPE wrapped as `<s> ... </s>`.
fn roberta_bpe(vocab: &Path, merges: &Path) -> Result<Tokenizer> {
    let bpe = BPE::from_file(utf8_path(vocab)?, utf8_path(merges)?)
        .build()
        .map_err(|e| {
            ModelError::Tokenization(format!(
                "cannot build BPE from '{}' and '{}': {}",
                vocab.display(),
                merges.display(),
                e
            ))
        })?;

    let mut tokenizer = Tokenizer::new(bpe);
    let special: Vec<AddedToken> = SPECIAL_TOKENS
        .iter()
        .filter(|t| tokenizer.token_to_id(t).is_some())
        .map(|t| AddedToken::from(*t, true))
        .collect();
    tokenizer.add_special_tokens(&special);

    let bos_id = special_id(&tokenizer, BOS)?;
    let eos_id = special_id(&tokenizer, EOS)?;

    tokenizer
        .with_pre_tokenizer(Some(ByteLevel::default().add_prefix_space(false)))
        .with_decoder(Some(ByteLevel::default()))
        .with_post_processor(Some(
            RobertaProcessing::new((EOS.to_string(), eos_id), (BOS.to_string(), bos_id))
                .trim_offsets(true)
                .add_prefix_space(false),
        ));

    Ok(tokenizer)
}

fn special_id(tokenizer: &Tokenizer, token: &str) -> Result<u32> {
    tokenizer
        .token_to_id(token)
        .ok_or_else(|| ModelError::Tokenization(format!("vocabulary has no '{token}' token")))
}

fn utf8_path(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        ModelError::Tokenization(format!("non UTF-8 path '{}'", path.display()))
    })
}
