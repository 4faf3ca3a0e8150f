//! Sentiment analysis request type.
//!
//! The response is the bare label serialized as a JSON string, so it has no
//! wrapper type.

use serde::Deserialize;

/// Request to classify one text.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to classify.
    pub text: String,
}
