//! The classifier seam shared by the server and the CLI.

use crate::error::Result;

/// A sentiment prediction with label and confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The predicted sentiment (e.g. "positive", "negative", "neutral").
    pub label: String,
    /// Softmax probability of `label` (0.0 to 1.0).
    pub score: f32,
}

/// Classifies a single text into one sentiment label.
///
/// Implementations are immutable after construction, so one instance can be
/// shared across threads and called concurrently without locking.
pub trait SentimentClassifier: Send + Sync {
    /// Returns the most probable label for `text`.
    fn classify(&self, text: &str) -> Result<Prediction>;

    /// The label set this classifier can produce, in class-id order.
    fn labels(&self) -> &[String];
}
