//! Class-id to label mapping read from a model's `config.json`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::classifier::Prediction;
use crate::error::{ModelError, Result};

#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
}

/// Dense `class id -> label` table.
///
/// Hub configs store `id2label` as a JSON object keyed by stringified ids;
/// this converts it into a vector so lookups by argmax index are direct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: Vec<String>,
}

impl LabelMap {
    /// Builds a map from labels already in class-id order.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(ModelError::Config("label map is empty".to_string()));
        }
        Ok(Self { labels })
    }

    /// Parses the `id2label` object out of a raw `config.json` string.
    pub fn from_config_json(config: &str) -> Result<Self> {
        let raw: ClassifierConfigJson = serde_json::from_str(config)?;
        Self::from_id2label(raw.id2label)
    }

    /// Converts a stringly-keyed `id2label` map. Ids must be `0..n` with no gaps.
    pub fn from_id2label(id2label: HashMap<String, String>) -> Result<Self> {
        let mut entries = id2label
            .into_iter()
            .map(|(id, label)| {
                id.parse::<usize>()
                    .map(|id| (id, label))
                    .map_err(|_| ModelError::Config(format!("non-numeric label id '{id}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by_key(|(id, _)| *id);

        for (expected, (id, _)) in entries.iter().enumerate() {
            if *id != expected {
                return Err(ModelError::Config(format!(
                    "label ids must be contiguous from 0, missing id {expected}"
                )));
            }
        }

        Self::new(entries.into_iter().map(|(_, label)| label).collect())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Picks the highest-probability class. Ties resolve to the lowest id.
    pub fn top(&self, probs: &[f32]) -> Result<Prediction> {
        let (id, score) = probs
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f32)>, (id, p)| match best {
                Some((_, best_p)) if best_p >= p => best,
                _ => Some((id, p)),
            })
            .ok_or_else(|| ModelError::Inference("model returned no logits".to_string()))?;

        let label = self
            .labels
            .get(id)
            .ok_or_else(|| ModelError::UnknownLabel {
                id,
                available: self.labels.join(", "),
            })?
            .clone();

        Ok(Prediction { label, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardiff_labels() -> LabelMap {
        LabelMap::from_config_json(
            r#"{
                "architectures": ["RobertaForSequenceClassification"],
                "id2label": {"0": "negative", "1": "neutral", "2": "positive"},
                "label2id": {"negative": 0, "neutral": 1, "positive": 2}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_id2label_in_id_order() {
        let map = cardiff_labels();
        assert_eq!(map.labels(), &["negative", "neutral", "positive"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn rejects_gaps_and_non_numeric_ids() {
        let gap = LabelMap::from_config_json(r#"{"id2label": {"0": "a", "2": "c"}}"#);
        assert!(matches!(gap, Err(ModelError::Config(_))));

        let word = LabelMap::from_config_json(r#"{"id2label": {"zero": "a"}}"#);
        assert!(matches!(word, Err(ModelError::Config(_))));
    }

    #[test]
    fn missing_id2label_is_a_config_error() {
        let result = LabelMap::from_config_json(r#"{"hidden_size": 768}"#);
        assert!(matches!(result, Err(ModelError::Config(_))));
    }

    #[test]
    fn top_picks_argmax() {
        let map = cardiff_labels();
        let p = map.top(&[0.05, 0.15, 0.80]).unwrap();
        assert_eq!(p.label, "positive");
        assert!((p.score - 0.80).abs() < f32::EPSILON);

        let p = map.top(&[0.90, 0.07, 0.03]).unwrap();
        assert_eq!(p.label, "negative");
    }

    #[test]
    fn top_breaks_ties_toward_lowest_id() {
        let map = cardiff_labels();
        assert_eq!(map.top(&[0.4, 0.4, 0.2]).unwrap().label, "negative");
    }

    #[test]
    fn top_reports_ids_outside_the_map() {
        let map = LabelMap::new(vec!["only".to_string()]).unwrap();
        let err = map.top(&[0.1, 0.9]).unwrap_err();
        assert!(matches!(err, ModelError::UnknownLabel { id: 1, .. }));
    }

    #[test]
    fn top_on_empty_logits_fails() {
        assert!(cardiff_labels().top(&[]).is_err());
    }
}
