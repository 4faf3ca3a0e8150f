//! Tests against the real Hub checkpoint.
//!
//! These download several hundred megabytes on first run, so they are ignored
//! by default. Run with `cargo test -p sentiment-core -- --ignored`.

use sentiment_core::{DeviceSpec, ModelSource, Result, RobertaSentimentModel, SentimentClassifier};

fn load() -> Result<RobertaSentimentModel> {
    RobertaSentimentModel::load(&ModelSource::default(), DeviceSpec::Cpu)
}

#[test]
#[ignore = "downloads model weights from the Hugging Face Hub"]
fn exposes_three_way_label_set() -> Result<()> {
    let model = load()?;
    assert_eq!(model.labels(), &["negative", "neutral", "positive"]);
    Ok(())
}

#[test]
#[ignore = "downloads model weights from the Hugging Face Hub"]
fn clear_sentiment_is_classified() -> Result<()> {
    let model = load()?;

    let positive = model.classify("I absolutely love this, best day ever!")?;
    assert_eq!(positive.label, "positive");
    assert!(positive.score > 0.5 && positive.score <= 1.0);

    let negative = model.classify("This is terrible, worst experience of my life.")?;
    assert_eq!(negative.label, "negative");
    Ok(())
}

#[test]
#[ignore = "downloads model weights from the Hugging Face Hub"]
fn repeated_input_is_deterministic() -> Result<()> {
    let model = load()?;
    let first = model.classify("The weather is okay today.")?;
    for _ in 0..3 {
        assert_eq!(model.classify("The weather is okay today.")?, first);
    }
    Ok(())
}

#[test]
#[ignore = "downloads model weights from the Hugging Face Hub"]
fn edge_inputs_still_classify() -> Result<()> {
    let model = load()?;
    model.classify("")?;
    model.classify(&"great ".repeat(2_000))?;
    Ok(())
}
