//! Client for a running sentiment server.

use serde_json::json;
use thiserror::Error;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please enter a comment to analyze")]
    EmptyComment,

    #[error("HTTP error! status: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to reach sentiment server: {0}")]
    Request(#[from] reqwest::Error),
}

/// Blank comments are rejected locally instead of being sent to the model.
pub fn validate_comment(text: &str) -> Result<&str, ClientError> {
    if text.trim().is_empty() {
        return Err(ClientError::EmptyComment);
    }
    Ok(text)
}

/// The server answers with a JSON string; strip the quotes to get the label.
pub fn clean_label(raw: &str) -> String {
    raw.trim().replace('"', "")
}

/// Posts `text` to `{base_url}/analyze` and returns the bare label.
pub async fn analyze(
    client: &reqwest::Client,
    base_url: &str,
    text: &str,
) -> Result<String, ClientError> {
    let text = validate_comment(text)?;
    let endpoint = format!("{}/analyze", base_url.trim_end_matches('/'));

    tracing::debug!(%endpoint, "sending text for analysis");
    let response = client
        .post(endpoint)
        .json(&json!({ "text": text }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }

    let body = response.text().await?;
    Ok(clean_label(&body))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::HeaderValue;
    use sentiment_core::{ModelError, Prediction, SentimentClassifier};
    use sentiment_server::config::DEFAULT_ALLOWED_ORIGIN;
    use sentiment_server::router::build_router;
    use sentiment_server::state::AppState;

    use super::*;

    struct FixedClassifier(Result<&'static str, &'static str>);

    impl SentimentClassifier for FixedClassifier {
        fn classify(&self, _text: &str) -> Result<Prediction, ModelError> {
            match self.0 {
                Ok(label) => Ok(Prediction {
                    label: label.to_string(),
                    score: 1.0,
                }),
                Err(msg) => Err(ModelError::Inference(msg.to_string())),
            }
        }

        fn labels(&self) -> &[String] {
            &[]
        }
    }

    /// Serves the real router on an ephemeral port and returns its base URL.
    async fn spawn_server(classifier: FixedClassifier) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(
            AppState::new(Arc::new(classifier)),
            HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        );
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn blank_comments_are_rejected() {
        assert!(matches!(validate_comment(""), Err(ClientError::EmptyComment)));
        assert!(matches!(validate_comment(" \n\t"), Err(ClientError::EmptyComment)));
        assert_eq!(validate_comment(" hi ").unwrap(), " hi ");
    }

    #[test]
    fn quotes_are_stripped_from_labels() {
        assert_eq!(clean_label("\"positive\""), "positive");
        assert_eq!(clean_label("neutral\n"), "neutral");
    }

    #[tokio::test]
    async fn analyze_returns_the_bare_label() {
        let base = spawn_server(FixedClassifier(Ok("positive"))).await;
        let label = analyze(&reqwest::Client::new(), &format!("{}/", base), "I love it")
            .await
            .unwrap();
        assert_eq!(label, "positive");
    }

    #[tokio::test]
    async fn server_errors_surface_the_status() {
        let base = spawn_server(FixedClassifier(Err("model crashed"))).await;
        let err = analyze(&reqwest::Client::new(), &base, "anything")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Status(status) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(err.to_string(), "HTTP error! status: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn blank_comment_never_reaches_the_server() {
        // Nothing listens here; a request would fail with `Request`.
        let err = analyze(&reqwest::Client::new(), "http://127.0.0.1:9", "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::EmptyComment));
    }
}
