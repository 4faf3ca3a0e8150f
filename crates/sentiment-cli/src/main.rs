//! Sentiment analysis CLI.
//!
//! Provides the `sentiment` binary with two subcommands:
//! - `analyze` sends a comment to a running `sentiment-server`.
//! - `classify` loads the model in-process and classifies without a server.

mod client;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sentiment_core::{
    DeviceSpec, ModelSource, RobertaSentimentModel, SentimentClassifier, DEFAULT_MODEL_ID,
    DEFAULT_REVISION,
};

use crate::client::{ClientError, DEFAULT_SERVER_URL};

/// Classify the sentiment of a comment.
#[derive(Parser)]
#[command(name = "sentiment", about = "Classify the sentiment of a comment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Ask a running sentiment server to classify a comment.
    Analyze {
        /// The comment to classify.
        text: String,

        /// Base URL of the sentiment server.
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        url: String,
    },

    /// Load the model locally and classify a comment.
    Classify {
        /// The comment to classify.
        text: String,

        /// Hugging Face Hub model id.
        #[arg(short, long, default_value = DEFAULT_MODEL_ID)]
        model: String,

        /// Model revision (branch, tag or commit).
        #[arg(long, default_value = DEFAULT_REVISION)]
        revision: String,

        /// Compute device: cpu, cuda or cuda:N.
        #[arg(short, long, default_value = "cpu")]
        device: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Analyze { text, url } => run_analyze(&url, &text).await,
        Commands::Classify {
            text,
            model,
            revision,
            device,
        } => run_classify(text, &model, &revision, &device).await,
    };
    process::exit(exit_code);
}

/// Execute the analyze subcommand.
///
/// Returns exit code: 0 = success, 1 = request error, 2 = invalid input.
async fn run_analyze(url: &str, text: &str) -> i32 {
    let http = reqwest::Client::new();
    match client::analyze(&http, url, text).await {
        Ok(label) => {
            println!("{}", label);
            0
        }
        Err(ClientError::EmptyComment) => {
            eprintln!("Error: {}", ClientError::EmptyComment);
            2
        }
        Err(e) => {
            eprintln!(
                "Error: failed to analyze sentiment ({}). Make sure the server is running on {}",
                e, url
            );
            1
        }
    }
}

/// Execute the classify subcommand.
///
/// Returns exit code: 0 = success, 1 = model error, 2 = invalid input.
async fn run_classify(text: String, model: &str, revision: &str, device: &str) -> i32 {
    if client::validate_comment(&text).is_err() {
        eprintln!("Error: {}", ClientError::EmptyComment);
        return 2;
    }

    let device: DeviceSpec = match device.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    let source = ModelSource::new(model).with_revision(revision);
    let result = tokio::task::spawn_blocking(move || {
        let model = RobertaSentimentModel::load(&source, device)?;
        model.classify(&text)
    })
    .await;

    match result {
        Ok(Ok(prediction)) => {
            println!("{} ({:.2})", prediction.label, prediction.score);
            0
        }
        Ok(Err(e)) => {
            eprintln!("Error: {}", e);
            1
        }
        Err(e) => {
            eprintln!("Error: classification task failed: {}", e);
            1
        }
    }
}
