//! HTTP/JSON API server for sentiment classification.
//!
//! Loads one classifier at startup and serves `POST /analyze` over it. This
//! crate contains the router, request schema, error mapping and
//! environment-driven configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
