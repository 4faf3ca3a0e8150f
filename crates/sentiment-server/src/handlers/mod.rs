//! HTTP handler modules for the sentiment API.
//!
//! Handlers are thin: parse the request, hand the text to the shared
//! classifier, return JSON.

pub mod analyze;
pub mod root;
