//! API schema types for request/response definitions.

pub mod analyze;
