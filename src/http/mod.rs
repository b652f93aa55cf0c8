//! HTTP module entry point
//!
//! Builders that realize harness responses as hyper types.

pub mod response;

pub use response::{build_405_response, build_generated_response, build_json_response};
