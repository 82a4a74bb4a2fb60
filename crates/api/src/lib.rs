//! HTTP client for sharing environment variables with later pipeline stages
//!
//! The client posts the whole variable list in one request. Transient
//! failures are retried according to its `RetryConfig`; anything else is
//! reported to the caller unchanged.

mod client;
mod models;
mod response;

pub use client::{ClientOptions, PipelineClient, DEFAULT_REQUEST_TIMEOUT};
pub use models::{ShareEnvVarsRequest, SharedEnvVar};
