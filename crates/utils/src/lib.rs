//! Shared utilities for pipeshare
//!
//! This crate provides the retry policy used for network calls and the
//! tracing subscriber setup shared by every binary in the workspace.

pub mod network;
pub mod tracing;

pub use network::*;
