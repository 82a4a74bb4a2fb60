//! Pipeline step that shares environment variables with later build stages
//!
//! The step reads its inputs, parses the `variables` input into a list of
//! env vars and posts that list to the build's env var endpoint.

pub mod step;

pub use step::Step;
