//! Core domain types, errors, and constants for `pipeshare`.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing every failure mode of a step invocation.
//! - **`types`**: Domain types such as `EnvVar`, `ApiToken` and `SecretKeys`
//!   that enforce their invariants at construction time.
//! - **`constants`**: Step input names, header names and other shared strings.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
