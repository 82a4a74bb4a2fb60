//! Step configuration for pipeshare
//!
//! This crate reads the step inputs from the environment, applies any
//! command line overrides and turns the result into an immutable `Config`.

pub mod config;
pub mod inputs;
pub mod loader;


pub use config::Config;
pub use inputs::{InputOverrides, StepInputs};
pub use loader::ConfigLoader;
