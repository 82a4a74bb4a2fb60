//! Environment handling for pipeshare
//!
//! This crate reads the process environment through the `EnvRepository`
//! seam, parses the `variables` step input and loads the secret key list.

pub mod parser;
pub mod repository;
pub mod secret_keys;

pub use parser::parse_env_vars;
pub use repository::{EnvRepository, MapEnvironment, OsEnvironment};
pub use secret_keys::load_secret_keys;
