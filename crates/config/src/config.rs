//! Resolved configuration of a single step invocation
//!
//! A `Config` is built once from the step inputs and consumed once by the
//! sharing call. It is never persisted.

use crate::inputs::StepInputs;
use pipeshare_core::{ApiToken, EnvVar, Result, SecretKeys};
use pipeshare_env::{parse_env_vars, EnvRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Variables to share, in input order
    pub env_vars: Vec<EnvVar>,

    /// Base URL of the build orchestration API
    pub app_url: String,

    /// Identifier of the build the variables belong to
    pub build_slug: String,

    pub build_api_token: ApiToken,
}

impl Config {
    /// Parse the `variables` input and combine it with the remaining inputs
    pub fn from_inputs(
        inputs: StepInputs,
        secret_keys: &SecretKeys,
        env: &dyn EnvRepository,
    ) -> Result<Self> {
        let env_vars = parse_env_vars(&inputs.variables, secret_keys, env)?;

        Ok(Self {
            env_vars,
            app_url: inputs.app_url,
            build_slug: inputs.build_slug,
            build_api_token: inputs.build_api_token,
        })
    }

    /// Number of variables flagged as sensitive
    #[must_use]
    pub fn sensitive_count(&self) -> usize {
        self.env_vars.iter().filter(|v| v.is_sensitive()).count()
    }
}
