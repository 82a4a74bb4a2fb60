//! Configuration loader for pipeshare
//!
//! Loads the step inputs, reports them, loads the secret key list and parses
//! the variables. Every failure here happens before any network call.

use crate::{
    config::Config,
    inputs::{InputOverrides, StepInputs},
};
use pipeshare_core::Result;
use pipeshare_env::{load_secret_keys, EnvRepository};

/// Configuration loader that handles all startup configuration
#[derive(Debug)]
pub struct ConfigLoader {
    /// Values taking precedence over the environment
    overrides: InputOverrides,
    /// Whether to print the inputs before parsing
    report_inputs: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            overrides: InputOverrides::default(),
            report_inputs: true,
        }
    }

    /// Set input overrides
    pub fn overrides(mut self, overrides: InputOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set whether to print the inputs
    pub fn report_inputs(mut self, report: bool) -> Self {
        self.report_inputs = report;
        self
    }

    /// Load the configuration from `env`
    pub fn load(self, env: &dyn EnvRepository) -> Result<Config> {
        let inputs = StepInputs::load(env, &self.overrides)?;

        if self.report_inputs {
            inputs.log();
        }

        let secret_keys = load_secret_keys(env)?;

        Config::from_inputs(inputs, &secret_keys, env)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
