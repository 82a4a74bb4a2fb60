use pipeshare_core::EnvVar;
use serde::{Deserialize, Serialize};

/// One variable as the API expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedEnvVar {
    pub key: String,
    pub value: String,
    #[serde(rename = "is_sensitive")]
    pub sensitive: bool,
}

impl From<&EnvVar> for SharedEnvVar {
    fn from(env_var: &EnvVar) -> Self {
        Self {
            key: env_var.key().to_string(),
            value: env_var.value().to_string(),
            sensitive: env_var.is_sensitive(),
        }
    }
}

/// Request body of `POST .../env_vars`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEnvVarsRequest {
    pub shared_envs: Vec<SharedEnvVar>,
}

impl From<&[EnvVar]> for ShareEnvVarsRequest {
    fn from(env_vars: &[EnvVar]) -> Self {
        Self {
            shared_envs: env_vars.iter().map(SharedEnvVar::from).collect(),
        }
    }
}
