use pipeshare_core::{
    ApiToken, Error, Result, INPUT_APP_URL, INPUT_BUILD_API_TOKEN, INPUT_BUILD_SLUG,
    INPUT_VARIABLES,
};
use pipeshare_env::EnvRepository;

/// Raw step inputs, all of them required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInputs {
    pub variables: String,
    pub app_url: String,
    pub build_slug: String,
    pub build_api_token: ApiToken,
}

/// Values that take precedence over the environment, e.g. from CLI flags
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub variables: Option<String>,
    pub app_url: Option<String>,
    pub build_slug: Option<String>,
    pub build_api_token: Option<String>,
}

impl StepInputs {
    /// Read all inputs, failing on the first one that is missing or empty
    pub fn load(env: &dyn EnvRepository, overrides: &InputOverrides) -> Result<Self> {
        Ok(Self {
            variables: required(env, INPUT_VARIABLES, overrides.variables.as_deref())?,
            app_url: required(env, INPUT_APP_URL, overrides.app_url.as_deref())?,
            build_slug: required(env, INPUT_BUILD_SLUG, overrides.build_slug.as_deref())?,
            build_api_token: ApiToken::new(required(
                env,
                INPUT_BUILD_API_TOKEN,
                overrides.build_api_token.as_deref(),
            )?),
        })
    }

    /// Print the inputs the way a step reports its configuration
    pub fn log(&self) {
        tracing::info!("Configuration:");
        tracing::info!("- {INPUT_VARIABLES}: {} line(s)", self.variables.lines().count());
        tracing::info!("- {INPUT_APP_URL}: {}", self.app_url);
        tracing::info!("- {INPUT_BUILD_SLUG}: {}", self.build_slug);
        tracing::info!("- {INPUT_BUILD_API_TOKEN}: {}", self.build_api_token);
    }
}

fn required(env: &dyn EnvRepository, name: &str, value: Option<&str>) -> Result<String> {
    let value = match value {
        Some(value) => value.to_string(),
        None => env.get_or_empty(name)?,
    };
    if value.is_empty() {
        return Err(Error::missing_input(name));
    }
    Ok(value)
}
