use pipeshare_api::{ClientOptions, PipelineClient};
use pipeshare_config::{Config, ConfigLoader, InputOverrides};
use pipeshare_core::Result;
use pipeshare_env::EnvRepository;
use tracing::{debug, error, info};

/// One invocation of the share step
pub struct Step {
    env: Box<dyn EnvRepository>,
    overrides: InputOverrides,
    client_options: ClientOptions,
}

impl Step {
    pub fn new(
        env: Box<dyn EnvRepository>,
        overrides: InputOverrides,
        client_options: ClientOptions,
    ) -> Self {
        Self {
            env,
            overrides,
            client_options,
        }
    }

    /// Read and validate inputs; never touches the network
    pub fn process_config(&self) -> Result<Config> {
        ConfigLoader::new()
            .overrides(self.overrides.clone())
            .load(self.env.as_ref())
    }

    /// Share the configured variables in one request
    pub async fn run(&self, config: Config) -> Result<()> {
        info!("Sharing {} env vars", config.env_vars.len());
        debug!(sensitive = config.sensitive_count(), "Sensitive env vars");

        let client = PipelineClient::with_options(
            &config.app_url,
            &config.build_slug,
            &config.build_api_token,
            self.client_options.clone(),
        )?;
        client.share_env_vars(&config.env_vars).await?;

        info!("Finished");
        Ok(())
    }

    /// Process the config and run, reporting which phase failed
    pub async fn execute(&self) -> Result<()> {
        let config = self.process_config().inspect_err(|err| {
            error!("Failed to process Step inputs: {err}");
        })?;

        self.run(config).await.inspect_err(|err| {
            error!("Failed to execute Step: {err}");
        })
    }
}
