use clap::Parser;
use pipeshare::Step;
use pipeshare_api::{ClientOptions, DEFAULT_REQUEST_TIMEOUT};
use pipeshare_config::InputOverrides;
use pipeshare_env::OsEnvironment;
use pipeshare_utils::RetryConfig;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pipeshare")]
#[command(
    about = "Share environment variables with later stages of a build pipeline",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Variables to share, one `KEY=value` or bare `KEY` per line (overrides $variables)
    #[arg(long)]
    variables: Option<String>,

    /// Base URL of the build API (overrides $app_url)
    #[arg(long)]
    app_url: Option<String>,

    /// Slug of the running build (overrides $build_slug)
    #[arg(long)]
    build_slug: Option<String>,

    /// Build API token (overrides $build_api_token)
    #[arg(long)]
    build_api_token: Option<String>,

    /// Maximum attempts for the sharing request
    #[arg(long, env = "PIPESHARE_MAX_ATTEMPTS", default_value_t = 5)]
    max_attempts: u32,

    /// Timeout of a single attempt, in seconds
    #[arg(long, env = "PIPESHARE_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

impl Cli {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            variables: self.variables.clone(),
            app_url: self.app_url.clone(),
            build_slug: self.build_slug.clone(),
            build_api_token: self.build_api_token.clone(),
        }
    }

    fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            retry: RetryConfig::network().with_max_attempts(self.max_attempts),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = pipeshare_utils::tracing::init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let step = Step::new(
        Box::new(OsEnvironment::new()),
        cli.overrides(),
        cli.client_options(),
    );

    match step.execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
