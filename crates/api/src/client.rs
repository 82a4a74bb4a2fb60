use crate::models::ShareEnvVarsRequest;
use crate::response::check_response;
use pipeshare_core::{
    ApiToken, EnvVar, Error, Result, ResultExt, BUILD_API_TOKEN_HEADER, JSON_CONTENT_TYPE,
    SHARE_ENV_VARS_PATH,
};
use pipeshare_utils::RetryConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use url::Url;

/// Per-attempt timeout when none is configured
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport settings of a `PipelineClient`
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Timeout of a single attempt
    pub timeout: Duration,
    /// Retry policy for transient failures
    pub retry: RetryConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryConfig::network(),
        }
    }
}

/// Client for the env var sharing endpoint of one build
#[derive(Debug)]
pub struct PipelineClient {
    http: reqwest::Client,
    url: String,
    retry: RetryConfig,
}

impl PipelineClient {
    /// Create a client for one build with the given transport settings
    pub fn with_options(
        app_url: &str,
        build_slug: &str,
        token: &ApiToken,
        options: ClientOptions,
    ) -> Result<Self> {
        let url = share_url(app_url, build_slug)?;

        let mut token_value = HeaderValue::from_str(token.expose())
            .map_err(|_| Error::configuration("build API token is not a valid header value"))?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(
            HeaderName::from_bytes(BUILD_API_TOKEN_HEADER.as_bytes())
                .map_err(|e| Error::configuration(format!("invalid header name: {e}")))?,
            token_value,
        );

        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            url,
            retry: options.retry,
        })
    }

    /// Send all variables in a single request
    pub async fn share_env_vars(&self, env_vars: &[EnvVar]) -> Result<()> {
        let request = ShareEnvVarsRequest::from(env_vars);
        let body = serde_json::to_vec(&request).context("failed to encode shared env vars")?;

        tracing::debug!(url = %self.url, count = env_vars.len(), "Posting shared env vars");

        pipeshare_utils::retry_async(self.retry.clone(), || self.post(body.clone())).await
    }

    async fn post(&self, body: Vec<u8>) -> Result<()> {
        let response = self
            .http
            .post(&self.url)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::network(&self.url, e.to_string()))?;

        check_response(&self.url, response).await
    }
}

/// `{app_url}/pipeline/workflow_builds/{build_slug}/env_vars`
///
/// The slug is a single escaped path segment, so `/` or `?` in it cannot
/// change the shape of the URL.
fn share_url(app_url: &str, build_slug: &str) -> Result<String> {
    let invalid =
        |reason: String| Error::configuration(format!("invalid app URL '{app_url}': {reason}"));

    let mut url = Url::parse(app_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(SHARE_ENV_VARS_PATH.split('/'))
        .push(build_slug)
        .push("env_vars");

    Ok(url.into())
}
