use pipeshare_core::{Error, Result};
use std::time::Duration;
use tokio::time::sleep;

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Exponential backoff multiplier
    pub multiplier: f64,
    /// Add jitter to retry delays to prevent thundering herd
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::network()
    }
}

impl RetryConfig {
    /// Create a configuration for network operations
    pub fn network() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
            jitter: true,
        }
    }

    /// A single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::network()
        }
    }

    /// Same policy with a different attempt budget
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    fn next_delay(&self, delay: Duration) -> Duration {
        Duration::from_millis((delay.as_millis() as f64 * self.multiplier) as u64)
            .min(self.max_delay)
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if !self.jitter {
            return delay;
        }
        let jitter =
            Duration::from_millis((delay.as_millis() as f64 * rand::random::<f64>() * 0.3) as u64);
        delay + jitter
    }
}

/// Trait for determining if an error is retryable
pub trait RetryableError {
    /// Check if this error should trigger a retry
    fn is_retryable(&self) -> bool;
}

impl RetryableError for Error {
    fn is_retryable(&self) -> bool {
        match self {
            // Connection refused, reset, timed out
            Error::Network { .. } => true,
            Error::UnexpectedStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Rate limiting and server errors are transient, except "not implemented"
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || ((500..600).contains(&status) && status != 501)
}

/// Execute an async operation with exponential backoff retry
pub async fn retry_async<F, Fut, T, E>(config: RetryConfig, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = std::result::Result<T, E>>,
    E: Into<Error> + RetryableError + std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => return Ok(result),
            Err(err) => {
                if attempt >= config.max_attempts || !err.is_retryable() {
                    return Err(err.into());
                }

                let actual_delay = config.jittered(delay);
                tracing::warn!(
                    "Attempt {}/{} failed: {}. Retrying in {:?}",
                    attempt,
                    config.max_attempts,
                    err,
                    actual_delay
                );

                sleep(actual_delay).await;
                delay = config.next_delay(delay);
            }
        }
    }
}
