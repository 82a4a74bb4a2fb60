/// Result type alias for pipeshare operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pipeshare operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line of the `variables` input that is not `KEY=value` or `KEY`
    #[error("env var should be in a format: KEY=value or KEY: {line}")]
    InvalidEnvVar { line: String },

    /// A required step input was missing or empty
    #[error("required input '{name}' is not set")]
    MissingInput { name: String },

    /// Environment variable related errors
    #[error("environment variable '{variable}' error: {message}")]
    Environment { variable: String, message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Transport-level failures (connect, TLS, timeout)
    #[error("network error for '{endpoint}': {message}")]
    Network { endpoint: String, message: String },

    /// The API answered with a non-2xx status
    #[error("{}", format_status_error(.url, .status, .message))]
    UnexpectedStatus {
        url: String,
        status: u16,
        message: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

fn format_status_error(url: &str, status: &u16, message: &Option<String>) -> String {
    let base = format!("request to {url} failed: status code should be 2xx ({status})");
    match message {
        Some(message) => format!("{base}, message: {message}"),
        None => base,
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid env var line error
    #[must_use]
    pub fn invalid_env_var(line: impl Into<String>) -> Self {
        Error::InvalidEnvVar { line: line.into() }
    }

    /// Create a missing input error
    #[must_use]
    pub fn missing_input(name: impl Into<String>) -> Self {
        Error::MissingInput { name: name.into() }
    }

    /// Create an environment variable error
    #[must_use]
    pub fn environment(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Environment {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected status error
    #[must_use]
    pub fn unexpected_status(url: impl Into<String>, status: u16, message: Option<String>) -> Self {
        Error::UnexpectedStatus {
            url: url.into(),
            status,
            message,
        }
    }

    /// HTTP status carried by this error, if it came from a response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Configuration {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }
}
