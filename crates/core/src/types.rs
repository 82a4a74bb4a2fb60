use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{REDACTED, SECRET_KEY_SEPARATOR};
use crate::errors::{Error, Result};

/// A single variable to share with later pipeline stages
///
/// The key is never empty. Duplicate keys across a list are allowed and are
/// all sent as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    key: String,
    value: String,
    sensitive: bool,
}

impl EnvVar {
    /// Create a new variable, rejecting an empty key
    pub fn new(key: impl Into<String>, value: impl Into<String>, sensitive: bool) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::configuration("env var key cannot be empty"));
        }
        Ok(Self {
            key,
            value: value.into(),
            sensitive,
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }
}

impl fmt::Display for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sensitive {
            write!(f, "{}={REDACTED}", self.key)
        } else {
            write!(f, "{}={}", self.key, self.value)
        }
    }
}

/// Build API token that never shows up in logs
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiToken(String);

impl ApiToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for building the request header only
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&REDACTED).finish()
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Keys whose values must be flagged as sensitive when shared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretKeys(Vec<String>);

impl SecretKeys {
    /// Create an empty key list
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a comma separated key list, dropping empty entries
    #[must_use]
    pub fn from_list(list: &str) -> Self {
        let keys = list
            .split(SECRET_KEY_SEPARATOR)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect();
        Self(keys)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
