use pipeshare_core::{Error, Result};
use std::collections::HashMap;
use std::env::{self, VarError};

/// Read access to an environment
pub trait EnvRepository {
    /// Look up a variable; `Ok(None)` when it is not set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Look up a variable, treating an unset one as empty
    fn get_or_empty(&self, key: &str) -> Result<String> {
        Ok(self.get(key)?.unwrap_or_default())
    }
}

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvironment;

impl OsEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EnvRepository for OsEnvironment {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => {
                Err(Error::environment(key, "value is not valid unicode"))
            }
        }
    }
}

/// In-memory environment, used for tests and explicit overrides
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment(HashMap<String, String>);

impl MapEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }
}

impl EnvRepository for MapEnvironment {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }
}
