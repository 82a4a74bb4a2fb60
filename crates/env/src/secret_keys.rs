use crate::repository::EnvRepository;
use pipeshare_core::{Result, SecretKeys, SECRET_ENV_KEY_LIST_VAR};

/// Load the secret key list exposed by the CI runner
pub fn load_secret_keys(env: &dyn EnvRepository) -> Result<SecretKeys> {
    let list = env.get_or_empty(SECRET_ENV_KEY_LIST_VAR)?;
    let keys = SecretKeys::from_list(&list);

    if keys.is_empty() {
        tracing::info!("Secret keys list is empty.");
    } else {
        tracing::debug!(count = keys.len(), "Loaded secret keys");
    }

    Ok(keys)
}
