/// Constants used throughout the pipeshare codebase
// Step input names, read from the process environment
pub const INPUT_VARIABLES: &str = "variables";
pub const INPUT_APP_URL: &str = "app_url";
pub const INPUT_BUILD_SLUG: &str = "build_slug";
pub const INPUT_BUILD_API_TOKEN: &str = "build_api_token";

// Comma separated list of keys whose values are secrets
pub const SECRET_ENV_KEY_LIST_VAR: &str = "BITRISE_SECRET_ENV_KEY_LIST";
pub const SECRET_KEY_SEPARATOR: char = ',';

// Sharing endpoint
pub const SHARE_ENV_VARS_PATH: &str = "pipeline/workflow_builds";
pub const BUILD_API_TOKEN_HEADER: &str = "X-HTTP_BUILD_API_TOKEN";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

// Placeholder printed instead of secret values
pub const REDACTED: &str = "[REDACTED]";
