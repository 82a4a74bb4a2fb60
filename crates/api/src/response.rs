use pipeshare_core::{Error, Result};

/// Turn a non-2xx response into an error carrying the server's message
pub(crate) async fn check_response(url: &str, response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    // An unreadable body still reports the status
    let message = match response.text().await {
        Ok(body) => error_message(&body),
        Err(err) => {
            tracing::debug!(error = %err, "Failed to read error response body");
            None
        }
    };

    Err(Error::unexpected_status(url, status.as_u16(), message))
}

/// Extract a non-empty `error_msg` string from a JSON error body
///
/// Other fields of the object, whatever their type, are ignored.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error_msg")?
        .as_str()
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}
