//! Shared HTTP plumbing for the provider variants
//!
//! Both variants POST a JSON body and read a JSON body back. Everything that
//! can go wrong on the wire collapses into [`ProviderError::Transport`] with a
//! message fit for the user; low-level reqwest/serde faults are only logged.

use crate::error::ProviderError;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Build the HTTP client used by a provider
///
/// Falls back to a client without a timeout if the configured one cannot be
/// built (only possible when the TLS backend fails to initialize).
pub fn http_client(timeout: Duration) -> reqwest::Client {
    match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            log::warn!("Failed to build HTTP client with timeout: {}", e);
            reqwest::Client::new()
        }
    }
}

/// POST `body` as JSON and return the decoded JSON response
///
/// `request` is a prepared request builder (URL, auth, query); `label` names
/// the provider in error messages.
pub async fn post_json<B: Serialize + ?Sized>(
    request: reqwest::RequestBuilder,
    body: &B,
    label: &str,
) -> Result<Value, ProviderError> {
    let response = request.json(body).send().await.map_err(|e| {
        // Query strings may carry credentials
        let e = e.without_url();
        log::warn!("{} request failed: {}", label, e);
        if e.is_timeout() {
            ProviderError::Transport(format!("{} request timed out. Please try again.", label))
        } else {
            ProviderError::Transport(format!(
                "Could not reach {}. Please check your connection and try again.",
                label
            ))
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = remote_error_message(&body)
            .unwrap_or_else(|| format!("{} error: {}", label, status.as_u16()));
        log::warn!("{} responded with status {}", label, status.as_u16());
        return Err(ProviderError::Transport(message));
    }

    response.json::<Value>().await.map_err(|e| {
        log::warn!("{} returned an undecodable body: {}", label, e.without_url());
        ProviderError::Transport(format!(
            "{} returned an unreadable response. Please try again.",
            label
        ))
    })
}

/// Extract `error.message` from an error body, if the body is JSON and has one
pub fn remote_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.pointer("/error/message")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Read a string at a JSON pointer, if present
pub fn content_at<'a>(json: &'a Value, pointer: &str) -> Option<&'a str> {
    json.pointer(pointer).and_then(|v| v.as_str())
}
