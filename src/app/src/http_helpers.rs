//! HTTP helper functions for Crux Core
//!
//! Response handling shared by all requests the core issues, kept out of the
//! update functions so it can be reasoned about on its own.

use crux_http::{HttpError, Response};
use serde::Deserialize;
use std::fmt::Display;

/// Base URL for backend API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// which keeps them relative to the page origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use clearpass_ui_core::http_helpers::build_url;
/// let url = build_url("/api/add-endpoint");
/// assert_eq!(url, "https://relative/api/add-endpoint");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Error envelope the backend sends along with non-2xx statuses
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Describe a failed status, preferring the `message` of a JSON error body
fn status_error_message(action: &str, status: impl Display, body: Option<&[u8]>) -> String {
    body.and_then(|body| serde_json::from_slice::<ErrorBody>(body).ok())
        .map(|ErrorBody { message }| message)
        .unwrap_or_else(|| format!("{action} failed: HTTP {status}"))
}

/// Extracts error message from a response with a non-2xx status.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status();
    let body = response.take_body();
    status_error_message(action, status, body.as_deref())
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Map a failed request to a message
///
/// `crux_http` reports 4xx and 5xx statuses as [`HttpError::Http`] carrying
/// the body, so the backend's `message` is recovered from there.
pub fn map_http_error(action: &str, error: HttpError) -> String {
    match error {
        HttpError::Http { code, body, .. } => status_error_message(action, code, body.as_deref()),
        other => format!("{action} failed: {other}"),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}
