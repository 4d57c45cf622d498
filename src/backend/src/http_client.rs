use actix_web::HttpResponse;
use anyhow::{Context, Result, ensure};
use log::error;
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Create the HTTP client used to talk to ClearPass
///
/// ClearPass appliances frequently run with self-signed certificates, so
/// verification can be switched off via configuration.
///
/// # Examples
/// ```no_run
/// use clearpass_ui::http_client::clearpass_http_client;
///
/// let client = clearpass_http_client(true).expect("failed to create client");
/// ```
pub fn clearpass_http_client(verify_tls: bool) -> Result<Client> {
    Client::builder()
        .danger_accept_invalid_certs(!verify_tls)
        .build()
        .context("failed to create ClearPass HTTP client")
}

/// JSON envelope every `/api` route answers with
///
/// `{"success": bool, "message": string}` plus optional payload fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_preview: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            token_preview: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            token_preview: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_token_preview(mut self, preview: impl Into<String>) -> Self {
        self.token_preview = Some(preview.into());
        self
    }
}

/// Trait for converting service results into HTTP responses
pub trait ServiceResultResponse {
    fn into_response(self) -> HttpResponse;
}

impl ServiceResultResponse for ApiResponse {
    fn into_response(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// Handle Result and convert data to Response
///
/// Errors are logged with their full context chain and returned to the
/// browser as a failed envelope prefixed with `failure_message`.
///
/// # Arguments
/// * `result` - The Result to handle
/// * `operation` - Name of the operation for the log
/// * `failure_message` - User facing prefix, e.g. "Failed to add endpoint"
pub fn handle_service_result<T>(result: Result<T>, operation: &str, failure_message: &str) -> HttpResponse
where
    T: ServiceResultResponse,
{
    match result {
        Ok(data) => data.into_response(),
        Err(e) => {
            error!("{operation} failed: {e:#}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("{failure_message}: {e:#}")))
        }
    }
}

/// Handle HTTP response by checking status and extracting the body
///
/// # Arguments
/// * `res` - The HTTP response to handle
/// * `context_msg` - Context message describing the request (e.g., "token request")
///
/// # Returns
/// * `Ok(String)` - The response body if the status is successful
/// * `Err` - If the status is not successful or reading the body fails
pub async fn handle_http_response(res: Response, context_msg: &str) -> Result<String> {
    let status = res.status();
    let body = res.text().await.context("failed to read response body")?;

    ensure!(
        status.is_success(),
        "{context_msg} failed with status {status} and body: {body}"
    );

    Ok(body)
}

/// Like [`handle_http_response`] but parses the body as JSON
pub async fn handle_json_response<T: DeserializeOwned>(
    res: Response,
    context_msg: &str,
) -> Result<T> {
    let body = handle_http_response(res, context_msg).await?;

    serde_json::from_str(&body)
        .with_context(|| format!("failed to parse {context_msg} response: {body}"))
}
