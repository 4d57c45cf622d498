//! Endpoint service
//!
//! Registers and looks up endpoints in ClearPass independent of HTTP concerns.

use crate::{
    clearpass_client::{ClearPassApi, NewEndpoint},
    http_client::{ApiResponse, ServiceResultResponse},
};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use anyhow::{Context, Result};
use clearpass_ui_core::types::MacAddress;
use log::info;
use serde_json::Value;
use std::fmt;

const TOKEN_PREVIEW_CHARS: usize = 10;

/// Rejection of a MAC address supplied by the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacInputError {
    Missing,
    Invalid,
}

impl fmt::Display for MacInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacInputError::Missing => f.write_str("MAC address is required"),
            MacInputError::Invalid => f.write_str(
                "Invalid MAC address format. Please use format like 00:11:22:33:44:55 or 001122334455",
            ),
        }
    }
}

impl std::error::Error for MacInputError {}

impl ResponseError for MacInputError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::error(self.to_string()))
    }
}

/// Parse the optional `mac_address` field of a request
pub fn parse_mac_input(input: Option<&str>) -> Result<MacAddress, MacInputError> {
    match input {
        None | Some("") => Err(MacInputError::Missing),
        Some(raw) => raw.parse().map_err(|_| MacInputError::Invalid),
    }
}

/// Endpoint as created by ClearPass
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEndpoint(pub Value);

impl ServiceResultResponse for CreatedEndpoint {
    fn into_response(self) -> HttpResponse {
        ApiResponse::success("Endpoint added successfully")
            .with_data(self.0)
            .into_response()
    }
}

/// Result of looking up a MAC address
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointLookup {
    pub endpoint: Option<Value>,
}

impl ServiceResultResponse for EndpointLookup {
    fn into_response(self) -> HttpResponse {
        match self.endpoint {
            Some(endpoint) => ApiResponse::success("Endpoint found").with_data(endpoint),
            None => ApiResponse::success("No endpoint found with this MAC address")
                .with_data(Value::Object(Default::default())),
        }
        .into_response()
    }
}

/// Proof that the configured credentials are accepted
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionCheck {
    pub token: String,
}

impl ConnectionCheck {
    /// Leading characters of the token, enough to recognize it without leaking it
    pub fn token_preview(&self) -> String {
        let preview: String = self.token.chars().take(TOKEN_PREVIEW_CHARS).collect();
        format!("{preview}...")
    }
}

impl ServiceResultResponse for ConnectionCheck {
    fn into_response(self) -> HttpResponse {
        ApiResponse::success("Successfully connected to ClearPass API")
            .with_token_preview(self.token_preview())
            .into_response()
    }
}

/// Service for endpoint operations
pub struct EndpointService;

impl EndpointService {
    /// Create `mac_address` as a known endpoint
    pub async fn add_endpoint<Client>(
        client: &Client,
        mac_address: &MacAddress,
    ) -> Result<CreatedEndpoint>
    where
        Client: ClearPassApi,
    {
        let token = client
            .access_token()
            .await
            .context("failed to get ClearPass token")?;

        let endpoint = NewEndpoint::known(mac_address);
        let created = client.create_endpoint(&token, &endpoint).await?;

        info!("endpoint {} added", endpoint.mac_address);

        Ok(CreatedEndpoint(created))
    }

    /// Find the first endpoint registered for `mac_address`
    pub async fn lookup_endpoint<Client>(
        client: &Client,
        mac_address: &MacAddress,
    ) -> Result<EndpointLookup>
    where
        Client: ClearPassApi,
    {
        let token = client
            .access_token()
            .await
            .context("failed to get ClearPass token")?;

        let endpoint = client
            .query_endpoints(&token, mac_address)
            .await?
            .into_iter()
            .next();

        Ok(EndpointLookup { endpoint })
    }

    /// Verify the API is reachable with the configured credentials
    pub async fn check_connection<Client>(client: &Client) -> Result<ConnectionCheck>
    where
        Client: ClearPassApi,
    {
        let token = client.access_token().await?;
        Ok(ConnectionCheck { token })
    }
}
