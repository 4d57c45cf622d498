#![cfg_attr(feature = "mock", allow(dead_code, unused_imports))]

use crate::{
    config::ClearPassConfig,
    http_client::{clearpass_http_client, handle_json_response},
};
use anyhow::{Context, Result};
use clearpass_ui_core::types::MacAddress;
use log::{debug, info};
#[cfg(feature = "mock")]
use mockall::automock;
use reqwest::{Client, Url, header::ACCEPT};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trait_variant::make;

/// Description stored on endpoints created by this service
pub const ENDPOINT_DESCRIPTION: &str = "Added via Web App";

/// Status assigned to endpoints registered through the form
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum EndpointStatus {
    Known,
}

/// Body of `POST /api/endpoint`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEndpoint {
    /// Colon notation, the form ClearPass displays and filters on
    pub mac_address: String,
    pub status: EndpointStatus,
    pub description: String,
}

impl NewEndpoint {
    pub fn known(mac_address: &MacAddress) -> Self {
        Self {
            mac_address: mac_address.to_colon_notation(),
            status: EndpointStatus::Known,
            description: ENDPOINT_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Serialize)]
struct OAuthRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
struct OAuthResponse {
    access_token: Option<String>,
}

/// HAL collection returned by list endpoints
#[derive(Deserialize)]
struct EndpointCollection {
    #[serde(rename = "_embedded")]
    embedded: Option<EmbeddedItems>,
}

#[derive(Deserialize)]
struct EmbeddedItems {
    #[serde(default)]
    items: Vec<Value>,
}

#[make(Send)]
#[cfg_attr(feature = "mock", automock)]
pub trait ClearPassApi {
    /// Obtain an OAuth access token with the client credentials grant
    async fn access_token(&self) -> Result<String>;
    /// Create an endpoint, returning the ClearPass representation
    async fn create_endpoint(&self, token: &str, endpoint: &NewEndpoint) -> Result<Value>;
    /// All endpoints matching a MAC address
    async fn query_endpoints(&self, token: &str, mac_address: &MacAddress) -> Result<Vec<Value>>;
}

#[derive(Clone)]
pub struct ClearPassClient {
    client: Client,
    api_url: String,
    client_id: String,
    client_secret: String,
}

impl ClearPassClient {
    pub fn new(config: &ClearPassConfig) -> Result<Self> {
        Ok(Self {
            client: clearpass_http_client(config.verify_tls)?,
            api_url: config.api_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }
}

impl ClearPassApi for ClearPassClient {
    async fn access_token(&self) -> Result<String> {
        debug!("requesting ClearPass access token");

        let res = self
            .client
            .post(self.url("/oauth"))
            .json(&OAuthRequest {
                grant_type: "client_credentials",
                client_id: &self.client_id,
                client_secret: &self.client_secret,
            })
            .send()
            .await
            .context("failed to send token request")?;

        let OAuthResponse { access_token } = handle_json_response(res, "token request").await?;

        access_token
            .filter(|token| !token.is_empty())
            .context("failed to get token: no access token in response")
    }

    async fn create_endpoint(&self, token: &str, endpoint: &NewEndpoint) -> Result<Value> {
        info!("creating endpoint {}", endpoint.mac_address);

        let res = self
            .client
            .post(self.url("/endpoint"))
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .json(endpoint)
            .send()
            .await
            .context("failed to send create endpoint request")?;

        handle_json_response(res, "create endpoint request").await
    }

    async fn query_endpoints(&self, token: &str, mac_address: &MacAddress) -> Result<Vec<Value>> {
        let filter = serde_json::json!({ "mac_address": mac_address.to_colon_notation() });
        let url = Url::parse_with_params(&self.url("/endpoint"), &[("filter", filter.to_string())])
            .context("failed to build endpoint query url")?;

        debug!("querying endpoints: {url}");

        let res = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context("failed to send endpoint query")?;

        let collection: EndpointCollection = handle_json_response(res, "endpoint query").await?;

        Ok(collection
            .embedded
            .map(|embedded| embedded.items)
            .unwrap_or_default())
    }
}
