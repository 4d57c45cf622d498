use crate::{
    clearpass_client::ClearPassApi,
    http_client::{ApiResponse, handle_service_result},
    services::endpoint::{EndpointService, parse_mac_input},
};
use actix_files::NamedFile;
use actix_web::{HttpResponse, Responder, error::InternalError, web};
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Body of `POST /api/add-endpoint` and query of `GET /api/get-endpoint`
#[derive(Debug, Default, Deserialize)]
pub struct EndpointPayload {
    mac_address: Option<String>,
}

#[derive(Clone)]
pub struct Api<Client>
where
    Client: ClearPassApi,
{
    pub clearpass: Client,
    pub index_html: PathBuf,
}

impl<Client> Api<Client>
where
    Client: ClearPassApi,
{
    pub fn new(clearpass: Client, static_dir: &Path) -> Self {
        Api {
            clearpass,
            index_html: static_dir.join("index.html"),
        }
    }

    pub async fn index(api: web::Data<Self>) -> actix_web::Result<NamedFile> {
        debug!("index() called");
        Ok(NamedFile::open(&api.index_html)?)
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }

    pub async fn add_endpoint(
        body: web::Json<EndpointPayload>,
        api: web::Data<Self>,
    ) -> actix_web::Result<HttpResponse> {
        debug!("add_endpoint() called: {body:?}");

        let mac_address = parse_mac_input(body.mac_address.as_deref())?;

        Ok(handle_service_result(
            EndpointService::add_endpoint(&api.clearpass, &mac_address).await,
            "add_endpoint",
            "Failed to add endpoint",
        ))
    }

    pub async fn get_endpoint(
        query: web::Query<EndpointPayload>,
        api: web::Data<Self>,
    ) -> actix_web::Result<HttpResponse> {
        debug!("get_endpoint() called: {query:?}");

        let mac_address = parse_mac_input(query.mac_address.as_deref())?;

        Ok(handle_service_result(
            EndpointService::lookup_endpoint(&api.clearpass, &mac_address).await,
            "get_endpoint",
            "Failed to get endpoint details",
        ))
    }

    pub async fn test_connection(api: web::Data<Self>) -> impl Responder {
        debug!("test_connection() called");

        handle_service_result(
            EndpointService::check_connection(&api.clearpass).await,
            "test_connection",
            "Failed to connect to ClearPass API",
        )
    }
}

/// Answer malformed JSON bodies with the same envelope as every other error
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("rejected request body: {err}");
        let response =
            HttpResponse::BadRequest().json(ApiResponse::error(format!("Invalid request: {err}")));
        InternalError::from_response(err, response).into()
    })
}
