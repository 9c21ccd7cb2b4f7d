//! Client SDK core for an e-signature service: builds signature requests, flattens them
//! into the multipart POST fields of the remote API and parses the returned requests.

use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::http_client::HttpClient;
use crate::provider::http_client::reqwest_client::ReqwestClient;
use crate::service::signature_request::SignatureRequestService;

pub mod config;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod service;

pub struct EsignCore {
    pub signature_request_service: SignatureRequestService,
}

impl EsignCore {
    /// Uses [`CoreConfig::default`] and a default [`ReqwestClient`] when not provided.
    ///
    /// Authentication is left to the HTTP client, e.g. a `reqwest::Client` built with
    /// default headers.
    pub fn new(config: Option<CoreConfig>, http_client: Option<Arc<dyn HttpClient>>) -> Self {
        let config = Arc::new(config.unwrap_or_default());
        let http_client: Arc<dyn HttpClient> = match http_client {
            Some(http_client) => http_client,
            None => Arc::new(ReqwestClient::default()),
        };

        Self {
            signature_request_service: SignatureRequestService::new(http_client, config),
        }
    }
}
