use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::http_client::HttpClient;

pub mod dto;
pub mod service;

pub(crate) mod validator;

#[derive(Clone)]
pub struct SignatureRequestService {
    http_client: Arc<dyn HttpClient>,
    config: Arc<CoreConfig>,
}

impl SignatureRequestService {
    pub fn new(http_client: Arc<dyn HttpClient>, config: Arc<CoreConfig>) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

#[cfg(test)]
mod test;
