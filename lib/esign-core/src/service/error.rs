use thiserror::Error;

use crate::model::error::{SignatureRequestError, ValidationError};
use crate::model::typed_document::DocumentError;
use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("Remote API error `{name}`: {message}")]
    RemoteApi { name: String, message: String },
    #[error("Invalid endpoint URL: `{0}`")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Document error: `{0}`")]
    Document(#[from] DocumentError),

    #[error(transparent)]
    SignatureRequest(#[from] SignatureRequestError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
