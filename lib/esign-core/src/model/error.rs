use thiserror::Error;

use super::typed_document::DocumentError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Email address cannot be empty")]
    EmptyEmailAddress,
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Signature request `{0}` has already been submitted")]
    AlreadySubmitted(String),
    #[error("Signature request has no signers")]
    MissingSigners,
    #[error("Signature request has no documents")]
    MissingDocuments,
}

#[derive(Debug, Error)]
pub enum SignatureRequestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Position {index} is outside the valid range {min}..={max}")]
    IndexOutOfBounds { index: usize, min: usize, max: usize },
    #[error("Document error: `{0}`")]
    Document(#[from] DocumentError),
    #[error("Could not extract form fields from signature request: `{0}`")]
    Serialization(#[from] SerializationError),
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
}
