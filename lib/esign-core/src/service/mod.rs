pub mod error;
pub mod signature_request;
