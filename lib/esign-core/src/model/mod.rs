pub mod document;
pub mod error;
pub mod form_field;
pub mod post_fields;
pub mod response_data;
pub mod signature;
pub mod signature_request;
pub mod signer;
pub mod typed_document;
