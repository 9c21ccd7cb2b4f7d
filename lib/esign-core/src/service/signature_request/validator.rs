use crate::model::error::ValidationError;
use crate::model::signature_request::SignatureRequest;
use crate::model::typed_document::TypedDocument;

pub(super) fn validate_send_request<D: TypedDocument>(
    request: &SignatureRequest<D>,
) -> Result<(), ValidationError> {
    if let Some(id) = request.id() {
        return Err(ValidationError::AlreadySubmitted(id.to_string()));
    }

    if request.signers().is_empty() {
        return Err(ValidationError::MissingSigners);
    }

    if request.documents().is_empty() {
        return Err(ValidationError::MissingDocuments);
    }

    Ok(())
}

pub(super) fn validate_remind_request(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmailAddress);
    }

    Ok(())
}
