use serde_json::Value;

use crate::model::error::{SerializationError, SignatureRequestError};
use crate::model::post_fields::{PostFields, PostValue};
use crate::model::signature_request::{
    CC_EMAIL_ADDRESSES, FILES, FORM_FIELDS_PER_DOCUMENT, MESSAGE, REQUESTER_EMAIL,
    SIGNER_EMAIL, SIGNER_NAME, SIGNER_ORDER, SIGNERS, SUBJECT, SignatureRequest, TEST_MODE, TITLE,
};
use crate::model::typed_document::TypedDocument;

/// Flattens a signature request into the POST fields of the send endpoint.
///
/// Signers, CCs and files are keyed from 1 (`signers[1][email_address]`, `file[1]`),
/// while `signers[n][order]` carries the 0-based position.
pub fn build_post_fields<D: TypedDocument>(
    request: &SignatureRequest<D>,
) -> Result<PostFields, SignatureRequestError> {
    extract_post_fields(request).map_err(SignatureRequestError::Serialization)
}

fn extract_post_fields<D: TypedDocument>(
    request: &SignatureRequest<D>,
) -> Result<PostFields, SerializationError> {
    let mut fields = PostFields::new();

    if let Some(title) = request.title() {
        fields.insert(TITLE.to_owned(), title.into());
    }
    if let Some(subject) = request.subject() {
        fields.insert(SUBJECT.to_owned(), subject.into());
    }
    if let Some(message) = request.message() {
        fields.insert(MESSAGE.to_owned(), message.into());
    }

    for (index, signer) in request.signers().iter().enumerate() {
        let position = index + 1;
        fields.insert(
            format!("{SIGNERS}[{position}][{SIGNER_EMAIL}]"),
            signer.email_address.as_str().into(),
        );
        fields.insert(
            format!("{SIGNERS}[{position}][{SIGNER_NAME}]"),
            signer.name_or_role().into(),
        );
        if request.order_matters() {
            fields.insert(
                format!("{SIGNERS}[{position}][{SIGNER_ORDER}]"),
                PostValue::Integer(index as i64),
            );
        }
    }

    for (index, cc) in request.ccs()?.into_iter().enumerate() {
        fields.insert(format!("{CC_EMAIL_ADDRESSES}[{}]", index + 1), cc.into());
    }

    let mut has_form_fields = false;
    let mut form_fields_per_document = Vec::with_capacity(request.documents().len());
    for (index, document) in request.documents().iter().enumerate() {
        fields.insert(
            format!("{FILES}[{}]", index + 1),
            PostValue::File(document.file().to_path_buf()),
        );

        let document_fields = document
            .form_fields()
            .iter()
            .map(|form_field| form_field.to_json())
            .collect::<Result<Vec<_>, _>>()?;
        has_form_fields |= !document_fields.is_empty();
        form_fields_per_document.push(Value::Array(document_fields));
    }
    if has_form_fields {
        fields.insert(
            FORM_FIELDS_PER_DOCUMENT.to_owned(),
            serde_json::to_string(&form_fields_per_document)?.into(),
        );
    }

    if request.is_test_mode() {
        fields.insert(TEST_MODE.to_owned(), PostValue::Boolean(true));
    }
    if let Some(requester_email) = request.requester_email() {
        fields.insert(REQUESTER_EMAIL.to_owned(), requester_email.into());
    }

    tracing::trace!(count = fields.len(), "Signature request POST fields extracted");

    Ok(fields)
}
