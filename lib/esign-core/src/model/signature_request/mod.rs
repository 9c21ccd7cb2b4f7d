use std::path::PathBuf;

use serde_json::Value;
use shared_types::SignatureRequestId;

use super::document::Document;
use super::error::{SignatureRequestError, ValidationError};
use super::post_fields::PostFields;
use super::response_data::ResponseData;
use super::signature::{Signature, eq_ignore_case};
use super::signer::Signer;
use super::typed_document::{DocumentError, JsonDocument, TypedDocument};
use crate::mapper::post_fields::build_post_fields;

pub const SIGNATURE_REQUEST_KEY: &str = "signature_request";
pub const SIGNATURE_REQUEST_ID: &str = "signature_request_id";
pub const SIGNERS: &str = "signers";
pub const SIGNER_EMAIL: &str = "email_address";
pub const SIGNER_NAME: &str = "name";
pub const SIGNER_ORDER: &str = "order";
pub const CC_EMAIL_ADDRESSES: &str = "cc_email_addresses";
pub const FILES: &str = "file";
pub const FORM_FIELDS_PER_DOCUMENT: &str = "form_fields_per_document";
pub const IS_COMPLETE: &str = "is_complete";
pub const HAS_ERROR: &str = "has_error";
pub const RESPONSE_DATA: &str = "response_data";
pub const FINAL_COPY_URL: &str = "final_copy_url";
pub const SIGNING_URL: &str = "signing_url";
pub const DETAILS_URL: &str = "details_url";
pub const REQUESTER_EMAIL: &str = "requester_email_address";
pub const SIGNATURES: &str = "signatures";

pub const TITLE: &str = "title";
pub const SUBJECT: &str = "subject";
pub const MESSAGE: &str = "message";
pub const TEST_MODE: &str = "test_mode";

/// A signature request, either being prepared for submission or returned by the service.
///
/// Scalar metadata and all response-side values live in the typed document `D`;
/// signers and documents are kept in owned lists and only travel outwards through
/// [`SignatureRequest::post_fields`].
#[derive(Clone, Debug, Default)]
pub struct SignatureRequest<D = JsonDocument> {
    document: D,
    signers: Vec<Signer>,
    documents: Vec<Document>,
    order_matters: bool,
}

impl SignatureRequest<JsonDocument> {
    pub fn new() -> Self {
        Self::with_document(JsonDocument::default())
    }

    /// Parses a payload returned by the service, enveloped under `signature_request` or bare
    pub fn from_json(json: &Value) -> Result<Self, DocumentError> {
        Self::from_json_with_key(json, SIGNATURE_REQUEST_KEY)
    }

    pub fn from_json_with_key(json: &Value, key: &str) -> Result<Self, DocumentError> {
        Ok(Self::with_document(JsonDocument::from_response(json, key)?))
    }
}

impl<D: TypedDocument> SignatureRequest<D> {
    pub fn with_document(document: D) -> Self {
        Self {
            document,
            signers: vec![],
            documents: vec![],
            order_matters: false,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn id(&self) -> Option<SignatureRequestId> {
        self.document
            .get_string(SIGNATURE_REQUEST_ID)
            .map(SignatureRequestId::from)
    }

    /// `false` for requests being prepared, `true` for requests returned by the service
    pub fn has_id(&self) -> bool {
        self.document.has(SIGNATURE_REQUEST_ID)
    }

    pub fn title(&self) -> Option<&str> {
        self.document.get_string(TITLE)
    }

    pub fn has_title(&self) -> bool {
        self.document.has(TITLE)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.document.set(TITLE, Value::String(title.into()));
    }

    pub fn subject(&self) -> Option<&str> {
        self.document.get_string(SUBJECT)
    }

    pub fn has_subject(&self) -> bool {
        self.document.has(SUBJECT)
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.document.set(SUBJECT, Value::String(subject.into()));
    }

    pub fn message(&self) -> Option<&str> {
        self.document.get_string(MESSAGE)
    }

    pub fn has_message(&self) -> bool {
        self.document.has(MESSAGE)
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.document.set(MESSAGE, Value::String(message.into()));
    }

    pub fn is_test_mode(&self) -> bool {
        self.document.get_bool(TEST_MODE)
    }

    pub fn set_test_mode(&mut self, test_mode: bool) {
        self.document.set(TEST_MODE, test_mode);
    }

    pub fn requester_email(&self) -> Option<&str> {
        self.document.get_string(REQUESTER_EMAIL)
    }

    pub fn has_requester_email(&self) -> bool {
        self.document.has(REQUESTER_EMAIL)
    }

    pub fn set_requester_email(&mut self, email: impl Into<String>) {
        self.document.set(REQUESTER_EMAIL, Value::String(email.into()));
    }

    pub fn ccs(&self) -> Result<Vec<String>, DocumentError> {
        self.document.get_list(CC_EMAIL_ADDRESSES)
    }

    pub fn add_cc(&mut self, email: impl Into<String>) -> Result<(), DocumentError> {
        self.document.add(CC_EMAIL_ADDRESSES, Value::String(email.into()))
    }

    pub fn signatures(&self) -> Result<Vec<Signature>, DocumentError> {
        self.document.get_list(SIGNATURES)
    }

    /// Looks up a signature by signer email and name, both compared case-insensitively.
    ///
    /// Neither value alone is unique across signers, so both are required.
    pub fn get_signature(
        &self,
        email: &str,
        name: &str,
    ) -> Result<Option<Signature>, SignatureRequestError> {
        if email.is_empty() {
            return Err(ValidationError::EmptyEmailAddress.into());
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        Ok(self.find_signature(email, name)?)
    }

    /// Same lookup as [`Self::get_signature`], but empty input yields `None` instead of an error
    pub fn get_signature_by_signer(
        &self,
        email: &str,
        name: &str,
    ) -> Result<Option<Signature>, DocumentError> {
        if email.is_empty() || name.is_empty() {
            return Ok(None);
        }

        self.find_signature(email, name)
    }

    fn find_signature(&self, email: &str, name: &str) -> Result<Option<Signature>, DocumentError> {
        Ok(self
            .signatures()?
            .into_iter()
            .find(|signature| signature.matches(email, name)))
    }

    pub fn add_signer(&mut self, email: impl Into<String>, name: impl Into<String>) {
        self.signers.push(Signer::new(email, name));
    }

    /// Inserts a signer at a 1-based `order`, the first position being 1
    pub fn add_signer_at(
        &mut self,
        email: impl Into<String>,
        name: impl Into<String>,
        order: usize,
    ) -> Result<(), SignatureRequestError> {
        let max = self.signers.len() + 1;
        if !(1..=max).contains(&order) {
            return Err(SignatureRequestError::IndexOutOfBounds {
                index: order,
                min: 1,
                max,
            });
        }

        self.signers.insert(order - 1, Signer::new(email, name));
        Ok(())
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    pub fn signers_mut(&mut self) -> &mut Vec<Signer> {
        &mut self.signers
    }

    pub fn set_signers(&mut self, signers: Vec<Signer>) {
        self.signers = signers;
    }

    /// Removes every signer whose email matches case-insensitively
    pub fn remove_signer(&mut self, email: &str) -> Result<(), SignatureRequestError> {
        if email.is_empty() {
            return Err(ValidationError::EmptyEmailAddress.into());
        }

        self.signers
            .retain(|signer| !eq_ignore_case(&signer.email_address, email));
        Ok(())
    }

    /// Wraps `file` in a [`Document`]; `order` is a 0-based position, `None` appends
    pub fn add_file(
        &mut self,
        file: impl Into<PathBuf>,
        order: Option<usize>,
    ) -> Result<(), SignatureRequestError> {
        let document = Document::new(file);
        match order {
            None => {
                self.add_document(document);
                Ok(())
            }
            Some(order) => self.add_document_at(document, order),
        }
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn add_document_at(
        &mut self,
        document: Document,
        order: usize,
    ) -> Result<(), SignatureRequestError> {
        let max = self.documents.len();
        if order > max {
            return Err(SignatureRequestError::IndexOutOfBounds {
                index: order,
                min: 0,
                max,
            });
        }

        self.documents.insert(order, document);
        Ok(())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut Vec<Document> {
        &mut self.documents
    }

    pub fn set_documents(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    pub fn clear_documents(&mut self) {
        self.documents.clear();
    }

    pub fn order_matters(&self) -> bool {
        self.order_matters
    }

    pub fn set_order_matters(&mut self, order_matters: bool) {
        self.order_matters = order_matters;
    }

    pub fn post_fields(&self) -> Result<PostFields, SignatureRequestError> {
        build_post_fields(self)
    }

    /// `true` once every signer has signed
    pub fn is_complete(&self) -> bool {
        self.document.get_bool(IS_COMPLETE)
    }

    pub fn has_error(&self) -> bool {
        self.document.get_bool(HAS_ERROR)
    }

    pub fn response_data(&self) -> Result<Vec<ResponseData>, DocumentError> {
        self.document.get_list(RESPONSE_DATA)
    }

    pub fn final_copy_url(&self) -> Option<&str> {
        self.document.get_string(FINAL_COPY_URL)
    }

    pub fn signing_url(&self) -> Option<&str> {
        self.document.get_string(SIGNING_URL)
    }

    pub fn details_url(&self) -> Option<&str> {
        self.document.get_string(DETAILS_URL)
    }
}
