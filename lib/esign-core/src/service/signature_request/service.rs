use serde_json::Value;
use shared_types::SignatureRequestId;
use url::Url;

use super::SignatureRequestService;
use super::dto::{ApiErrorResponseDTO, RemindSignerRequestDTO};
use super::validator::{validate_remind_request, validate_send_request};
use crate::model::signature_request::SignatureRequest;
use crate::model::typed_document::TypedDocument;
use crate::provider::http_client::Response;
use crate::service::error::ServiceError;

const SEND_PATH: &str = "signature_request/send";
const GET_PATH: &str = "signature_request";
const CANCEL_PATH: &str = "signature_request/cancel";
const REMIND_PATH: &str = "signature_request/remind";

impl SignatureRequestService {
    /// Submits a new signature request and returns it as accepted by the service
    ///
    /// # Arguments
    ///
    /// * `request` - draft request without an id, with at least one signer and one document
    pub async fn send_signature_request<D: TypedDocument>(
        &self,
        request: &SignatureRequest<D>,
    ) -> Result<SignatureRequest, ServiceError> {
        validate_send_request(request)?;

        let fields = request.post_fields()?;
        tracing::debug!(
            signers = request.signers().len(),
            documents = request.documents().len(),
            fields = fields.len(),
            "Sending signature request"
        );

        let response = self
            .http_client
            .post(self.endpoint(SEND_PATH, None)?.as_str())
            .multipart(fields)
            .send()
            .await?;

        parse_signature_request(response)
    }

    /// Returns the current state of a submitted request
    ///
    /// # Arguments
    ///
    /// * `id` - id assigned by the service on submission
    pub async fn get_signature_request(
        &self,
        id: &SignatureRequestId,
    ) -> Result<SignatureRequest, ServiceError> {
        let response = self
            .http_client
            .get(self.endpoint(GET_PATH, Some(id))?.as_str())
            .send()
            .await?;

        parse_signature_request(response)
    }

    pub async fn cancel_signature_request(
        &self,
        id: &SignatureRequestId,
    ) -> Result<(), ServiceError> {
        let response = self
            .http_client
            .post(self.endpoint(CANCEL_PATH, Some(id))?.as_str())
            .send()
            .await?;

        check_status(response)?;
        tracing::info!(%id, "Signature request cancelled");

        Ok(())
    }

    /// Sends a reminder e-mail to a signer who has not signed yet
    pub async fn remind_signer(
        &self,
        id: &SignatureRequestId,
        email: &str,
        name: Option<&str>,
    ) -> Result<SignatureRequest, ServiceError> {
        validate_remind_request(email)?;

        let response = self
            .http_client
            .post(self.endpoint(REMIND_PATH, Some(id))?.as_str())
            .form(RemindSignerRequestDTO {
                email_address: email.to_owned(),
                name: name.map(ToOwned::to_owned),
            })?
            .send()
            .await?;

        parse_signature_request(response)
    }

    fn endpoint(&self, path: &str, id: Option<&SignatureRequestId>) -> Result<Url, ServiceError> {
        let path = match id {
            Some(id) => format!("{path}/{}", urlencoding::encode(id.as_str())),
            None => path.to_owned(),
        };

        Ok(Url::parse(&self.config.api.base_url)?.join(&path)?)
    }
}

fn parse_signature_request(response: Response) -> Result<SignatureRequest, ServiceError> {
    let payload: Value = check_status(response)?.json()?;

    Ok(SignatureRequest::from_json(&payload)?)
}

/// Maps error statuses to the service's own error payload when one is present
fn check_status(response: Response) -> Result<Response, ServiceError> {
    if response.status.is_success() {
        return Ok(response);
    }

    match serde_json::from_slice::<ApiErrorResponseDTO>(&response.body) {
        Ok(ApiErrorResponseDTO { error }) => {
            tracing::warn!(
                status = %response.status,
                error_name = %error.error_name,
                "Signature request API call failed"
            );
            Err(ServiceError::RemoteApi {
                name: error.error_name,
                message: error.error_msg,
            })
        }
        Err(_) => Ok(response.error_for_status()?),
    }
}
