use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use shared_types::SignatureRequestId;
use wiremock::matchers::{body_string, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::SignatureRequestService;
use crate::config::core_config::{ApiConfig, CoreConfig};
use crate::model::document::Document;
use crate::model::error::ValidationError;
use crate::model::form_field::{FieldType, FormField};
use crate::model::signature_request::SignatureRequest;
use crate::provider::http_client::MockHttpClient;
use crate::provider::http_client::reqwest_client::ReqwestClient;
use crate::service::error::ServiceError;

fn setup_service(base_url: String) -> SignatureRequestService {
    SignatureRequestService::new(
        Arc::new(ReqwestClient::default()),
        Arc::new(CoreConfig {
            api: ApiConfig { base_url },
        }),
    )
}

fn offline_service() -> SignatureRequestService {
    SignatureRequestService::new(Arc::new(MockHttpClient::new()), Arc::new(CoreConfig::default()))
}

fn returned_payload(id: &str) -> serde_json::Value {
    json!({
        "signature_request": {
            "signature_request_id": id,
            "title": "NDA with Acme Co.",
            "is_complete": false,
            "has_error": false,
            "signing_url": null,
            "details_url": "https://app.example.com/home/manage?guid=fa5c8a0b",
            "signatures": [
                {
                    "signature_id": "78caf2a1d01cd39cea2bc1cbb340dac3",
                    "signer_email_address": "jack@example.com",
                    "signer_name": "Jack",
                    "status_code": "awaiting_signature",
                    "has_pin": false
                }
            ]
        }
    })
}

#[tokio::test]
async fn test_send_signature_request_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/signature_request/send"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("name=\"signers[1][email_address]\""))
        .and(body_string_contains("name=\"signers[1][order]\""))
        .and(body_string_contains("name=\"form_fields_per_document\""))
        .and(body_string_contains("filename=\"nda.txt\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(returned_payload("fa5c8a0b")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("nda.txt");
    std::fs::File::create(&file_path)
        .unwrap()
        .write_all(b"terms")
        .unwrap();

    let mut document = Document::new(&file_path);
    document.add_form_field(FormField {
        api_id: "signature_1".to_string(),
        name: None,
        field_type: FieldType::Signature,
        x: 100,
        y: 500,
        width: 200,
        height: 40,
        required: true,
        signer: 1,
        page: Some(1),
    });

    let mut request = SignatureRequest::new();
    request.set_title("NDA with Acme Co.");
    request.add_signer("jack@example.com", "Jack");
    request.set_order_matters(true);
    request.add_document(document);
    request.set_test_mode(true);

    let service = setup_service(format!("{}/v3/", mock_server.uri()));
    let result = service.send_signature_request(&request).await.unwrap();

    assert_eq!(result.id().unwrap(), "fa5c8a0b");
    assert!(!result.is_complete());
    assert!(
        result
            .get_signature("jack@example.com", "Jack")
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_send_signature_request_rejects_submitted_request() {
    let request = SignatureRequest::from_json(&returned_payload("fa5c8a0b")).unwrap();

    let result = offline_service().send_signature_request(&request).await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::AlreadySubmitted(id))) if id == "fa5c8a0b"
    ));
}

#[tokio::test]
async fn test_send_signature_request_requires_signers_and_documents() {
    let mut request = SignatureRequest::new();
    request.add_file("/tmp/nda.pdf", None).unwrap();

    let result = offline_service().send_signature_request(&request).await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::MissingSigners))
    ));

    request.clear_documents();
    request.add_signer("jack@example.com", "Jack");

    let result = offline_service().send_signature_request(&request).await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::MissingDocuments))
    ));
}

#[tokio::test]
async fn test_get_signature_request_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/signature_request/fa5c8a0b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(returned_payload("fa5c8a0b")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = setup_service(format!("{}/v3/", mock_server.uri()));
    let result = service
        .get_signature_request(&SignatureRequestId::from("fa5c8a0b"))
        .await
        .unwrap();

    assert!(result.has_id());
    assert_eq!(result.title(), Some("NDA with Acme Co."));
    assert_eq!(result.signing_url(), None);
}

#[tokio::test]
async fn test_get_signature_request_remote_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/signature_request/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "error_msg": "Not found",
                "error_name": "not_found"
            }
        })))
        .mount(&mock_server)
        .await;

    let service = setup_service(format!("{}/v3/", mock_server.uri()));
    let result = service
        .get_signature_request(&SignatureRequestId::from("unknown"))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::RemoteApi { name, message }) if name == "not_found" && message == "Not found"
    ));
}

#[tokio::test]
async fn test_get_signature_request_plain_status_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/signature_request/abc"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&mock_server)
        .await;

    let service = setup_service(format!("{}/v3/", mock_server.uri()));
    let result = service
        .get_signature_request(&SignatureRequestId::from("abc"))
        .await;

    assert!(matches!(result, Err(ServiceError::HttpClient(_))));
}

#[tokio::test]
async fn test_cancel_signature_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/signature_request/cancel/fa5c8a0b"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = setup_service(format!("{}/v3/", mock_server.uri()));

    service
        .cancel_signature_request(&SignatureRequestId::from("fa5c8a0b"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remind_signer() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/signature_request/remind/fa5c8a0b"))
        .and(body_string("email_address=jack%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(returned_payload("fa5c8a0b")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = setup_service(format!("{}/v3/", mock_server.uri()));
    let result = service
        .remind_signer(&SignatureRequestId::from("fa5c8a0b"), "jack@example.com", None)
        .await
        .unwrap();

    assert_eq!(result.id().unwrap(), "fa5c8a0b");
}

#[tokio::test]
async fn test_remind_signer_requires_email() {
    let result = offline_service()
        .remind_signer(&SignatureRequestId::from("fa5c8a0b"), "", None)
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::EmptyEmailAddress))
    ));
}

#[tokio::test]
async fn test_invalid_base_url() {
    let service = SignatureRequestService::new(
        Arc::new(MockHttpClient::new()),
        Arc::new(CoreConfig {
            api: ApiConfig {
                base_url: "not a url".to_string(),
            },
        }),
    );

    let result = service
        .get_signature_request(&SignatureRequestId::from("abc"))
        .await;

    assert!(matches!(result, Err(ServiceError::InvalidUrl(_))));
}
