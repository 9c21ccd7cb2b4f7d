use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct RemindSignerRequestDTO {
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct ApiErrorResponseDTO {
    pub error: ApiErrorDTO,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct ApiErrorDTO {
    pub error_name: String,
    #[serde(default)]
    pub error_msg: String,
}
