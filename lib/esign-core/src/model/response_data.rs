use serde::Deserialize;
use serde_json::Value;
use shared_types::SignatureId;

/// Outcome of a custom form field after signing
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseData {
    pub api_id: String,
    pub signature_id: SignatureId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    #[serde(default)]
    pub required: bool,
}
