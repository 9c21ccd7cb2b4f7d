use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumString};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldType {
    Text,
    Checkbox,
    DateSigned,
    Dropdown,
    Initials,
    Radio,
    Signature,
    #[serde(rename = "text-merge")]
    #[strum(serialize = "text-merge")]
    TextMerge,
    #[serde(rename = "checkbox-merge")]
    #[strum(serialize = "checkbox-merge")]
    CheckboxMerge,
}

/// Placement of a single field on a document.
///
/// `signer` refers to the signer's position in the request (1-based, as on the wire).
#[skip_serializing_none]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub api_id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub required: bool,
    pub signer: u32,
    pub page: Option<u32>,
}

impl FormField {
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
