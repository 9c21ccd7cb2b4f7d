use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};
use shared_types::SignatureId;
use time::OffsetDateTime;

/// Per-signer status record returned by the remote service
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Signature {
    pub signature_id: SignatureId,
    #[serde(default)]
    pub signer_email_address: Option<String>,
    #[serde(default)]
    pub signer_name: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default, with = "time::serde::timestamp::option")]
    pub signed_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::timestamp::option")]
    pub last_viewed_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::timestamp::option")]
    pub last_reminded_at: Option<OffsetDateTime>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_pin: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl Signature {
    pub fn email(&self) -> Option<&str> {
        self.signer_email_address.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.signer_name.as_deref()
    }

    pub fn is_signed(&self) -> bool {
        self.signed_at.is_some()
    }

    pub(crate) fn matches(&self, email: &str, name: &str) -> bool {
        self.email().is_some_and(|value| eq_ignore_case(value, email))
            && self.name().is_some_and(|value| eq_ignore_case(value, name))
    }
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
