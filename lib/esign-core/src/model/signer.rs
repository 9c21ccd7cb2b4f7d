use serde::{Deserialize, Serialize};

/// A party expected to sign a request
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Signer {
    pub email_address: String,
    pub name: String,
    /// Template role, used in place of the name when no name is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Signer {
    pub fn new(email_address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            name: name.into(),
            role: None,
        }
    }

    pub fn with_role(email_address: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            name: String::new(),
            role: Some(role.into()),
        }
    }

    pub fn name_or_role(&self) -> &str {
        match &self.role {
            Some(role) if self.name.is_empty() => role,
            _ => &self.name,
        }
    }
}
