use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Identifier assigned by the remote service once a signature request is accepted
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SignatureRequestId(String);

impls_for_string_newtype!(SignatureRequestId);
