//! Gigya wire types

use serde::Deserialize;

use crate::json::string_or_number;

/// Raw `accounts.login` response.
///
/// Gigya multiplexes success and failure over the same shape: `statusCode`
/// is always present, the identity fields only on success and the error
/// fields only on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    #[serde(rename = "UID", default)]
    pub uid: Option<String>,

    #[serde(rename = "UIDSignature", default)]
    pub uid_signature: Option<String>,

    // Emitted as a string by current Gigya deployments, as a number by
    // older ones.
    #[serde(
        rename = "signatureTimestamp",
        default,
        deserialize_with = "string_or_number"
    )]
    pub signature_timestamp: Option<String>,

    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,

    #[serde(rename = "errorDetails", default)]
    pub error_details: Option<String>,
}

/// Signed identity assertion returned on a successful login.
///
/// The three fields are forwarded verbatim to the playback APIs; the
/// timestamp stays a string so re-serialization is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub uid_signature: String,
    pub signature_timestamp: String,
}
