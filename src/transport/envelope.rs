use serde::Deserialize;

use super::id::TransportId;
use crate::domain::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    text_id: Option<TransportId>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    quota_remaining: Option<i64>,
    #[serde(default)]
    otp: Option<String>,
    #[serde(default)]
    is_valid_otp: Option<bool>,
}

pub fn decode_envelope_json_response(json: &str) -> Result<Envelope, TransportError> {
    let parsed: JsonEnvelope = serde_json::from_str(json)?;
    Ok(Envelope {
        success: parsed.success,
        status: parsed.status,
        text_id: parsed.text_id.map(TransportId::into_string),
        error: parsed.error,
        quota_remaining: parsed.quota_remaining,
        otp: parsed.otp,
        is_valid_otp: parsed.is_valid_otp,
    })
}
