use serde::{Deserialize, Serialize};

/// Request body for the generation endpoint.
///
/// Serialized with the wire key `lengthMinutes` expected by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub audience: String,
    #[serde(rename = "lengthMinutes")]
    pub length_minutes: u32,
}

/// Successful response payload. Fields other than `draft` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationResult {
    pub draft: String,
}

/// Error response payload. The `error` field is optional; a missing or
/// unparsable body falls back to a status-code message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
