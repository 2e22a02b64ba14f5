use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code
    pub code: u16,
    /// Stable error type identifier
    pub r#type: String,
    /// Additional error details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
