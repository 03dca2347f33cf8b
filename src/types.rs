/// Serializable envelope for `--json-errors`.
///
/// Decoupled from `ClientError` so the wire shape stays stable when error
/// variants change.
use serde::{Deserialize, Serialize};

use crate::client::ClientError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status, when the server answered with a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorOutput {
    /// Construct from a `ClientError`.
    #[must_use]
    pub fn from_client_error(err: &ClientError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                status: err.status(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_for_http_error() {
        let err = ClientError::HttpError {
            status: 500,
            body: "boom".to_owned(),
        };
        let value = serde_json::to_value(ErrorOutput::from_client_error(&err)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ok": false,
                "error": {"code": "http_error", "message": "boom", "status": 500}
            })
        );
    }

    #[test]
    fn test_envelope_omits_status() {
        let out = ErrorOutput::from_client_error(&ClientError::MissingPayload);
        let text = serde_json::to_string(&out).unwrap();
        assert!(!text.contains("status"));
        assert!(text.contains("missing_payload"));
    }
}
