//! Provider error types.

use serde::Deserialize;

/// Errors from talking to the generative-AI provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("empty response: {0}")]
    EmptyResponse(String),
}

impl ProviderError {
    /// Whether retrying later could plausibly succeed (network, rate limit, server side).
    /// Callers only use this for log levels and wording; nothing retries.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Transport(_) => true,
            ProviderError::Api { status, .. } => *status == 429 || *status >= 500,
            ProviderError::MissingApiKey
            | ProviderError::InvalidUrl(_)
            | ProviderError::Decode(_)
            | ProviderError::EmptyResponse(_) => false,
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Map a non-2xx response into [`ProviderError::Api`], preferring the JSON
/// `error.message` field over the raw body.
pub(crate) fn map_api_error(status: u16, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no error details".to_string()
            } else {
                trimmed.to_string()
            }
        });
    ProviderError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_api_error_json_message() {
        let body = r#"{"error":{"code":404,"message":"models/bogus is not found","status":"NOT_FOUND"}}"#;
        match map_api_error(404, body) {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "models/bogus is not found");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn map_api_error_plain_body() {
        let err = map_api_error(502, "  Bad Gateway\n");
        assert_eq!(err.to_string(), "API error (502): Bad Gateway");
    }

    #[test]
    fn map_api_error_empty_body() {
        let err = map_api_error(500, "");
        assert_eq!(err.to_string(), "API error (500): no error details");
    }

    #[test]
    fn transient_classification() {
        let api = |status| ProviderError::Api {
            status,
            message: String::new(),
        };
        assert!(api(429).is_transient());
        assert!(api(503).is_transient());
        assert!(!api(400).is_transient());
        assert!(!api(403).is_transient());
        assert!(!ProviderError::EmptyResponse("SAFETY".into()).is_transient());
        assert!(!ProviderError::MissingApiKey.is_transient());
    }
}
