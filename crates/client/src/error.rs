use serde::Deserialize;
use thiserror::Error;

/// Failure talking to the content backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure talking to the identity provider.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("identity provider is not configured")]
    NotConfigured,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Sign-in rejected; the message comes from the provider and is shown as is.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Pull the human-readable message out of an error body.
///
/// Understands the backend's `{"error":{"message":..}}` envelope and the
/// provider's flat `error_description` / `msg` / `message` fields; anything
/// else is returned as raw text.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error.message;
    }
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(body) {
        for key in ["error_description", "msg", "message", "detail"] {
            if let Some(serde_json::Value::String(text)) = map.get(key) {
                return text.clone();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_backend_envelope() {
        let body = r#"{"error":{"type":"notFound","message":"no content yet","statusCode":404}}"#;
        assert_eq!(error_message(body), "no content yet");
    }

    #[test]
    fn reads_provider_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message(body), "Invalid login credentials");
    }

    #[test]
    fn falls_back_to_raw_text() {
        assert_eq!(error_message(" Bad Gateway\n"), "Bad Gateway");
    }
}
