//! HTTP API layer - response envelope and error taxonomy

pub mod client;

pub use client::{ApiClient, ListQuery};

use serde::{Deserialize, Serialize};

/// Standard response envelope returned by every backend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// A `success: false` body or a missing payload becomes a single
    /// human-readable error string, preferring `error` over `message`.
    pub fn into_data(self, label: &str) -> Result<T, ApiError> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Backend(format!("Empty response for {}", label)))
        } else {
            Err(ApiError::Backend(self.reason(label)))
        }
    }

    /// Check an envelope that carries no payload (DELETE responses).
    pub fn into_ok(self, label: &str) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Backend(self.reason(label)))
        }
    }

    fn reason(&self, label: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| format!("Request failed for {}", label))
    }
}

/// Errors from the API layer.
///
/// Both variants carry one human-readable string; callers surface it
/// directly and never need to distinguish beyond display.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network/transport failure (connection, timeout, TLS)
    #[error("{0}")]
    Transport(String),

    /// Backend-reported logical failure (`success: false`)
    #[error("{0}")]
    Backend(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            ApiError::Backend(format!("Invalid response body: {}", err))
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_yields_data() {
        let env = Envelope {
            success: true,
            data: Some(7),
            message: None,
            error: None,
            total: None,
        };
        assert_eq!(env.into_data("thing").unwrap(), 7);
    }

    #[test]
    fn test_envelope_prefers_error_over_message() {
        let env: Envelope<u32> = Envelope {
            success: false,
            data: None,
            message: Some("something happened".into()),
            error: Some("validation failed".into()),
            total: None,
        };
        let err = env.into_data("thing").unwrap_err();
        assert_eq!(err.to_string(), "validation failed");
    }

    #[test]
    fn test_envelope_falls_back_to_message() {
        let env: Envelope<u32> = Envelope {
            success: false,
            data: None,
            message: Some("record not found".into()),
            error: None,
            total: None,
        };
        let err = env.into_data("thing").unwrap_err();
        assert_eq!(err.to_string(), "record not found");
    }

    #[test]
    fn test_envelope_success_without_payload_is_error() {
        let env: Envelope<u32> = Envelope {
            success: true,
            data: None,
            message: None,
            error: None,
            total: None,
        };
        assert!(env.into_data("thing").is_err());
    }

    #[test]
    fn test_delete_envelope_ignores_missing_data() {
        let env: Envelope<serde_json::Value> = Envelope {
            success: true,
            data: None,
            message: Some("deleted".into()),
            error: None,
            total: None,
        };
        assert!(env.into_ok("thing").is_ok());
    }

    #[test]
    fn test_envelope_deserializes_sparse_body() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap(), vec![1, 2]);
        assert!(env.total.is_none());
    }
}
