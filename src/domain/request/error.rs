use serde_json::Value;
use std::fmt;

/// Application error code the API sends with a 401 when the access token expired.
pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response.
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// The request never produced a response.
    Network(String),
    /// A body could not be encoded or decoded.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status {
                status,
                code: Some(code),
                message,
            } => write!(f, "HTTP {status} ({code}): {message}"),
            ApiError::Status {
                status, message, ..
            } => write!(f, "HTTP {status}: {message}"),
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Serialization(error.to_string())
    }
}

impl ApiError {
    /// Builds the failure for a non-2xx response. The application code is the
    /// `error` field of a JSON object body, when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let code = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string));

        ApiError::Status {
            status,
            code,
            message: body.to_string(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        ApiError::Serialization(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// 401 with the `TOKEN_EXPIRED` code. Other 401 causes do not qualify.
    pub fn is_token_expired(&self) -> bool {
        self.status() == Some(401) && self.code() == Some(TOKEN_EXPIRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_extracts_code() {
        let error = ApiError::from_response(401, r#"{"error":"TOKEN_EXPIRED","message":"expired"}"#);
        assert_eq!(error.status(), Some(401));
        assert_eq!(error.code(), Some(TOKEN_EXPIRED));
        assert!(error.is_token_expired());
    }

    #[test]
    fn test_from_response_plain_text() {
        let error = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(error.code(), None);
        assert!(!error.is_token_expired());
        assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_other_401_is_not_expiry() {
        let error = ApiError::from_response(401, r#"{"error":"BAD_CREDENTIALS"}"#);
        assert!(!error.is_token_expired());

        let error = ApiError::from_response(401, "Unauthorized");
        assert!(!error.is_token_expired());
    }

    #[test]
    fn test_expiry_code_with_other_status() {
        let error = ApiError::from_response(403, r#"{"error":"TOKEN_EXPIRED"}"#);
        assert!(!error.is_token_expired());
    }

    #[test]
    fn test_network_error_has_no_status() {
        let error = ApiError::network("connection refused");
        assert_eq!(error.status(), None);
        assert!(!error.is_token_expired());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }
}
