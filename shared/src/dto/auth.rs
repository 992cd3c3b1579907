use serde::{Deserialize, Serialize};

use super::users::User;

/// Role the storefront assigns to console operators.
pub const ADMIN_ROLE: &str = "admin";

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response. The session itself travels as a cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body returned by the storefront on non-2xx responses.
///
/// Handlers are inconsistent about the key, so both `message` and `error`
/// are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// First non-empty message in the body, if any.
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error.filter(|e| !e.is_empty()))
    }
}

/// Generic `{ success, message }` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_prefers_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message":"Invalid credentials","error":"x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn error_response_falls_back_to_error_key() {
        let body: ErrorResponse = serde_json::from_str(r#"{"message":"","error":"boom"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("boom"));

        let empty: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.into_message(), None);
    }

    #[test]
    fn login_response_carries_role() {
        let json = r#"{"user":{"_id":"u1","name":"Ops","email":"ops@shop.in","role":"admin"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.role.as_deref(), Some(ADMIN_ROLE));
    }
}
