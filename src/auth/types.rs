//! # Auth Wire Types
//!
//! JSON bodies exchanged with the user service.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Any response body that may carry a `message` field.
///
/// Used both for register confirmations and for error bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_field_names() {
        let body = RegisterRequest {
            name: "Ada Lovelace",
            username: "ada",
            password: "engine",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Ada Lovelace", "username": "ada", "password": "engine" })
        );
    }

    #[test]
    fn message_body_tolerates_missing_and_extra_fields() {
        let empty: MessageBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, None);

        let full: MessageBody =
            serde_json::from_str(r#"{"message":"User Registered","token":"abc"}"#).unwrap();
        assert_eq!(full.message.as_deref(), Some("User Registered"));
    }
}
