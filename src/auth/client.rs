//! # HTTP Auth Client
//!
//! [`AuthService`] backed by the MeetBridge user service.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::error::{AuthError, AuthResult};
use super::types::{LoginRequest, MessageBody, RegisterRequest};
use super::AuthService;

/// HTTP client for the user service.
///
/// No request timeout and no retries: a pending call stays pending until the
/// backend answers or the connection fails.
///
/// # Examples
///
/// ```rust,ignore
/// let auth = HttpAuthService::new("http://localhost:8000/api/v1/users");
/// let confirmation = auth.register("Ada", "ada", "secret").await?;
/// ```
#[derive(Clone)]
pub struct HttpAuthService {
    base_url: String,
    http: Client,
}

impl HttpAuthService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turns a non-success response into [`AuthError::Rejected`], pulling the
    /// `message` field out of a JSON body when there is one.
    async fn rejection(res: Response) -> AuthError {
        let status = res.status().as_u16();
        let message = match res.text().await {
            Ok(body) => serde_json::from_str::<MessageBody>(&body)
                .ok()
                .and_then(|b| b.message),
            Err(e) => {
                tracing::debug!(status, error = %e, "Could not read error body");
                None
            }
        };
        AuthError::Rejected { status, message }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, username: &str, password: &str) -> AuthResult<()> {
        let url = format!("{}/login", self.base_url);
        tracing::debug!(%url, %username, "Sending login request");

        let res = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Self::rejection(res).await);
        }

        tracing::info!(%username, "Login accepted");
        Ok(())
    }

    async fn register(&self, name: &str, username: &str, password: &str) -> AuthResult<String> {
        let url = format!("{}/register", self.base_url);
        tracing::debug!(%url, %username, "Sending register request");

        let res = self
            .http
            .post(&url)
            .json(&RegisterRequest {
                name,
                username,
                password,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Self::rejection(res).await);
        }

        // Any 2xx is a success; a missing or non-JSON body is an empty confirmation.
        let body = res.text().await?;
        let confirmation = serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_default();

        tracing::info!(%username, "Registration accepted");
        Ok(confirmation)
    }
}
