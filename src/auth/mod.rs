//! # Auth Capability
//!
//! The login/register functions the authentication screen delegates to.
//!
//! - [`AuthService`] - the capability itself
//! - [`AuthHandle`] - cloneable handle passed to components as a prop
//! - [`HttpAuthService`] - implementation backed by the user service HTTP API

mod client;
mod error;
mod types;

use std::sync::Arc;

use async_trait::async_trait;

pub use client::HttpAuthService;
pub use error::{AuthError, AuthResult};

/// External login/register capability.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Signs an existing user in.
    async fn login(&self, username: &str, password: &str) -> AuthResult<()>;

    /// Creates an account and returns the backend's confirmation text.
    async fn register(&self, name: &str, username: &str, password: &str) -> AuthResult<String>;
}

/// Shared handle to an [`AuthService`].
///
/// Component props must be `Clone + PartialEq`; two handles are equal when
/// they point at the same service instance.
#[derive(Clone)]
pub struct AuthHandle(Arc<dyn AuthService>);

impl AuthHandle {
    pub fn new(service: impl AuthService + 'static) -> Self {
        Self(Arc::new(service))
    }

    pub fn service(&self) -> &dyn AuthService {
        self.0.as_ref()
    }
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for AuthHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthHandle").finish_non_exhaustive()
    }
}
