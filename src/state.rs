use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::config::AppConfig;

/// Services shared by the route pages.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub auth: AuthHandle,
}

#[derive(Clone, Copy)]
pub struct SessionState {
    /// Username of the last successful login, for the landing page.
    pub current_user: Signal<Option<String>>,
}
