use dioxus::prelude::*;

use crate::app_assets::head_nodes;
use crate::auth::{AuthHandle, HttpAuthService};
use crate::config::AppConfig;
use crate::pages::{authentication::Authentication, home::Home};
use crate::state::{AppState, SessionState};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Authentication {},
    #[route("/home")]
    Home {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = AppConfig::from_env();
        let auth = AuthHandle::new(HttpAuthService::new(config.api_base_url.clone()));
        AppState { config, auth }
    });

    let current_user = use_signal(|| Option::<String>::None);
    use_context_provider(|| SessionState { current_user });

    rsx! {
        { head_nodes() }
        Router::<Route> {}
    }
}
