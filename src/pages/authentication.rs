use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::app::Route;
use crate::components::auth_view::AuthView;
use crate::state::{AppState, SessionState};

/// Route adapter: hands the shared auth handle to the view and moves on to
/// the landing page after a login.
#[component]
pub fn Authentication() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<SessionState>();
    let mut current_user = session.current_user;
    let nav = use_navigator();

    let on_login = move |username: String| {
        tracing::info!(%username, "Signed in, opening home");
        current_user.set(Some(username));
        nav.push(Route::Home {});
    };

    rsx! {
        div { class: "app",
            AuthView { auth: state.auth.clone(), on_login: on_login }
        }
    }
}
