use dioxus::prelude::*;
use dioxus_router::prelude::{use_navigator, Link};

use crate::app::Route;
use crate::state::{AppState, SessionState};

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<SessionState>();
    let mut current_user = session.current_user;
    let nav = use_navigator();

    let Some(username) = current_user.read().clone() else {
        return rsx! {
            div { class: "app",
                div { class: "card",
                    p { "You are not signed in." }
                    Link { to: Route::Authentication {}, "Go to sign in" }
                }
            }
        };
    };

    let api_url = state.config.api_base_url.clone();

    rsx! {
        div { class: "app",
            div { class: "card",
                h2 { "Welcome, {username}" }
                span { class: "meta", "Connected to {api_url}" }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    onclick: move |_| {
                        current_user.set(None);
                        nav.push(Route::Authentication {});
                    },
                    "Sign out"
                }
            }
        }
    }
}
