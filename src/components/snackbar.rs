use dioxus::prelude::*;

use crate::models::Notification;

/// Bottom-left banner. Renders nothing while hidden; timing is up to the owner.
#[component]
pub fn Snackbar(notification: Notification, on_close: EventHandler<()>) -> Element {
    if !notification.visible {
        return rsx! {};
    }

    rsx! {
        div { class: "snackbar", role: "status",
            span { class: "message", "{notification.text}" }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| on_close.call(()),
                "✖"
            }
        }
    }
}
