use dioxus::prelude::*;

use crate::models::Mode;

#[component]
pub fn ModeToggle(active: Mode, on_select: EventHandler<Mode>) -> Element {
    rsx! {
        div { class: "tabs",
            for mode in [Mode::SignIn, Mode::SignUp] {
                button {
                    key: "{mode.label()}",
                    r#type: "button",
                    class: if active == mode { "tab active" } else { "tab" },
                    onclick: move |_| on_select.call(mode),
                    "{mode.label()}"
                }
            }
        }
    }
}
