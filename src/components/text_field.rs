use dioxus::prelude::*;

/// Labelled input with an explicit value / `on_input` pair.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] kind: &'static str,
    #[props(default = "off")] autocomplete: &'static str,
    #[props(default)] autofocus: bool,
) -> Element {
    rsx! {
        div { class: "field",
            label { r#for: id, "{label} *" }
            input {
                class: "text",
                id: id,
                name: id,
                r#type: kind,
                required: true,
                autocomplete: autocomplete,
                autofocus: autofocus,
                value: "{value}",
                oninput: move |e: FormEvent| on_input.call(e.value()),
            }
        }
    }
}
