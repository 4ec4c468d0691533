use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::components::{mode_toggle::ModeToggle, snackbar::Snackbar, text_field::TextField};
use crate::form::{auto_dismiss, AuthForm, AuthOutcome};
use crate::models::{Field, Mode};

/// Sign in / sign up card.
///
/// Credential handling is delegated to `auth`. A successful login only fires
/// `on_login` with the username; where to go next is the caller's business.
#[component]
pub fn AuthView(auth: AuthHandle, on_login: EventHandler<String>) -> Element {
    let mut form = use_signal(AuthForm::default);

    // Not guarded against double submission: every click issues a call.
    let on_submit = move |_: MouseEvent| {
        let request = form.read().request();
        let auth = auth.clone();
        spawn(async move {
            let outcome = request.perform(auth.service()).await;
            let shown = form.write().apply(&outcome);

            if let AuthOutcome::LoggedIn { username } = outcome {
                on_login.call(username);
            }

            if let Some(generation) = shown {
                if auto_dismiss(generation, |g| form.write().notification.expire(g)).await {
                    tracing::debug!(generation, "Notification auto-dismissed");
                }
            }
        });
    };

    let snapshot = form.read().clone();
    let mode = snapshot.mode;

    rsx! {
        div { class: "card",
            div { class: "avatar",
                svg { view_box: "0 0 24 24",
                    path { d: "M12 1a5 5 0 0 0-5 5v3H6a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V11a2 2 0 0 0-2-2h-1V6a5 5 0 0 0-5-5zm-3 5a3 3 0 0 1 6 0v3H9V6z" }
                }
            }

            ModeToggle {
                active: mode,
                on_select: move |target: Mode| form.write().set_mode(target),
            }

            div { class: "form",
                if snapshot.shows_name() {
                    TextField {
                        id: "name",
                        label: "Full Name",
                        value: snapshot.value(Field::Name).to_string(),
                        autofocus: true,
                        on_input: move |v: String| form.write().set_field(Field::Name, v),
                    }
                }
                TextField {
                    id: "username",
                    label: "Username",
                    value: snapshot.value(Field::Username).to_string(),
                    autocomplete: "username",
                    autofocus: mode == Mode::SignIn,
                    on_input: move |v: String| form.write().set_field(Field::Username, v),
                }
                TextField {
                    id: "password",
                    label: "Password",
                    kind: "password",
                    value: snapshot.value(Field::Password).to_string(),
                    autocomplete: "current-password",
                    on_input: move |v: String| form.write().set_field(Field::Password, v),
                }

                if !snapshot.error.is_empty() {
                    p { class: "form-error", "{snapshot.error}" }
                }

                button {
                    r#type: "button",
                    class: "btn btn-primary btn-block",
                    onclick: on_submit,
                    "{mode.submit_label()}"
                }
            }
        }

        Snackbar {
            notification: snapshot.notification.clone(),
            on_close: move |_| form.write().dismiss_notification(),
        }
    }
}
