//! # Authentication Form State
//!
//! Everything the sign in / sign up screen remembers between renders, and the
//! transitions a submit goes through. Kept free of Dioxus so the component is
//! a thin binding over it.

use crate::auth::AuthService;
use crate::models::{Field, Mode, Notification, NOTIFICATION_TIMEOUT};

/// Local state of the authentication screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub mode: Mode,
    /// Empty when there is nothing to show.
    pub error: String,
    pub notification: Notification,
}

/// Snapshot of what a submit sends, taken before the call is awaited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        username: String,
        password: String,
    },
    Register {
        name: String,
        username: String,
        password: String,
    },
}

/// What came back from the auth capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    LoggedIn { username: String },
    Registered { confirmation: String },
    Failed { message: String },
}

impl AuthForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Username => self.username = value,
            Field::Password => self.password = value,
        }
    }

    /// Only switches the variant; inputs, error and banner stay as they are.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The name input only exists while signing up.
    pub fn shows_name(&self) -> bool {
        self.mode == Mode::SignUp
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    pub fn request(&self) -> AuthRequest {
        match self.mode {
            Mode::SignIn => AuthRequest::Login {
                username: self.username.clone(),
                password: self.password.clone(),
            },
            Mode::SignUp => AuthRequest::Register {
                name: self.name.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
            },
        }
    }

    /// Folds an outcome back into the form.
    ///
    /// Returns the banner generation when a notification was shown, so the
    /// caller can schedule its auto-dismiss.
    pub fn apply(&mut self, outcome: &AuthOutcome) -> Option<u64> {
        match outcome {
            AuthOutcome::LoggedIn { .. } => None,
            AuthOutcome::Registered { confirmation } => {
                self.username.clear();
                self.password.clear();
                self.name.clear();
                let generation = self.notification.show(confirmation.as_str());
                self.error.clear();
                self.mode = Mode::SignIn;
                Some(generation)
            }
            AuthOutcome::Failed { message } => {
                self.error = message.clone();
                None
            }
        }
    }

    /// Request, await and apply in one go. The UI splits these steps so the
    /// form is not borrowed across the await.
    pub async fn submit(&mut self, service: &dyn AuthService) -> AuthOutcome {
        let outcome = self.request().perform(service).await;
        self.apply(&outcome);
        outcome
    }
}

/// Auto-dismiss timer for the banner shown as `generation`.
///
/// Sleeps for [`NOTIFICATION_TIMEOUT`], then hands the generation to `expire`
/// (normally [`Notification::expire`] on the live form) and returns whether
/// the banner was hidden by it.
pub async fn auto_dismiss(generation: u64, mut expire: impl FnMut(u64) -> bool) -> bool {
    tokio::time::sleep(NOTIFICATION_TIMEOUT).await;
    expire(generation)
}

impl AuthRequest {
    /// Calls the capability. Failures are never propagated; they become
    /// [`AuthOutcome::Failed`] with the text to show inline.
    pub async fn perform(self, service: &dyn AuthService) -> AuthOutcome {
        match self {
            AuthRequest::Login { username, password } => {
                match service.login(&username, &password).await {
                    Ok(()) => AuthOutcome::LoggedIn { username },
                    Err(e) => {
                        tracing::warn!(%username, error = %e, "Login failed");
                        AuthOutcome::Failed {
                            message: e.display_message(),
                        }
                    }
                }
            }
            AuthRequest::Register {
                name,
                username,
                password,
            } => match service.register(&name, &username, &password).await {
                Ok(confirmation) => AuthOutcome::Registered { confirmation },
                Err(e) => {
                    tracing::warn!(%username, error = %e, "Registration failed");
                    AuthOutcome::Failed {
                        message: e.display_message(),
                    }
                }
            },
        }
    }
}
