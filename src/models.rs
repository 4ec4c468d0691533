use std::time::Duration;

/// How long the registration banner stays up unless dismissed first.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(4000);

/// Shown when a failed auth call carries no message of its own.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    SignIn,
    SignUp,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::SignIn => "Sign In",
            Mode::SignUp => "Sign Up",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::SignIn => "Login",
            Mode::SignUp => "Register",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Username,
    Password,
}

/// Transient success banner.
///
/// `generation` goes up every time the banner is shown. Auto-dismiss timers
/// remember the generation they were started for, so a timer left over from
/// an earlier registration cannot hide a newer banner early.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub visible: bool,
    pub generation: u64,
}

impl Notification {
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.text = text.into();
        self.visible = true;
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Timer path of `dismiss`. Returns whether the banner was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}
