use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use meetbridge_auth::auth::{AuthError, AuthHandle, AuthResult, AuthService};
use meetbridge_auth::form::{AuthForm, AuthOutcome};
use meetbridge_auth::models::{Field, Mode, UNEXPECTED_ERROR};

/// Replays queued results in order.
#[derive(Default)]
struct Replay {
    logins: Mutex<VecDeque<AuthResult<()>>>,
    registrations: Mutex<VecDeque<AuthResult<String>>>,
}

#[async_trait]
impl AuthService for Replay {
    async fn login(&self, _username: &str, _password: &str) -> AuthResult<()> {
        self.logins
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected login call")
    }

    async fn register(&self, _name: &str, _username: &str, _password: &str) -> AuthResult<String> {
        self.registrations
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected register call")
    }
}

fn type_into(form: &mut AuthForm, name: &str, username: &str, password: &str) {
    form.set_field(Field::Name, name.to_string());
    form.set_field(Field::Username, username.to_string());
    form.set_field(Field::Password, password.to_string());
}

#[tokio::test]
async fn sign_up_retry_then_sign_in() {
    let replay = Replay::default();
    replay.registrations.lock().unwrap().extend([
        Err(AuthError::rejected(409, "User already exists")),
        Ok("User Registered".to_string()),
    ]);
    replay.logins.lock().unwrap().push_back(Ok(()));
    let auth = AuthHandle::new(replay);

    let mut form = AuthForm::default();
    form.set_mode(Mode::SignUp);
    type_into(&mut form, "Ada Lovelace", "ada", "engine");

    form.submit(auth.service()).await;
    assert_eq!(form.error, "User already exists");
    assert_eq!(form.mode, Mode::SignUp);

    form.set_field(Field::Username, "ada2".into());
    let outcome = form.submit(auth.service()).await;
    assert_eq!(outcome, AuthOutcome::Registered { confirmation: "User Registered".into() });
    assert_eq!(form.mode, Mode::SignIn);
    assert!(form.error.is_empty());
    assert!(form.notification.visible);

    form.set_field(Field::Username, "ada2".into());
    form.set_field(Field::Password, "engine".into());
    let outcome = form.submit(auth.service()).await;
    assert_eq!(outcome, AuthOutcome::LoggedIn { username: "ada2".into() });
    // Still showing the registration banner; login does not touch it.
    assert!(form.notification.visible);
    assert_eq!(form.notification.text, "User Registered");
}

#[tokio::test]
async fn network_failure_shows_fallback_and_keeps_input() {
    let replay = Replay::default();
    replay
        .logins
        .lock()
        .unwrap()
        .push_back(Err(AuthError::InvalidResponse("connection reset".into())));

    let mut form = AuthForm::default();
    type_into(&mut form, "", "ada", "engine");
    form.submit(&replay).await;

    assert_eq!(form.error, UNEXPECTED_ERROR);
    assert_eq!(form.username, "ada");
    assert_eq!(form.password, "engine");
}

#[tokio::test]
async fn overlapping_submits_apply_in_completion_order() {
    let replay = Replay::default();
    replay.registrations.lock().unwrap().extend([
        Ok("first".to_string()),
        Ok("second".to_string()),
    ]);

    let mut form = AuthForm::default();
    form.set_mode(Mode::SignUp);
    type_into(&mut form, "Ada", "ada", "engine");

    // Two clicks before either call returns: both requests are snapshotted first.
    let first = form.request();
    let second = form.request();
    let first_outcome = first.perform(&replay).await;
    let second_outcome = second.perform(&replay).await;

    let first_generation = form.apply(&first_outcome).unwrap();
    let second_generation = form.apply(&second_outcome).unwrap();

    assert_eq!(form.notification.text, "second");
    // The first banner's timer firing must not hide the second banner.
    assert!(!form.notification.expire(first_generation));
    assert!(form.notification.visible);
    assert!(form.notification.expire(second_generation));
    assert!(!form.notification.visible);
}
