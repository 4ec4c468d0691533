//! # UI Components
//!
//! - [`auth_view::AuthView`] - the sign in / sign up card
//! - [`mode_toggle::ModeToggle`] - Sign In / Sign Up switch
//! - [`text_field::TextField`] - labelled input
//! - [`snackbar::Snackbar`] - transient banner

pub mod auth_view;
pub mod mode_toggle;
pub mod snackbar;
pub mod text_field;
