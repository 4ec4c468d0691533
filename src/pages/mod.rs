pub mod authentication;
pub mod home;
