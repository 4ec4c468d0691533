pub mod app;
pub mod app_assets;
pub mod auth;
pub mod components;
pub mod config;
pub mod form;
pub mod models;
pub mod pages;
pub mod state;

pub use app::App;
pub use app::Route;
