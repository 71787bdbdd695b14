// Library exports for integration tests and reusable components

pub mod api;
pub mod config;
pub mod view_model;

#[doc(hidden)]
pub mod ui;

pub use api::ApiStore;
pub use config::Config;
