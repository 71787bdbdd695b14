pub mod app;
pub mod components;

pub use app::*;
pub use components::*;

pub use app::MAIN_CSS;
