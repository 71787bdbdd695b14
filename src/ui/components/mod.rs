pub mod account_page;
pub mod alert;
pub mod app;
pub mod filter_panel;
pub mod musician_card;
pub mod navbar;
pub mod pagination_bar;
pub mod query_hooks;
pub mod search_page;
pub mod toast;

pub use account_page::AccountPage;
pub use alert::ErrorAlert;
pub use app::App;
pub use filter_panel::FilterPanel;
pub use musician_card::MusicianCard;
pub use navbar::Navbar;
pub use pagination_bar::PaginationBar;
pub use search_page::SearchPage;
pub use toast::{use_toasts, ToastContext, ToastHost};
