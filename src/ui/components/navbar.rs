use crate::ui::Route;
use dioxus::prelude::*;

use super::query_hooks::use_signed_in;
use super::toast::ToastHost;

/// Layout component with navigation links, page content and toasts
#[component]
pub fn Navbar() -> Element {
    let signed_in = use_signed_in();

    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "booker" }
            Link { to: Route::SearchPage {}, class: "navbar-link", "Search" }
            Link { to: Route::AccountPage {}, class: "navbar-link", "Account" }
            if !signed_in() {
                span { class: "navbar-status", "Not signed in" }
            }
        }
        main { class: "page", Outlet::<Route> {} }
        ToastHost {}
    }
}
