use dioxus::prelude::*;

/// Inline error block for failed reads
#[component]
pub fn ErrorAlert(title: String, message: String) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert",
            h4 { class: "alert-title", "{title}" }
            p { "{message}" }
        }
    }
}
