use dioxus::prelude::*;

fn page_button_class(page: usize, current: usize) -> &'static str {
    if page == current {
        "page-button page-button-current"
    } else {
        "page-button"
    }
}

#[component]
pub fn PaginationBar(current: usize, total_pages: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "pagination",
            for page in 1..=total_pages {
                button {
                    key: "{page}",
                    class: page_button_class(page, current),
                    onclick: move |_| on_select.call(page),
                    "{page}"
                }
            }
        }
    }
}
