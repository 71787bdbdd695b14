use crate::api::{use_api_store, Musician, MusicianId, QueryKey, QueryState};
use crate::config::use_config;
use crate::view_model::{Debouncer, FilterOptions, SearchViewModel};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::debug;

use super::alert::ErrorAlert;
use super::filter_panel::FilterPanel;
use super::musician_card::MusicianCard;
use super::pagination_bar::PaginationBar;
use super::query_hooks::use_refetch_on_invalidate;
use super::toast::use_toasts;

/// Search and browse page for musicians
#[component]
pub fn SearchPage() -> Element {
    let store = use_api_store();
    let config = use_config();
    let toasts = use_toasts();

    let mut view_model = use_signal(|| SearchViewModel::new(config.page_size));
    let mut search_text = use_signal(String::new);

    let musicians = {
        let store = store.clone();
        use_resource(move || {
            let store = store.clone();
            async move { store.musicians(false).await }
        })
    };
    use_refetch_on_invalidate(QueryKey::Musicians, musicians);

    // Settled search text flows into the view-model once typing pauses
    let debouncer = use_hook(|| {
        let (debouncer, mut settled) = Debouncer::<String>::new(config.search_debounce);
        spawn(async move {
            while let Some(text) = settled.recv().await {
                debug!("Applying search {:?}", text);
                view_model.write().set_search(text);
            }
        });
        Rc::new(debouncer)
    });

    let on_search = {
        let debouncer = debouncer.clone();
        move |text: String| {
            search_text.set(text.clone());
            debouncer.push(text);
        }
    };

    let on_clear = {
        let debouncer = debouncer.clone();
        move |_: ()| {
            debouncer.cancel();
            search_text.set(String::new());
            view_model.write().reset_filters();
        }
    };

    let on_add = use_callback(move |musician_id: MusicianId| {
        let store = store.clone();
        spawn(async move {
            match store.add_to_prospects(musician_id).await {
                Ok(_) => toasts.success("Successfully added musician to prospect list"),
                Err(failure) => toasts.error(failure.message_or("Failed to add to prospects")),
            }
        });
    });

    let state = musicians
        .value()
        .read()
        .clone()
        .unwrap_or(QueryState::Pending);
    let list: Vec<Musician> = state.data().cloned().unwrap_or_default();
    let options = FilterOptions::from_musicians(&list);
    let view = view_model.read().view(&list);

    rsx! {
        div { class: "search-page",
            FilterPanel {
                view_model,
                options,
                search_text: search_text(),
                on_search,
                on_clear,
            }

            div { class: "results",
                if state.is_pending() {
                    div { class: "spinner-wrap",
                        div { class: "spinner" }
                    }
                } else if let Some(failure) = state.failure() {
                    ErrorAlert {
                        title: "Error".to_string(),
                        message: failure.message_or("Failed to load musicians"),
                    }
                } else if view.match_count == 0 {
                    p { class: "empty", "No musicians match these filters." }
                } else {
                    p { class: "result-count", "{view.match_count} musicians" }
                    div { class: "card-grid",
                        for musician in view.page.items.clone() {
                            MusicianCard {
                                key: "{musician.id}",
                                musician,
                                on_add,
                            }
                        }
                    }
                    PaginationBar {
                        current: view.page.page,
                        total_pages: view.page.total_pages,
                        on_select: move |page: usize| view_model.write().set_page(page),
                    }
                }
            }
        }
    }
}
