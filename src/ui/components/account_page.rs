use crate::api::{use_api_store, FailureKind, MusicianId, QueryKey, QueryState};
use dioxus::prelude::*;

use super::alert::ErrorAlert;
use super::query_hooks::use_refetch_on_invalidate;
use super::toast::use_toasts;

/// Profile info and the user's prospect musicians
#[component]
pub fn AccountPage() -> Element {
    let store = use_api_store();
    let toasts = use_toasts();

    // Always hit the server when the page mounts
    let user = {
        let store = store.clone();
        use_resource(move || {
            let store = store.clone();
            async move { store.current_user(true).await }
        })
    };
    use_refetch_on_invalidate(QueryKey::CurrentUser, user);

    let on_remove = {
        let store = store.clone();
        use_callback(move |musician_id: MusicianId| {
            let store = store.clone();
            spawn(async move {
                match store.remove_musician(musician_id).await {
                    Ok(_) => toasts.success("You have removed the musician successfully."),
                    Err(failure) => toasts.error(
                        failure.message_or("Failed to remove musician. Please try again."),
                    ),
                }
            });
        })
    };

    let on_logout = move |_: MouseEvent| store.logout();

    let state = user.value().read().clone().unwrap_or(QueryState::Pending);

    match state {
        QueryState::Pending => rsx! {
            div { class: "container",
                div { class: "skeleton",
                    div { class: "skeleton-line skeleton-title" }
                    div { class: "skeleton-line skeleton-wide" }
                    div { class: "skeleton-line skeleton-narrow" }
                }
            }
        },
        QueryState::Failure(failure) => {
            let fallback = if failure.kind == FailureKind::Authentication {
                "Please sign in to view your account"
            } else {
                "Failed to load account information"
            };
            rsx! {
                div { class: "container",
                    ErrorAlert { title: "Error".to_string(), message: failure.message_or(fallback) }
                }
            }
        }
        QueryState::Success(user) => rsx! {
            div { class: "container",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Account Details" }
                        button { class: "button button-secondary", onclick: on_logout, "Logout" }
                    }
                    div { class: "card-body",
                        section {
                            h3 { class: "section-title", "Profile Information" }
                            p { "Name: {user.display_name()}" }
                            p { "Email: {user.email}" }
                        }
                        section {
                            h3 { class: "section-title", "Added Musicians" }
                            if user.musicians.is_empty() {
                                p { class: "muted", "You haven't added any musicians." }
                            } else {
                                ul { class: "prospect-list",
                                    for musician in user.musicians.clone() {
                                        li { key: "{musician.id}", class: "prospect",
                                            p { class: "prospect-name", "{musician.act_name}" }
                                            p { class: "muted", "Genre: {musician.genre}" }
                                            button {
                                                class: "button button-outline button-small",
                                                onclick: move |_| on_remove.call(musician.id),
                                                "Unadd Musician"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
