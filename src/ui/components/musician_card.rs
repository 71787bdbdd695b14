use crate::api::{Musician, MusicianId};
use dioxus::prelude::*;

/// Card in the search results grid
#[component]
pub fn MusicianCard(musician: Musician, on_add: EventHandler<MusicianId>) -> Element {
    let id = musician.id;
    let (status_class, status_label) = if musician.active {
        ("badge badge-active", "Active")
    } else {
        ("badge badge-inactive", "Inactive")
    };

    rsx! {
        div { class: "card musician-card",
            div { class: "card-header",
                h3 { class: "card-title", "{musician.act_name}" }
                span { class: "{status_class}", "{status_label}" }
            }
            div { class: "card-body",
                p { "Genre: {musician.genre}" }
                p { "Location: {musician.homebase}" }
                p { "Venue Capacity: {musician.average_venue_capacity}" }
                p { "Agent: {musician.agent}" }
                p { "Agency: {musician.agency}" }
            }
            div { class: "card-footer",
                button {
                    class: "button button-primary button-block",
                    onclick: move |_| on_add.call(id),
                    "Add to Prospects"
                }
            }
        }
    }
}
