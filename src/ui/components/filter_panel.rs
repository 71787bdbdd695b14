use crate::view_model::{
    option_from_value, ActiveFilter, CapacityRange, FilterOptions, SearchViewModel,
};
use crate::view_model::filter::{CAPACITY_MAX, CAPACITY_MIN};
use dioxus::prelude::*;

/// Search box plus select and range filters.
///
/// The search box only reports raw keystrokes through `on_search`; the
/// caller decides when they reach the view-model.
#[component]
pub fn FilterPanel(
    view_model: Signal<SearchViewModel>,
    options: FilterOptions,
    search_text: String,
    on_search: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let mut view_model = view_model;
    let criteria = view_model.read().criteria().clone();
    let genre = criteria.genre.clone().unwrap_or_default();
    let homebase = criteria.homebase.clone().unwrap_or_default();
    let agent = criteria.agent.clone().unwrap_or_default();
    let agency = criteria.agency.clone().unwrap_or_default();
    let active = criteria.active.as_value();
    let capacity = criteria.capacity;

    rsx! {
        div { class: "filter-panel",
            input {
                class: "input input-search",
                r#type: "search",
                placeholder: "Search musicians...",
                value: "{search_text}",
                oninput: move |evt: FormEvent| on_search.call(evt.value()),
            }

            div { class: "filter-grid",
                label { class: "field",
                    span { class: "field-label", "Genre" }
                    select {
                        class: "input",
                        value: "{genre}",
                        onchange: move |evt: FormEvent| {
                            view_model.write().set_genre(option_from_value(evt.value()));
                        },
                        option { value: "", "All Genres" }
                        for g in options.genres.clone() {
                            option { key: "{g}", value: "{g}", "{g}" }
                        }
                    }
                }

                label { class: "field",
                    span { class: "field-label", "Location" }
                    select {
                        class: "input",
                        value: "{homebase}",
                        onchange: move |evt: FormEvent| {
                            view_model.write().set_homebase(option_from_value(evt.value()));
                        },
                        option { value: "", "All Locations" }
                        for location in options.homebases.clone() {
                            option { key: "{location}", value: "{location}", "{location}" }
                        }
                    }
                }

                label { class: "field",
                    span { class: "field-label", "Status" }
                    select {
                        class: "input",
                        value: "{active}",
                        onchange: move |evt: FormEvent| {
                            view_model.write().set_active(ActiveFilter::from_value(&evt.value()));
                        },
                        option { value: "", "All Status" }
                        option { value: "true", "Active" }
                        option { value: "false", "Inactive" }
                    }
                }

                label { class: "field",
                    span { class: "field-label", "Agent" }
                    select {
                        class: "input",
                        value: "{agent}",
                        onchange: move |evt: FormEvent| {
                            view_model.write().set_agent(option_from_value(evt.value()));
                        },
                        option { value: "", "All Agents" }
                        for a in options.agents.clone() {
                            option { key: "{a}", value: "{a}", "{a}" }
                        }
                    }
                }

                label { class: "field",
                    span { class: "field-label", "Agency" }
                    select {
                        class: "input",
                        value: "{agency}",
                        onchange: move |evt: FormEvent| {
                            view_model.write().set_agency(option_from_value(evt.value()));
                        },
                        option { value: "", "All Agencies" }
                        for a in options.agencies.clone() {
                            option { key: "{a}", value: "{a}", "{a}" }
                        }
                    }
                }

                div { class: "field field-wide",
                    span { class: "field-label",
                        "Venue Capacity Range: {capacity.min} – {capacity.max}"
                    }
                    input {
                        class: "range",
                        r#type: "range",
                        min: "{CAPACITY_MIN}",
                        max: "{CAPACITY_MAX}",
                        step: "100",
                        value: "{capacity.min}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(min) = evt.value().parse::<u32>() {
                                let max = view_model.read().criteria().capacity.max;
                                view_model.write().set_capacity(CapacityRange::new(min, max));
                            }
                        },
                    }
                    input {
                        class: "range",
                        r#type: "range",
                        min: "{CAPACITY_MIN}",
                        max: "{CAPACITY_MAX}",
                        step: "100",
                        value: "{capacity.max}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(max) = evt.value().parse::<u32>() {
                                let min = view_model.read().criteria().capacity.min;
                                view_model.write().set_capacity(CapacityRange::new(min, max));
                            }
                        },
                    }
                }

                button {
                    class: "button button-secondary",
                    onclick: move |_| on_clear.call(()),
                    "Clear filters"
                }
            }
        }
    }
}
