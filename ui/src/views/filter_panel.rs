#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::types::SortKey;

use crate::state::{Catalog, NOTES_PAGE};

fn touched(catalog: Catalog) {
    if catalog == Catalog::Notes {
        *NOTES_PAGE.write() = 1;
    }
}

/// Category and secondary checkboxes plus a minimum-rating slider.
#[component]
pub fn FilterPanel(catalog: Catalog, categories: Vec<String>, secondary: Vec<String>) -> Element {
    let filter = catalog.filter().read().clone();
    let min_score = filter.min_score;
    let can_clear = !filter.is_default();

    rsx! {
        aside { class: "filter-panel",
            div { class: "filter-header",
                h3 { "Filters" }
                if can_clear {
                    button {
                        class: "link-btn",
                        onclick: move |_| {
                            catalog.filter().write().clear();
                            touched(catalog);
                        },
                        "Clear filters"
                    }
                }
            }

            div { class: "filter-group",
                h4 { "{catalog.category_label()}" }
                for category in categories {
                    {
                        let checked = filter.selected_categories.contains(&category);
                        let value = category.clone();
                        rsx! {
                            label { key: "{category}", class: "filter-option",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onchange: move |_| {
                                        catalog.filter().write().toggle_category(&value);
                                        touched(catalog);
                                    },
                                }
                                span { "{category}" }
                            }
                        }
                    }
                }
            }

            div { class: "filter-group",
                h4 { "{catalog.secondary_label()}" }
                for item in secondary {
                    {
                        let checked = filter.selected_secondary.contains(&item);
                        let value = item.clone();
                        rsx! {
                            label { key: "{item}", class: "filter-option",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onchange: move |_| {
                                        catalog.filter().write().toggle_secondary(&value);
                                        touched(catalog);
                                    },
                                }
                                span { "{item}" }
                            }
                        }
                    }
                }
            }

            div { class: "filter-group",
                h4 { "Minimum rating: {min_score:.1}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "5",
                    step: "0.1",
                    value: "{min_score}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(v) = e.value().parse::<f64>() {
                            // Range inputs can report 4.800000000000001.
                            catalog.filter().write().min_score = (v * 10.0).round() / 10.0;
                            touched(catalog);
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn SortSelect(catalog: Catalog) -> Element {
    let current = catalog.filter().read().sort;

    rsx! {
        select {
            class: "sort-select",
            value: "{current.as_str()}",
            onchange: move |e: Event<FormData>| {
                match e.value().parse::<SortKey>() {
                    Ok(key) => catalog.filter().write().sort = key,
                    Err(err) => tracing::warn!("{}", err),
                }
            },
            for key in SortKey::ALL {
                option {
                    key: "{key.as_str()}",
                    value: "{key.as_str()}",
                    selected: key == current,
                    "{key.label()}"
                }
            }
        }
    }
}
