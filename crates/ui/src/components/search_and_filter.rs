//! # Search & Filter Component
//!
//! Name search plus status/species/gender selects above the list grid.
//!
//! The control edits a local [`SearchDraft`] and navigates to the href the
//! draft hands back. It never fetches anything itself: the new route renders
//! a fresh list view. Typing is debounced; the selects navigate immediately.

use std::time::Duration;

use dioxus::prelude::*;

use catalog_core::{FilterState, Gender, SEARCH_DEBOUNCE_MS, SPECIES_PRESETS, SearchDraft, Status};

use crate::components::inputs::{SearchInput, Select, SelectOption};
use crate::hooks::use_debounce;
use crate::router::Route;

// ============================================================================
// Search & Filter Component
// ============================================================================

/// Properties for the SearchAndFilter component
#[derive(Props, Clone, PartialEq)]
pub struct SearchAndFilterProps {
    /// List state of the current route
    pub filter: FilterState,
}

/// Search box and filter selects
#[component]
pub fn SearchAndFilter(props: SearchAndFilterProps) -> Element {
    let navigator = use_navigator();
    let inbound = props.filter.clone();
    let mut draft = use_signal(|| SearchDraft::new(&inbound));

    let debounce = use_debounce(Duration::from_millis(SEARCH_DEBOUNCE_MS), move |()| {
        let target = draft.write().commit_name();
        if let Some(href) = target {
            tracing::debug!(%href, "Committing name search");
            navigator.push(Route::from_href(&href));
        }
    });

    // The route changed underneath the control (back/forward, pagination)
    let filter = props.filter.clone();
    use_effect(use_reactive!(|(filter,)| {
        if draft.peek().committed() != &filter {
            debounce.cancel();
            draft.write().sync(&filter);
        }
    }));

    let go = move |href: String| {
        debounce.cancel();
        tracing::debug!(%href, "Filter changed");
        navigator.push(Route::from_href(&href));
    };

    let current = draft.read().clone();
    let status_value = current.status.map(|s| s.as_query_value()).unwrap_or_default();
    let species_value = current.species.clone().unwrap_or_default();
    let gender_value = current.gender.map(|g| g.as_query_value()).unwrap_or_default();

    rsx! {
        section {
            class: "search-filter",

            SearchInput {
                value: current.name.clone(),
                placeholder: "Search characters by name...".to_string(),
                busy: debounce.is_pending(),
                on_input: move |value: String| {
                    draft.write().type_name(value);
                    debounce.schedule();
                },
                on_enter: move |_| {
                    let target = draft.write().commit_name();
                    if let Some(href) = target {
                        go(href);
                    }
                },
            }

            div {
                class: "filter-row",

                Select {
                    value: status_value.to_string(),
                    options: status_options(),
                    any_label: "Any Status".to_string(),
                    on_change: move |value: String| {
                        let href = draft.write().select_status(Status::from_query_value(&value));
                        go(href);
                    },
                }

                Select {
                    options: species_options(&species_value),
                    value: species_value,
                    any_label: "Any Species".to_string(),
                    on_change: move |value: String| {
                        let species = (!value.is_empty()).then_some(value);
                        let href = draft.write().select_species(species);
                        go(href);
                    },
                }

                Select {
                    value: gender_value.to_string(),
                    options: gender_options(),
                    any_label: "Any Gender".to_string(),
                    on_change: move |value: String| {
                        let href = draft.write().select_gender(Gender::from_query_value(&value));
                        go(href);
                    },
                }
            }

            if current.has_active_filters() {
                div {
                    class: "filter-actions",
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| {
                            let href = draft.write().clear();
                            go(href);
                        },
                        "✕ Clear Filters"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Entries of the status select (without the "any" entry)
pub fn status_options() -> Vec<SelectOption> {
    Status::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_query_value(), s.label()))
        .collect()
}

/// Entries of the species select (without the "any" entry).
///
/// A species from the address bar that is not a preset (or differs in case)
/// is appended as-is so the select still shows the active filter.
pub fn species_options(active: &str) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = SPECIES_PRESETS
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect();

    if !active.is_empty() && !options.iter().any(|opt| opt.value == active) {
        options.push(SelectOption::new(active, active));
    }
    options
}

/// Entries of the gender select (without the "any" entry)
pub fn gender_options() -> Vec<SelectOption> {
    Gender::ALL
        .iter()
        .map(|g| SelectOption::new(g.as_query_value(), g.label()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
