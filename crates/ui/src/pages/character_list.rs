//! Character List Page
//!
//! The landing page: search & filter bar, character grid and pagination.
//! Everything it shows comes from the list route's query component; the
//! page never keeps filter state of its own.

use dioxus::prelude::*;

use catalog_client::{CatalogClient, ListOutcome};
use catalog_core::{CharacterPage, FilterState};

use crate::components::{
    CharacterCard, CharactersLoading, EmptyState, ErrorAlert, PaginationControls, SearchAndFilter,
};
use crate::router::ListQuery;

/// Shown when a list page fails to load
pub const LIST_ERROR_MESSAGE: &str =
    "There was a problem fetching the characters. Please try again later.";

// ============================================================================
// List Page
// ============================================================================

/// Route component for `/`
#[component]
pub fn ListPage(query: ListQuery) -> Element {
    let client = use_context::<CatalogClient>();

    let mut outcome = use_resource(use_reactive!(|(query,)| {
        let client = client.clone();
        async move {
            tracing::debug!(query = %query, "Loading character list");
            let outcome = client.load_page(&query.0).await;
            if let ListOutcome::Failure(err) = &outcome {
                tracing::error!(error = %err, "Character list failed to load");
            }
            outcome
        }
    }));

    let filter = query.0.clone();
    let loading = *outcome.state().read() == UseResourceState::Pending;

    let body = match list_body(outcome.cloned(), loading) {
        ListBody::Loading => rsx! { CharactersLoading {} },
        ListBody::Failure => rsx! {
            ErrorAlert {
                message: LIST_ERROR_MESSAGE.to_string(),
                on_retry: move |_| outcome.restart(),
            }
        },
        ListBody::Empty => rsx! { EmptyState {} },
        ListBody::Results(page) => rsx! {
            CharacterResults { page, filter: filter.clone() }
        },
    };

    rsx! {
        div {
            class: "container",

            header {
                class: "page-header",
                h1 { "Rick and Morty Universe" }
                p {
                    class: "lead muted",
                    "Explore characters from the multiverse of Rick and Morty. Search, filter, and click on any character to view more details."
                }

                SearchAndFilter { filter: filter.clone() }
            }

            {body}
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Grid, pagination and count for a page with at least one character
#[component]
fn CharacterResults(page: CharacterPage, filter: FilterState) -> Element {
    let count = showing_label(page.characters.len(), page.info.total_count);

    rsx! {
        div {
            class: "character-grid",
            for character in page.characters.iter() {
                CharacterCard {
                    key: "{character.id}",
                    character: character.clone(),
                    filter: filter.clone(),
                }
            }
        }

        PaginationControls {
            filter: filter.clone(),
            total_pages: page.info.total_pages,
        }

        p { class: "result-count muted", "{count}" }
    }
}

/// What the list area shows below the search bar
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Loading,
    Failure,
    Empty,
    Results(CharacterPage),
}

/// Pick the list body for the latest outcome. A refetch in flight shows
/// the skeleton even when an older outcome is still held.
pub fn list_body(outcome: Option<ListOutcome>, loading: bool) -> ListBody {
    match outcome {
        None => ListBody::Loading,
        Some(_) if loading => ListBody::Loading,
        Some(ListOutcome::Failure(_)) => ListBody::Failure,
        Some(ListOutcome::Empty) => ListBody::Empty,
        Some(ListOutcome::Results(page)) => ListBody::Results(page),
    }
}

/// "Showing N of M characters"
pub fn showing_label(shown: usize, total: u32) -> String {
    format!("Showing {} of {} characters", shown, total)
}

// ============================================================================
// Tests
// ============================================================================
