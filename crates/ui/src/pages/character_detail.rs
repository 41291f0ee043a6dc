//! Character Detail Page
//!
//! One character's profile. The back links are rebuilt from the route's
//! return context, so the user lands on the exact list page they left.

use dioxus::prelude::*;

use catalog_client::{CatalogClient, DetailOutcome};
use catalog_core::{CharacterDetail, CharacterId, Status, back_href};

use crate::components::{DetailLoading, ErrorPanel, NotFoundPanel};
use crate::router::{DetailQuery, Route};

// ============================================================================
// Detail Page
// ============================================================================

/// Route component for `/character/:id`
#[component]
pub fn DetailPage(id: CharacterId, query: DetailQuery) -> Element {
    let client = use_context::<CatalogClient>();

    let mut outcome = use_resource(use_reactive!(|(id,)| {
        let client = client.clone();
        async move {
            tracing::debug!(id, "Loading character");
            let outcome = client.load_character(id).await;
            if let DetailOutcome::Failure(err) = &outcome {
                tracing::error!(id, error = %err, "Character failed to load");
            }
            outcome
        }
    }));

    let back = Route::from_href(&back_href(&query.0));
    let loading = *outcome.state().read() == UseResourceState::Pending;

    match outcome.cloned() {
        Some(_) if loading => rsx! { DetailLoading {} },
        None => rsx! { DetailLoading {} },
        Some(DetailOutcome::NotFound) => rsx! { NotFoundPanel {} },
        Some(DetailOutcome::Failure(_)) => rsx! {
            ErrorPanel { on_retry: move |_| outcome.restart() }
        },
        Some(DetailOutcome::Found(character)) => rsx! {
            CharacterProfile { character, back }
        },
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Loaded character with its back links
#[component]
fn CharacterProfile(character: CharacterDetail, back: Route) -> Element {
    let first_seen = first_seen_label(&character);
    let episodes = character.episode_count();
    let status_class = status_badge_class(character.status);

    rsx! {
        div {
            class: "container detail",

            Link {
                class: "back-link",
                to: back.clone(),
                "← Back to Characters"
            }

            div {
                class: "detail-grid",

                div {
                    class: "detail-portrait",
                    img { src: "{character.image}", alt: "{character.name}" }
                }

                div {
                    class: "detail-info",

                    div {
                        h1 { "{character.name}" }
                        div {
                            class: "badge-row",
                            span { class: "badge {status_class}", "{character.status}" }
                            span { class: "badge badge-outline", "{character.species}" }
                            if let Some(kind) = &character.kind {
                                span { class: "badge badge-outline", "{kind}" }
                            }
                        }
                    }

                    div {
                        class: "card detail-facts",
                        Fact { label: "Gender", value: character.gender.to_string() }
                        Fact { label: "Origin", value: character.origin.clone() }
                        Fact { label: "Last Known Location", value: character.location.clone() }
                        Fact { label: "First Seen In", value: first_seen }
                        Fact { label: "Total Episodes", value: episodes.to_string() }
                    }

                    div {
                        class: "button-row",
                        Link {
                            class: "btn btn-primary",
                            to: back,
                            "Back to All Characters"
                        }
                        if let Some(url) = character.first_episode() {
                            a {
                                class: "btn btn-outline",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "View First Episode"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One labelled line of the facts card
#[component]
fn Fact(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "fact",
            h2 { class: "fact-label", "{label}" }
            p { class: "fact-value", "{value}" }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// "Episode N" for the first appearance
pub fn first_seen_label(character: &CharacterDetail) -> String {
    match character.first_episode_number() {
        Some(number) => format!("Episode {}", number),
        None => "Unknown".to_string(),
    }
}

/// CSS class of the status badge
pub fn status_badge_class(status: Status) -> &'static str {
    match status {
        Status::Alive => "badge-alive",
        Status::Dead => "badge-dead",
        Status::Unknown => "badge-muted",
    }
}

// ============================================================================
// Tests
// ============================================================================
