//! # Character Card Component
//!
//! One cell of the list grid. The card links to the character's detail
//! view and carries the list state along so the detail view can link back.
//!
//! ## Features
//!
//! - Staggered fade-in keyed on the character id
//! - Status dot and, on hover, status pill and id badge
//! - "View Details" link that shows a spinner once clicked

use dioxus::prelude::*;

use catalog_core::{CharacterSummary, FilterState, Status, detail_href};

use crate::router::Route;

// ============================================================================
// Constants
// ============================================================================

/// Base delay before a card fades in
pub const APPEAR_BASE_DELAY_MS: u32 = 100;

/// Extra delay per step of the stagger
pub const APPEAR_STEP_MS: u32 = 50;

/// Number of distinct stagger steps
pub const APPEAR_STEPS: u32 = 20;

// ============================================================================
// Character Card Component
// ============================================================================

/// Properties for the CharacterCard component
#[derive(Props, Clone, PartialEq)]
pub struct CharacterCardProps {
    /// Character to display
    pub character: CharacterSummary,

    /// List state the card is rendered under
    pub filter: FilterState,
}

/// A single character in the list grid
#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let mut is_hovered = use_signal(|| false);
    let mut is_opening = use_signal(|| false);

    let character = &props.character;
    let target = Route::from_href(&detail_href(character.id, &props.filter));
    let status_class = status_dot_class(character.status);
    let delay = appear_delay_ms(character.id);
    let hovered = is_hovered();

    rsx! {
        article {
            class: if hovered { "card character-card hovered {status_class}" } else { "card character-card" },
            style: "animation-delay: {delay}ms;",
            onmouseenter: move |_| is_hovered.set(true),
            onmouseleave: move |_| is_hovered.set(false),

            // Image with hover overlays
            div {
                class: "card-media",

                img {
                    src: "{character.image}",
                    alt: "{character.name}",
                }

                if hovered {
                    div {
                        class: "pill pill-status",
                        span { class: "status-dot {status_class}" }
                        span { "{character.status}" }
                    }

                    div {
                        class: "pill pill-id",
                        "#{character.id}"
                    }
                }
            }

            // Body
            div {
                class: "card-body",

                div {
                    class: "card-title-row",
                    h2 { class: "card-title", title: "{character.name}", "{character.name}" }
                    if !hovered {
                        div {
                            class: "card-status",
                            span { class: "status-dot {status_class}" }
                            span { "{character.status}" }
                        }
                    }
                }

                p {
                    class: "card-line",
                    span { class: "card-line-label", "Species: " }
                    "{character.species}"
                }
                p {
                    class: "card-line",
                    span { class: "card-line-label", "Location: " }
                    "{character.location}"
                }
            }

            // Footer
            div {
                class: "card-footer",
                Link {
                    class: "btn btn-primary btn-block",
                    to: target,
                    onclick: move |_| is_opening.set(true),
                    if is_opening() {
                        span { class: "spinner" }
                        "Loading..."
                    } else {
                        "View Details"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// CSS class of the status indicator dot
pub fn status_dot_class(status: Status) -> &'static str {
    match status {
        Status::Alive => "status-alive",
        Status::Dead => "status-dead",
        Status::Unknown => "status-unknown",
    }
}

/// Fade-in delay for a card, staggered by id so neighbours don't appear at
/// the same instant
pub fn appear_delay_ms(id: u32) -> u32 {
    APPEAR_BASE_DELAY_MS + (id % APPEAR_STEPS) * APPEAR_STEP_MS
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_dot_class() {
        assert_eq!(status_dot_class(Status::Alive), "status-alive");
        assert_eq!(status_dot_class(Status::Dead), "status-dead");
        assert_eq!(status_dot_class(Status::Unknown), "status-unknown");
    }

    #[test]
    fn test_appear_delay_staggers_by_id() {
        assert_eq!(appear_delay_ms(0), 100);
        assert_eq!(appear_delay_ms(1), 150);
        assert_eq!(appear_delay_ms(19), 1050);
        assert_eq!(appear_delay_ms(20), 100);
    }
}
