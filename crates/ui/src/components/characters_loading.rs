//! # Loading Skeletons
//!
//! Placeholders shown while a list page or a character is being fetched.

use dioxus::prelude::*;

/// Number of placeholder cards in the list skeleton
pub const SKELETON_CARDS: usize = 8;

/// Skeleton of the character grid
#[component]
pub fn CharactersLoading() -> Element {
    rsx! {
        div {
            class: "character-grid",
            aria_busy: "true",

            for index in 0..SKELETON_CARDS {
                div {
                    key: "{index}",
                    class: "card skeleton-card",

                    div { class: "skeleton skeleton-media" }

                    div {
                        class: "card-body",
                        div {
                            class: "card-title-row",
                            div { class: "skeleton skeleton-line w-3-4" }
                            div { class: "skeleton skeleton-line w-16" }
                        }
                        div { class: "skeleton skeleton-line w-full" }
                        div { class: "skeleton skeleton-line w-2-3" }
                    }

                    div {
                        class: "card-footer",
                        div { class: "skeleton skeleton-button" }
                    }
                }
            }
        }
    }
}

/// Skeleton of the character detail page
#[component]
pub fn DetailLoading() -> Element {
    rsx! {
        div {
            class: "detail",
            aria_busy: "true",

            div { class: "skeleton skeleton-line w-40" }

            div {
                class: "detail-grid",

                div { class: "skeleton skeleton-portrait" }

                div {
                    class: "detail-info",
                    div { class: "skeleton skeleton-heading" }
                    div {
                        class: "badge-row",
                        div { class: "skeleton skeleton-badge" }
                        div { class: "skeleton skeleton-badge" }
                    }
                    div { class: "skeleton skeleton-panel" }
                    div {
                        class: "button-row",
                        div { class: "skeleton skeleton-button w-40" }
                        div { class: "skeleton skeleton-button w-40" }
                    }
                }
            }
        }
    }
}
