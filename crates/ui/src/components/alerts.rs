//! # Alert Components
//!
//! Terminal states of the list and detail views.
//!
//! - **EmptyState**: the filters matched nothing (not an error)
//! - **ErrorAlert**: a list page failed to load, with a retry button
//! - **ErrorPanel**: full-page failure with retry and home actions
//! - **NotFoundPanel**: the requested character does not exist

use dioxus::prelude::*;

use crate::router::Route;

// ============================================================================
// Empty State
// ============================================================================

/// Soft empty state for a filter combination with no matches
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div {
            class: "empty-state",
            h2 { "No characters found" }
            p { class: "muted", "Try adjusting your search or filter criteria." }
        }
    }
}

// ============================================================================
// Error Alert
// ============================================================================

/// Properties for the ErrorAlert component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorAlertProps {
    /// Alert body
    pub message: String,

    /// Re-issue the failed fetch
    pub on_retry: EventHandler<()>,
}

/// Inline failure notice above the list
#[component]
pub fn ErrorAlert(props: ErrorAlertProps) -> Element {
    rsx! {
        div {
            class: "alert alert-error",
            role: "alert",

            div {
                class: "alert-body",
                strong { class: "alert-title", "⚠ Error" }
                p { "{props.message}" }
            }

            button {
                class: "btn btn-outline btn-sm",
                onclick: move |_| props.on_retry.call(()),
                "↻ Try again"
            }
        }
    }
}

// ============================================================================
// Error Panel
// ============================================================================

/// Properties for the ErrorPanel component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorPanelProps {
    /// Heading
    #[props(default = "Something went wrong!".to_string())]
    pub title: String,

    /// Explanation under the heading
    #[props(default = "We encountered an error while loading the data. This could be due to a network issue or a problem with the API.".to_string())]
    pub message: String,

    /// Re-run whatever failed
    pub on_retry: EventHandler<()>,
}

/// Full-page failure state: retry or go home
#[component]
pub fn ErrorPanel(props: ErrorPanelProps) -> Element {
    rsx! {
        div {
            class: "full-panel",
            role: "alert",

            div { class: "full-panel-icon", "⚠" }
            h2 { "{props.title}" }
            p { class: "muted", "{props.message}" }

            div {
                class: "button-row",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| props.on_retry.call(()),
                    "↻ Try again"
                }
                Link {
                    class: "btn btn-outline",
                    to: Route::home(),
                    "Go to Home"
                }
            }
        }
    }
}

// ============================================================================
// Not Found Panel
// ============================================================================

/// Dedicated page for a character id the remote does not know
#[component]
pub fn NotFoundPanel() -> Element {
    rsx! {
        div {
            class: "full-panel",

            h2 { "Character Not Found" }
            p { class: "muted", "The character you're looking for doesn't exist in this dimension." }

            Link {
                class: "btn btn-primary",
                to: Route::home(),
                "Return to All Characters"
            }
        }
    }
}
