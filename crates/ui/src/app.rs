//! Main Application Component for Multiverse Catalog
//!
//! The root component mounts the router. Every route renders inside
//! [`Shell`], which draws the top bar and puts an error boundary around the
//! page so no failure escapes a view unhandled.

use dioxus::prelude::*;

use crate::components::ErrorPanel;
use crate::router::Route;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Multiverse Catalog UI initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Layout shared by every route
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "app-container",

            TopBar {}

            main {
                class: "app-content",

                ErrorBoundary {
                    handle_error: |errors: ErrorContext| {
                        tracing::error!("View failed to render");
                        rsx! {
                            ErrorPanel {
                                on_retry: move |_| errors.clear_errors(),
                            }
                        }
                    },

                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Top bar with the application name
#[component]
fn TopBar() -> Element {
    let name = crate::NAME;

    rsx! {
        header {
            class: "topbar",
            Link {
                class: "topbar-brand",
                to: Route::home(),
                span { class: "topbar-logo", "🛸" }
                span { "{name}" }
            }
        }
    }
}
