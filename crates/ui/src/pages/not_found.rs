//! Not Found Page
//!
//! Catch-all for addresses no route matches.

use dioxus::prelude::*;

use crate::router::Route;

/// Route component for any unknown path
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div {
            class: "full-panel",

            h2 { "Page Not Found" }
            p { class: "muted", "Nothing lives at {path} in this dimension." }

            Link {
                class: "btn btn-primary",
                to: Route::home(),
                "Return to All Characters"
            }
        }
    }
}
