//! # Catalog UI
//!
//! Dioxus Desktop UI for Multiverse Catalog.
//!
//! This crate renders the character catalog: a searchable, filterable,
//! paginated list and a detail page per character. The address bar is the
//! only state shared between views; see [`router::Route`].
//!
//! ## Features
//!
//! - Debounced name search and filter selects
//! - Page strip with ellipses that keeps every active filter
//! - Detail pages that link back to the exact list page they were opened from
//! - Loading skeletons, empty, error and not-found states
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod router;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use catalog_client;
pub use catalog_core;

pub use app::App;
pub use router::{DetailQuery, ListQuery, Route};

use catalog_client::CatalogClient;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Multiverse Catalog";

/// Application display title
pub const TITLE: &str = "Multiverse Catalog - Rick and Morty Characters";

/// CSS styles for the application, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Multiverse Catalog desktop application
///
/// The client is handed to every view as root context; views never build
/// their own, so they all share one connection pool and one cache.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     let client = CatalogClient::new(&ClientConfig::from_env()?)?;
///     catalog_ui::launch(client);
///     Ok(())
/// }
/// ```
pub fn launch(client: CatalogClient) {
    tracing::info!("Starting {} v{}", NAME, VERSION);
    tracing::info!(base_url = %client.base_url(), "Using character API");

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(420.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(client)
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".character-grid"));
        assert!(STYLES.contains(".pagination"));
    }
}
