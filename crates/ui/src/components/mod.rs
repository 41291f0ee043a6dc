//! # UI Components
//!
//! Reusable Dioxus components for the Multiverse Catalog.
//!
//! - **Character Card**: one cell of the list grid, linking to the detail view
//! - **Pagination Controls**: previous / page strip / next
//! - **Search & Filter**: debounced name search and filter selects
//! - **Loading**: skeletons for the list grid and the detail page
//! - **Alerts**: empty, error and not-found states
//! - **Inputs**: search input and select
//!
//! ## Component Hierarchy
//!
//! ```text
//! ListPage
//! ├── SearchAndFilter
//! │   ├── SearchInput
//! │   └── Select (status, species, gender)
//! ├── CharactersLoading | ErrorAlert | EmptyState
//! ├── CharacterCard (multiple)
//! └── PaginationControls
//!
//! DetailPage
//! └── DetailLoading | NotFoundPanel | ErrorPanel
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod alerts;
pub mod character_card;
pub mod characters_loading;
pub mod inputs;
pub mod pagination_controls;
pub mod search_and_filter;

// ============================================================================
// Re-exports
// ============================================================================

pub use alerts::{EmptyState, ErrorAlert, ErrorPanel, NotFoundPanel};
pub use character_card::{CharacterCard, appear_delay_ms, status_dot_class};
pub use characters_loading::{CharactersLoading, DetailLoading, SKELETON_CARDS};
pub use inputs::{SearchInput, Select, SelectOption};
pub use pagination_controls::PaginationControls;
pub use search_and_filter::SearchAndFilter;
