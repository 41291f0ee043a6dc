//! # Catalog Core
//!
//! Core types, the query-state codec, and error handling for Multiverse
//! Catalog.
//!
//! This crate provides the pieces every other crate builds on:
//!
//! - **Types**: Character summaries/details, filter enums, page metadata
//! - **Query**: The codec between `FilterState` and the address bar, plus
//!   the `ReturnContext` that lets the detail view link back
//! - **Pagination**: The page-number strip and its navigation targets
//! - **Search**: The search/filter draft and its page-reset rule
//! - **Debounce**: The cancel-and-reschedule timer gate for the search box
//! - **Errors**: Unified error handling with `CatalogError` and `CatalogResult`
//!

pub mod debounce;
pub mod error;
pub mod pagination;
pub mod query;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use debounce::{DebounceTicket, Debouncer};
pub use error::{CatalogError, CatalogResult};
pub use pagination::{PageItem, PaginationModel, page_strip};
pub use query::{
    FilterState, ReturnContext, back_href, decode, decode_return_context, detail_href, encode,
    encode_return_context, list_href, page_href,
};
pub use search::{SEARCH_DEBOUNCE_MS, SearchDraft};
pub use types::{
    CharacterDetail, CharacterId, CharacterPage, CharacterSummary, Gender, PageInfo,
    SPECIES_PRESETS, Status,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
