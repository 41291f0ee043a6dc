//! # UI Hooks
//!
//! Custom Dioxus hooks for the Multiverse Catalog UI.
//!
//! - Debounce: cancel-and-reschedule timer used by the search box

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_debounce;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_debounce::{UseDebounce, use_debounce};
