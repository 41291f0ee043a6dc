//! Page Components for Multiverse Catalog
//!
//! One component per route.
//!
//! ## Available Pages
//!
//! - **ListPage**: filtered, paged character grid
//! - **DetailPage**: one character, with a back link to the list it came from
//! - **PageNotFound**: catch-all for unknown paths
//!

pub mod character_detail;
pub mod character_list;
pub mod not_found;

// Re-export page components for convenience
pub use character_detail::DetailPage;
pub use character_list::ListPage;
pub use not_found::PageNotFound;
