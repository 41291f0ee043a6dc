//! # Catalog Client
//!
//! Remote data access for Multiverse Catalog.
//!
//! - **Client**: `CatalogClient`, a `reqwest` wrapper for the list and
//!   get-by-id endpoints of the character API
//! - **Outcomes**: `ListOutcome` / `DetailOutcome`, the only thing views see
//! - **Cache**: `CharacterCache`, a TTL cache for character details
//! - **Config**: `ClientConfig`, defaults plus the API root override
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = CatalogClient::new(&ClientConfig::from_env()?)?;
//! match client.load_page(&FilterState::new().with_species("alien")).await {
//!     ListOutcome::Results(page) => { /* render grid */ }
//!     ListOutcome::Empty => { /* suggest other filters */ }
//!     ListOutcome::Failure(_) => { /* offer retry */ }
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod outcome;
pub mod wire;

pub use cache::CharacterCache;
pub use client::CatalogClient;
pub use config::ClientConfig;
pub use outcome::{DetailOutcome, ListOutcome};
