//! Render outcomes
//!
//! What a view gets back from a fetch. Every error has already been folded
//! into one of these variants, so views only branch on outcomes.

use catalog_core::{CatalogError, CatalogResult, CharacterDetail, CharacterPage};

/// Result of loading one list page
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// At least one character matched
    Results(CharacterPage),
    /// The filters matched nothing (not an error)
    Empty,
    /// Transport failure or unexpected status; no partial data
    Failure(CatalogError),
}

impl ListOutcome {
    /// Classify a page fetch
    pub fn from_result(result: CatalogResult<CharacterPage>) -> Self {
        match result {
            Ok(page) if page.is_empty() => ListOutcome::Empty,
            Ok(page) => ListOutcome::Results(page),
            Err(err) => ListOutcome::Failure(err),
        }
    }
}

/// Result of loading one character
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found(CharacterDetail),
    /// The remote has no character with that id
    NotFound,
    /// Transport failure or unexpected status
    Failure(CatalogError),
}

impl DetailOutcome {
    /// Classify a detail fetch
    pub fn from_result(result: CatalogResult<CharacterDetail>) -> Self {
        match result {
            Ok(detail) => DetailOutcome::Found(detail),
            Err(err) if err.is_not_found() => DetailOutcome::NotFound,
            Err(err) => DetailOutcome::Failure(err),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
