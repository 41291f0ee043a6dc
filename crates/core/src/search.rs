//! Search & filter draft
//!
//! The search control edits a local draft of the list filters and turns
//! each committed change into a navigation target. The draft remembers the
//! last state it navigated to (or was synced to from the route), and the
//! page is reset to 1 whenever the filters differ from that state.

use crate::query::{FilterState, LIST_PATH, list_href};
use crate::types::{Gender, Status};

/// Delay of user inactivity before a typed name is committed
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Local draft of the search/filter fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDraft {
    /// State last navigated to, or last synced from the route
    committed: FilterState,
    /// Name as currently typed, possibly not yet committed
    pub name: String,
    pub status: Option<Status>,
    pub species: Option<String>,
    pub gender: Option<Gender>,
}

impl SearchDraft {
    /// Start a draft from the inbound list state
    pub fn new(inbound: &FilterState) -> Self {
        Self {
            committed: inbound.clone(),
            name: inbound.name().unwrap_or_default().to_string(),
            status: inbound.status,
            species: inbound.species().map(str::to_string),
            gender: inbound.gender,
        }
    }

    /// Re-synchronize after the route changed underneath the control
    /// (back/forward navigation, pagination)
    pub fn sync(&mut self, inbound: &FilterState) {
        if self.committed != *inbound {
            *self = Self::new(inbound);
        }
    }

    /// The state the route currently shows
    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    /// Record a keystroke in the name box. Nothing navigates until
    /// [`SearchDraft::commit_name`] runs after the debounce delay.
    pub fn type_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Check if the typed name differs from the committed one
    pub fn has_pending_name(&self) -> bool {
        self.committed.name().unwrap_or_default() != self.name
    }

    /// Commit the typed name. Returns the navigation target, or `None` if
    /// the name did not change.
    pub fn commit_name(&mut self) -> Option<String> {
        if !self.has_pending_name() {
            return None;
        }
        Some(self.navigate())
    }

    /// Select a status (or "any" with `None`) and navigate immediately
    pub fn select_status(&mut self, status: Option<Status>) -> String {
        self.status = status;
        self.navigate()
    }

    /// Select a species (or "any" with `None`) and navigate immediately
    pub fn select_species(&mut self, species: Option<String>) -> String {
        self.species = species.filter(|s| !s.is_empty());
        self.navigate()
    }

    /// Select a gender (or "any" with `None`) and navigate immediately
    pub fn select_gender(&mut self, gender: Option<Gender>) -> String {
        self.gender = gender;
        self.navigate()
    }

    /// Drop every filter and return the bare list path
    pub fn clear(&mut self) -> String {
        *self = Self::new(&FilterState::default());
        LIST_PATH.to_string()
    }

    /// Check if the draft holds any filter
    pub fn has_active_filters(&self) -> bool {
        self.draft_state().has_active_filters()
    }

    /// The draft as a filter state, keeping the committed page
    fn draft_state(&self) -> FilterState {
        FilterState::new()
            .with_page(self.committed.page)
            .with_name(self.name.clone())
            .with_status(self.status)
            .with_species(self.species.clone().unwrap_or_default())
            .with_gender(self.gender)
    }

    /// Build the target for the current draft and make it the committed
    /// state. Changed filters reset the page to 1.
    fn navigate(&mut self) -> String {
        let mut target = self.draft_state();
        if !target.same_filters(&self.committed) {
            target.page = 1;
        }
        let href = list_href(&target);
        self.committed = target;
        href
    }
}

// ============================================================================
// Tests
// ============================================================================
