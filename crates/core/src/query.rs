//! Query-state codec
//!
//! The address bar's query component is the only place list state lives.
//! Everything that reads or writes it goes through this module: the list
//! page decodes it, the search control and pagination encode new targets,
//! and the detail page carries a [`ReturnContext`] so its back link can
//! restore the exact list view the user came from.
//!
//! Keys are written in a fixed order (`page, name, status, species, gender`)
//! and absent or empty fields are never emitted.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::types::{CharacterId, Gender, Status};

// ============================================================================
// Constants
// ============================================================================

/// Path of the list route
pub const LIST_PATH: &str = "/";

/// Path prefix of the detail route
pub const DETAIL_PATH_PREFIX: &str = "/character/";

/// Query keys
pub const PAGE_KEY: &str = "page";
pub const FROM_KEY: &str = "from";
pub const NAME_KEY: &str = "name";
pub const STATUS_KEY: &str = "status";
pub const SPECIES_KEY: &str = "species";
pub const GENDER_KEY: &str = "gender";

/// Characters left unescaped in query values, matching form-urlencoding
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

// ============================================================================
// Filter State
// ============================================================================

/// Page number plus the optional search/filter fields of the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// 1-based page number
    pub page: u32,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub species: Option<String>,
    pub gender: Option<Gender>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            page: 1,
            name: None,
            status: None,
            species: None,
            gender: None,
        }
    }
}

impl FilterState {
    /// Unfiltered first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page (values below 1 clamp to 1)
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the name filter; an empty string clears it
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// Set the status filter
    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    /// Set the species filter; an empty string clears it
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = non_empty(species.into());
        self
    }

    /// Set the gender filter
    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// Check if any search/filter field is set
    pub fn has_active_filters(&self) -> bool {
        self.name().is_some()
            || self.status.is_some()
            || self.species().is_some()
            || self.gender.is_some()
    }

    /// Compare only the search/filter fields, ignoring the page
    pub fn same_filters(&self, other: &FilterState) -> bool {
        self.name() == other.name()
            && self.status == other.status
            && self.species() == other.species()
            && self.gender == other.gender
    }

    /// Name filter, treating an empty string as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// Species filter, treating an empty string as absent
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref().filter(|s| !s.is_empty())
    }

    /// The `(key, value)` pairs this state serializes to, in canonical order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![(PAGE_KEY, self.page.max(1).to_string())];
        pairs.extend(self.filter_pairs());
        pairs
    }

    /// The filter pairs only, in canonical order
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(name) = self.name() {
            pairs.push((NAME_KEY, name.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push((STATUS_KEY, status.as_query_value().to_string()));
        }
        if let Some(species) = self.species() {
            pairs.push((SPECIES_KEY, species.to_string()));
        }
        if let Some(gender) = self.gender {
            pairs.push((GENDER_KEY, gender.as_query_value().to_string()));
        }
        pairs
    }

    /// Apply one decoded pair, ignoring keys that are not filters
    fn apply_filter_pair(&mut self, key: &str, value: String) {
        match key {
            NAME_KEY => self.name = non_empty(value),
            STATUS_KEY => self.status = Status::from_query_value(&value),
            SPECIES_KEY => self.species = non_empty(value),
            GENDER_KEY => self.gender = Gender::from_query_value(&value),
            _ => {}
        }
    }
}

// ============================================================================
// Return Context
// ============================================================================

/// List-view state carried into the detail view so "back" can restore it.
///
/// On the wire the originating page is written as `from` instead of
/// `page`; [`back_href`] turns it back into `page`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnContext {
    /// Page of the list the user came from
    pub from: Option<u32>,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub species: Option<String>,
    pub gender: Option<Gender>,
}

impl ReturnContext {
    /// Capture the list state at `current_page`
    pub fn capture(state: &FilterState, current_page: u32) -> Self {
        Self {
            from: Some(current_page.max(1)),
            name: state.name().map(str::to_string),
            status: state.status,
            species: state.species().map(str::to_string),
            gender: state.gender,
        }
    }

    /// Check if the context carries nothing at all
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && !self.to_filter_state().has_active_filters()
    }

    /// The list state this context restores
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            page: self.from.unwrap_or(1).max(1),
            name: self.name.clone().and_then(non_empty),
            status: self.status,
            species: self.species.clone().and_then(non_empty),
            gender: self.gender,
        }
    }
}

// ============================================================================
// Encoding / Decoding
// ============================================================================

/// Serialize a filter state to its canonical query string (no leading `?`)
pub fn encode(state: &FilterState) -> String {
    join_pairs(state.query_pairs())
}

/// Parse a query string (with or without a leading `?`) into a filter state.
///
/// Unknown keys are ignored; a missing, non-numeric or zero `page` becomes 1.
pub fn decode(query: &str) -> FilterState {
    let mut state = FilterState::default();
    let mut seen = Vec::new();

    for (key, value) in parse_pairs(query) {
        // First occurrence wins, like URLSearchParams::get
        if seen.contains(&key) {
            continue;
        }
        if key == PAGE_KEY {
            state.page = parse_page(&value).unwrap_or(1);
        } else {
            state.apply_filter_pair(&key, value);
        }
        seen.push(key);
    }

    state
}

/// Serialize the list state for a list-to-detail transition, writing the
/// current page as `from`
pub fn encode_return_context(state: &FilterState, current_page: u32) -> String {
    encode_context(&ReturnContext::capture(state, current_page))
}

/// Serialize an already-captured return context
pub fn encode_context(context: &ReturnContext) -> String {
    let mut pairs = Vec::with_capacity(5);
    if let Some(from) = context.from {
        pairs.push((FROM_KEY, from.max(1).to_string()));
    }
    pairs.extend(context.to_filter_state().filter_pairs());
    join_pairs(pairs)
}

/// Parse the detail route's query string into a return context
pub fn decode_return_context(query: &str) -> ReturnContext {
    let mut context = ReturnContext::default();
    let mut filters = FilterState::default();
    let mut seen = Vec::new();

    for (key, value) in parse_pairs(query) {
        if seen.contains(&key) {
            continue;
        }
        if key == FROM_KEY {
            context.from = parse_page(&value);
        } else {
            filters.apply_filter_pair(&key, value);
        }
        seen.push(key);
    }

    context.name = filters.name;
    context.status = filters.status;
    context.species = filters.species;
    context.gender = filters.gender;
    context
}

// ============================================================================
// Link Builders
// ============================================================================

/// Href of the list view showing `state`
pub fn list_href(state: &FilterState) -> String {
    page_href(LIST_PATH, state, state.page)
}

/// Href for `page` under `path`, keeping every active filter of `state`
pub fn page_href(path: &str, state: &FilterState, page: u32) -> String {
    format!("{}?{}", path, encode(&state.clone().with_page(page)))
}

/// Href of a character's detail view opened from the list showing `state`
pub fn detail_href(id: CharacterId, state: &FilterState) -> String {
    format!(
        "{}{}?{}",
        DETAIL_PATH_PREFIX,
        id,
        encode_return_context(state, state.page)
    )
}

/// Href of the detail view's back link. An empty context goes to the bare
/// list path.
pub fn back_href(context: &ReturnContext) -> String {
    if context.is_empty() {
        LIST_PATH.to_string()
    } else {
        list_href(&context.to_filter_state())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn parse_page(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

fn join_pairs(pairs: Vec<(&'static str, String)>) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, escape(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-escape one query value
pub fn escape(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Undo form-urlencoding: `+` is a space, then percent-decode
pub fn unescape(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Split a query string into decoded `(key, value)` pairs
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            (unescape(key), unescape(value))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_state() -> FilterState {
        FilterState::new()
            .with_page(4)
            .with_name("rick sanchez")
            .with_status(Some(Status::Alive))
            .with_species("human")
            .with_gender(Some(Gender::Male))
    }

    #[test]
    fn test_encode_default_state() {
        assert_eq!(encode(&FilterState::default()), "page=1");
    }

    #[test]
    fn test_encode_canonical_order() {
        assert_eq!(
            encode(&full_state()),
            "page=4&name=rick%20sanchez&status=alive&species=human&gender=male"
        );
    }

    #[test]
    fn test_encode_omits_absent_fields() {
        let state = FilterState::new().with_species("alien");
        let query = encode(&state);
        assert_eq!(query, "page=1&species=alien");
        assert!(!query.contains("name="));
        assert!(!query.contains("status="));
        assert!(!query.contains("gender="));
    }

    #[test]
    fn test_encode_empty_string_same_as_absent() {
        let mut with_empty = FilterState::new();
        with_empty.name = Some(String::new());
        with_empty.species = Some(String::new());
        assert_eq!(encode(&with_empty), encode(&FilterState::new()));
    }

    #[test]
    fn test_round_trip() {
        let states = [
            FilterState::new(),
            full_state(),
            FilterState::new().with_page(42).with_name("Mr. Poopybutthole"),
            FilterState::new().with_name("a&b=c+d/é?"),
            FilterState::new().with_gender(Some(Gender::Genderless)),
            FilterState::new().with_status(Some(Status::Unknown)).with_species("Cronenberg"),
        ];
        for state in states {
            assert_eq!(decode(&encode(&state)), state);
        }
    }

    #[test]
    fn test_decode_missing_page_defaults_to_one() {
        let state = decode("name=morty");
        assert_eq!(state.page, 1);
        assert_eq!(state.name.as_deref(), Some("morty"));
    }

    #[test]
    fn test_decode_non_numeric_page_defaults_to_one() {
        assert_eq!(decode("page=abc").page, 1);
        assert_eq!(decode("page=").page, 1);
        assert_eq!(decode("page=0").page, 1);
        assert_eq!(decode("page=-3").page, 1);
        assert_eq!(decode("page=2.5").page, 1);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let state = decode("?page=2&utm_source=mail&name=rick&foo");
        assert_eq!(state, FilterState::new().with_page(2).with_name("rick"));
    }

    #[test]
    fn test_decode_plus_is_space() {
        assert_eq!(decode("name=rick+sanchez").name.as_deref(), Some("rick sanchez"));
    }

    #[test]
    fn test_decode_unknown_enum_values_are_absent() {
        let state = decode("status=any&gender=robot");
        assert_eq!(state.status, None);
        assert_eq!(state.gender, None);
    }

    #[test]
    fn test_decode_empty_values_are_absent() {
        let state = decode("name=&species=");
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn test_decode_first_occurrence_wins() {
        assert_eq!(decode("page=3&page=7").page, 3);
    }

    #[test]
    fn test_return_context_renames_page_to_from() {
        let state = FilterState::new().with_page(3).with_species("alien");
        assert_eq!(encode_return_context(&state, 3), "from=3&species=alien");
    }

    #[test]
    fn test_detail_back_link_restores_list_view() {
        let list = FilterState::new().with_page(3).with_species("alien");
        let href = detail_href(7, &list);
        assert_eq!(href, "/character/7?from=3&species=alien");

        let query = href.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let context = decode_return_context(query);
        assert_eq!(back_href(&context), "/?page=3&species=alien");
    }

    #[test]
    fn test_back_href_without_context_is_bare_path() {
        assert_eq!(back_href(&ReturnContext::default()), "/");
        assert_eq!(back_href(&decode_return_context("")), "/");
    }

    #[test]
    fn test_back_href_filters_without_from() {
        let context = decode_return_context("gender=female");
        assert_eq!(back_href(&context), "/?page=1&gender=female");
    }

    #[test]
    fn test_decode_return_context_ignores_page_key() {
        let context = decode_return_context("page=9&from=2&name=beth");
        assert_eq!(context.from, Some(2));
        assert_eq!(context.name.as_deref(), Some("beth"));
    }

    #[test]
    fn test_page_href_changes_only_page() {
        let state = full_state();
        assert_eq!(
            page_href("/", &state, 5),
            "/?page=5&name=rick%20sanchez&status=alive&species=human&gender=male"
        );
    }

    #[test]
    fn test_same_filters_ignores_page() {
        let a = full_state();
        let b = full_state().with_page(1);
        assert!(a.same_filters(&b));
        assert!(!a.same_filters(&b.with_status(Some(Status::Dead))));
    }

    #[test]
    fn test_has_active_filters() {
        assert!(!FilterState::new().with_page(9).has_active_filters());
        assert!(FilterState::new().with_gender(Some(Gender::Female)).has_active_filters());
    }
}
