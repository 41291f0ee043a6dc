//! Application routes
//!
//! The address bar is the only shared state of the application. Each route
//! carries its query component as a typed value, and those values are read
//! and written exclusively through the `catalog_core` query codec.

use std::fmt;

use dioxus::prelude::*;

use catalog_core::{
    CharacterId, FilterState, ReturnContext, decode, decode_return_context, encode,
    encode_context,
};

use crate::app::Shell;
use crate::pages::{DetailPage, ListPage, PageNotFound};

// ============================================================================
// Routes
// ============================================================================

/// Every address the application answers to
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        /// Paged, filtered character grid
        #[route("/?:..query")]
        ListPage { query: ListQuery },

        /// One character, remembering the list it was opened from
        #[route("/character/:id?:..query")]
        DetailPage { id: CharacterId, query: DetailQuery },

        /// Anything else
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    /// The unfiltered first page of the list
    pub fn home() -> Self {
        Route::ListPage {
            query: ListQuery::default(),
        }
    }

    /// Resolve an href produced by the query codec.
    ///
    /// Codec hrefs always resolve; anything else falls back to the home
    /// route instead of failing the navigation.
    pub fn from_href(href: &str) -> Self {
        href.parse::<Route>().unwrap_or_else(|_| {
            tracing::warn!(href, "Unroutable href, falling back to the list");
            Route::home()
        })
    }
}

// ============================================================================
// Query Components
// ============================================================================

/// Query component of the list route
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery(pub FilterState);

impl FromQuery for ListQuery {
    fn from_query(query: &str) -> Self {
        ListQuery(decode(query))
    }
}

impl fmt::Display for ListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.0))
    }
}

/// Query component of the detail route: the list state to go back to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailQuery(pub ReturnContext);

impl FromQuery for DetailQuery {
    fn from_query(query: &str) -> Self {
        DetailQuery(decode_return_context(query))
    }
}

impl fmt::Display for DetailQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_context(&self.0))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Status;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_query_uses_codec() {
        let query = ListQuery::from_query("species=alien&page=3");
        assert_eq!(query.0, FilterState::new().with_page(3).with_species("alien"));
        assert_eq!(query.to_string(), "page=3&species=alien");
    }

    #[test]
    fn test_empty_list_query_is_first_page() {
        assert_eq!(ListQuery::from_query(""), ListQuery::default());
        assert_eq!(ListQuery::default().0.page, 1);
    }

    #[test]
    fn test_detail_query_keeps_origin_page() {
        let query = DetailQuery::from_query("from=3&status=dead");
        assert_eq!(query.0.from, Some(3));
        assert_eq!(query.0.status, Some(Status::Dead));
        assert_eq!(query.to_string(), "from=3&status=dead");
    }

    #[test]
    fn test_from_href_list() {
        assert_eq!(
            Route::from_href("/?page=3&species=alien"),
            Route::ListPage {
                query: ListQuery(FilterState::new().with_page(3).with_species("alien")),
            }
        );
    }

    #[test]
    fn test_from_href_detail() {
        match Route::from_href("/character/7?from=3&species=alien") {
            Route::DetailPage { id, query } => {
                assert_eq!(id, 7);
                assert_eq!(query.0.from, Some(3));
                assert_eq!(query.0.species.as_deref(), Some("alien"));
            }
            other => panic!("expected detail route, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_root_is_home() {
        assert_eq!(Route::from_href("/"), Route::home());
    }
}
