//! Pagination strip
//!
//! Computes which page numbers and ellipses the pagination control shows,
//! and the navigation targets behind each interactive item.

use serde::{Deserialize, Serialize};

use crate::query::{FilterState, page_href};

// ============================================================================
// Strip Items
// ============================================================================

/// One slot of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    /// A clickable page number
    Page(u32),
    /// A non-interactive gap marker
    Ellipsis,
}

/// Page numbers and ellipses to display.
///
/// Page 1 and `total_pages` are always present; the pages adjacent to
/// `current_page` fill the middle, and an ellipsis marks each side where
/// numbers were skipped. Returns an empty strip when there is at most one
/// page.
pub fn page_strip(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];

    if start > 2 {
        items.push(PageItem::Ellipsis);
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total_pages));
    items
}

// ============================================================================
// Navigation Model
// ============================================================================

/// Everything the pagination control needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationModel {
    pub current_page: u32,
    pub total_pages: u32,
    /// Target of "Previous", `None` on the first page
    pub previous: Option<String>,
    /// Target of "Next", `None` on the last page
    pub next: Option<String>,
    /// Strip items paired with their targets (ellipses have none)
    pub items: Vec<(PageItem, Option<String>)>,
}

impl PaginationModel {
    /// Build the model for `state` on `path`, or `None` when the control
    /// should not render at all
    pub fn build(path: &str, state: &FilterState, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let current_page = state.page.clamp(1, total_pages);
        let target = |page: u32| page_href(path, state, page);

        let items = page_strip(current_page, total_pages)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) => (item, Some(target(page))),
                PageItem::Ellipsis => (item, None),
            })
            .collect();

        Some(Self {
            current_page,
            total_pages,
            previous: (current_page > 1).then(|| target(current_page - 1)),
            next: (current_page < total_pages).then(|| target(current_page + 1)),
            items,
        })
    }

    /// Check if `page` is the page being shown
    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;
    use PageItem::{Ellipsis, Page};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_middle_page() {
        assert_eq!(
            page_strip(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_strip_small_total_has_no_ellipses() {
        assert_eq!(page_strip(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_strip(3, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_strip_single_page_is_empty() {
        assert!(page_strip(1, 1).is_empty());
        assert!(page_strip(1, 0).is_empty());
    }

    #[test]
    fn test_strip_two_pages() {
        assert_eq!(page_strip(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_strip(2, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_strip_near_start() {
        assert_eq!(
            page_strip(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_strip(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_strip_near_end() {
        assert_eq!(
            page_strip(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            page_strip(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_strip_out_of_range_current_is_clamped() {
        assert_eq!(page_strip(99, 4), page_strip(4, 4));
    }

    #[test]
    fn test_model_not_rendered_for_single_page() {
        assert!(PaginationModel::build("/", &FilterState::new(), 1).is_none());
    }

    #[test]
    fn test_model_disables_previous_on_first_page() {
        let model = PaginationModel::build("/", &FilterState::new(), 3).unwrap();
        assert_eq!(model.previous, None);
        assert_eq!(model.next.as_deref(), Some("/?page=2"));
    }

    #[test]
    fn test_model_disables_next_on_last_page() {
        let state = FilterState::new().with_page(3);
        let model = PaginationModel::build("/", &state, 3).unwrap();
        assert_eq!(model.previous.as_deref(), Some("/?page=2"));
        assert_eq!(model.next, None);
    }

    #[test]
    fn test_model_targets_keep_filters() {
        let state = FilterState::new()
            .with_page(5)
            .with_name("morty")
            .with_status(Some(Status::Dead));
        let model = PaginationModel::build("/", &state, 10).unwrap();

        assert!(model.is_current(5));
        assert_eq!(
            model.next.as_deref(),
            Some("/?page=6&name=morty&status=dead")
        );
        let ellipsis_targets: Vec<_> = model
            .items
            .iter()
            .filter(|(item, _)| *item == Ellipsis)
            .map(|(_, target)| target.clone())
            .collect();
        assert_eq!(ellipsis_targets, vec![None, None]);
        assert_eq!(
            model.items.last().and_then(|(_, t)| t.clone()).as_deref(),
            Some("/?page=10&name=morty&status=dead")
        );
    }
}
