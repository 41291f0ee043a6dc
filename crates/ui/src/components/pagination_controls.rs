//! # Pagination Controls
//!
//! Previous / page strip / Next under the list grid. All targets come from
//! [`PaginationModel`], which builds them through the query codec, so every
//! active filter survives a page change.

use dioxus::prelude::*;

use catalog_core::query::LIST_PATH;
use catalog_core::{FilterState, PageItem, PaginationModel};

use crate::router::Route;

/// Properties for the PaginationControls component
#[derive(Props, Clone, PartialEq)]
pub struct PaginationControlsProps {
    /// List state being shown; its page is the current page
    pub filter: FilterState,

    /// Total pages reported by the remote
    pub total_pages: u32,
}

/// Page navigation strip. Renders nothing for a single page.
#[component]
pub fn PaginationControls(props: PaginationControlsProps) -> Element {
    let Some(model) = PaginationModel::build(LIST_PATH, &props.filter, props.total_pages) else {
        return rsx! {};
    };

    rsx! {
        nav {
            class: "pagination",
            aria_label: "Pagination",

            ul {
                class: "pagination-content",

                li {
                    StepLink { label: "‹ Previous", target: model.previous.clone() }
                }

                for (index, slot) in strip_slots(&model).into_iter().enumerate() {
                    li {
                        key: "{index}",
                        StripSlotView { slot }
                    }
                }

                li {
                    StepLink { label: "Next ›", target: model.next.clone() }
                }
            }
        }
    }
}

// ============================================================================
// Strip Slots
// ============================================================================

/// How one strip item renders
#[derive(Debug, Clone, PartialEq)]
pub enum StripSlot {
    /// The page being shown, not a link
    Current(u32),
    /// Another page and its target href
    Page(u32, String),
    /// Skipped pages
    Gap,
}

/// Resolve the model's strip items into what the control renders
pub fn strip_slots(model: &PaginationModel) -> Vec<StripSlot> {
    model
        .items
        .iter()
        .map(|(item, target)| match (item, target) {
            (PageItem::Page(page), _) if model.is_current(*page) => StripSlot::Current(*page),
            (PageItem::Page(page), Some(href)) => StripSlot::Page(*page, href.clone()),
            _ => StripSlot::Gap,
        })
        .collect()
}

#[component]
fn StripSlotView(slot: StripSlot) -> Element {
    match slot {
        StripSlot::Current(page) => rsx! {
            span {
                class: "page-link active",
                aria_current: "page",
                "{page}"
            }
        },
        StripSlot::Page(page, href) => rsx! {
            Link {
                class: "page-link",
                to: Route::from_href(&href),
                "{page}"
            }
        },
        StripSlot::Gap => rsx! {
            span {
                class: "page-ellipsis",
                aria_hidden: "true",
                "…"
            }
        },
    }
}

/// Previous/Next control; inert when there is nowhere to go
#[component]
fn StepLink(label: &'static str, target: Option<String>) -> Element {
    match target {
        Some(href) => rsx! {
            Link {
                class: "page-link page-step",
                to: Route::from_href(&href),
                "{label}"
            }
        },
        None => rsx! {
            span {
                class: "page-link page-step disabled",
                aria_disabled: "true",
                "{label}"
            }
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn page_five_of_ten() -> PaginationModel {
        let filter = FilterState::new().with_page(5).with_name("rick");
        PaginationModel::build(LIST_PATH, &filter, 10).unwrap()
    }

    #[test]
    fn test_single_page_renders_nothing() {
        fn app() -> Element {
            rsx! {
                PaginationControls { filter: FilterState::new(), total_pages: 1 }
            }
        }

        let html = render(app);
        assert!(!html.contains("<nav"), "unexpected markup: {html}");
        assert!(!html.contains("page-link"), "unexpected markup: {html}");
    }

    #[test]
    fn test_zero_pages_renders_nothing() {
        fn app() -> Element {
            rsx! {
                PaginationControls { filter: FilterState::new(), total_pages: 0 }
            }
        }

        assert!(!render(app).contains("<nav"));
    }

    #[test]
    fn test_strip_slots_middle_page() {
        assert_eq!(
            strip_slots(&page_five_of_ten()),
            vec![
                StripSlot::Page(1, "/?page=1&name=rick".to_string()),
                StripSlot::Gap,
                StripSlot::Page(4, "/?page=4&name=rick".to_string()),
                StripSlot::Current(5),
                StripSlot::Page(6, "/?page=6&name=rick".to_string()),
                StripSlot::Gap,
                StripSlot::Page(10, "/?page=10&name=rick".to_string()),
            ]
        );
    }

    #[test]
    fn test_gaps_and_current_page_markup() {
        fn app() -> Element {
            let slots = strip_slots(&page_five_of_ten())
                .into_iter()
                .filter(|slot| !matches!(slot, StripSlot::Page(..)));

            rsx! {
                for slot in slots {
                    StripSlotView { slot }
                }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("page-ellipsis").count(), 2);
        assert_eq!(html.matches("page-link active").count(), 1);
        assert!(html.contains(">5<"), "current page missing: {html}");
    }
}
