//! Pagination Component
//!
//! Page links around the current page with ellipses for the gaps.

use leptos::prelude::*;

use crate::store::clamp_page;

/// Pages shown around the current page
pub const PAGE_RANGE: u32 = 5;
/// Pages always shown at each end
pub const MARGIN_PAGES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

pub fn should_paginate(total_pages: u32) -> bool {
    total_pages > 1
}

pub fn has_previous(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

/// Page links to render for `current` out of `total` pages
pub fn page_items(current: u32, total: u32, range: u32, margin: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = clamp_page(current, total);
    let range = range.max(1);

    let mut pages: Vec<u32> = Vec::new();
    if total <= range + 2 * margin {
        pages.extend(1..=total);
    } else {
        let end = (current.saturating_sub(range / 2).max(1) + range - 1).min(total);
        let start = (end + 1).saturating_sub(range).max(1);
        pages.extend(1..=margin.min(total));
        pages.extend(start..=end);
        pages.extend((total + 1).saturating_sub(margin).max(1)..=total);
        pages.sort_unstable();
        pages.dedup();
    }

    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<u32> = None;
    for page in pages {
        match previous {
            // A single missing page is cheaper shown than elided
            Some(prev) if page == prev + 2 => items.push(PageItem::Page(prev + 1)),
            Some(prev) if page > prev + 2 => items.push(PageItem::Ellipsis),
            _ => {}
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }
    items
}

/// Renders nothing when there is a single page.
/// `on_page_change` only receives pages within `[1, total_pages]`.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    let select = move |target: u32| {
        let clamped = clamp_page(target, total_pages.get_untracked());
        if clamped != page.get_untracked() {
            on_page_change.run(clamped);
        }
    };

    view! {
        <Show when=move || should_paginate(total_pages.get())>
            <ul class="pagination">
                <li class=move || { if has_previous(page.get()) { "" } else { "disabled" } }>
                    <button
                        aria-label="Previous page"
                        disabled=move || { !has_previous(page.get()) }
                        on:click=move |_| select(page.get_untracked().saturating_sub(1))
                    >
                        "←"
                    </button>
                </li>
                {move || {
                    let current = page.get();
                    page_items(current, total_pages.get(), PAGE_RANGE, MARGIN_PAGES)
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => view! {
                                <li class={ if n == current { "active" } else { "" } }>
                                    <button on:click=move |_| select(n)>{n}</button>
                                </li>
                            }.into_any(),
                            PageItem::Ellipsis => view! { <li class="break">"…"</li> }.into_any(),
                        })
                        .collect_view()
                }}
                <li class=move || {
                    if has_next(page.get(), total_pages.get()) { "" } else { "disabled" }
                }>
                    <button
                        aria-label="Next page"
                        disabled=move || { !has_next(page.get(), total_pages.get()) }
                        on:click=move |_| select(page.get_untracked() + 1)
                    >
                        "→"
                    </button>
                </li>
            </ul>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn items(current: u32, total: u32) -> Vec<PageItem> {
        page_items(current, total, PAGE_RANGE, MARGIN_PAGES)
    }

    #[test]
    fn test_single_page_is_hidden() {
        assert!(!should_paginate(0));
        assert!(!should_paginate(1));
        assert!(should_paginate(2));
    }

    #[test]
    fn test_previous_and_next_availability() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(2, 3));
        assert!(!has_next(3, 3));
        assert!(!has_next(4, 3));
    }

    #[test]
    fn test_few_pages_listed_in_full() {
        assert_eq!(items(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(items(1, 7).len(), 7);
    }

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            items(10, 20),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_at_the_edges() {
        assert_eq!(
            items(1, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(
            items(20, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_single_gap_page_is_shown() {
        assert_eq!(
            items(5, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_last_item_is_total_pages() {
        for total in 2..=30 {
            for current in 1..=total {
                assert_eq!(items(current, total).last(), Some(&Page(total)));
            }
        }
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(items(99, 3), vec![Page(1), Page(2), Page(3)]);
    }
}
