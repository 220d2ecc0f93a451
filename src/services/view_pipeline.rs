//! Derived View Pipeline for LinkVault.
//!
//! Pure functions from (collection, category filter, search query, sort
//! order) to an ordered, filtered subsequence for display. The source
//! collection is never mutated; identical inputs produce identical output.

use std::collections::HashSet;

use crate::types::bookmark::{Bookmark, Category, RECOGNIZED_CATEGORIES};
use crate::types::view::{CategoryFilter, SortOrder};

/// Filters and orders the collection for display.
///
/// Stages run in order: category filter, search filter, sort. The search
/// query is case-insensitive substring matching against title, URL, tags,
/// and description; a blank query passes everything through. Sorting is
/// stable; `SortOrder::Unsorted` leaves the filtered order unchanged.
pub fn derive_view<'a>(
    bookmarks: &'a [Bookmark],
    filter: &CategoryFilter,
    query: &str,
    sort: SortOrder,
) -> Vec<&'a Bookmark> {
    let mut view: Vec<&Bookmark> = bookmarks
        .iter()
        .filter(|b| matches_category(b, filter))
        .collect();

    let query = query.trim().to_lowercase();
    if !query.is_empty() {
        view.retain(|b| matches_query(b, &query));
    }

    match sort {
        SortOrder::DateDesc => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::DateAsc => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Alpha => {
            view.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortOrder::Unsorted => {}
    }

    view
}

fn matches_category(bookmark: &Bookmark, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Favorites => bookmark.is_favorite,
        CategoryFilter::Category(category) => &bookmark.category == category,
    }
}

fn matches_query(bookmark: &Bookmark, query: &str) -> bool {
    bookmark.title.to_lowercase().contains(query)
        || bookmark.url.to_lowercase().contains(query)
        || bookmark.tags.iter().any(|t| t.to_lowercase().contains(query))
        || bookmark
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(query))
}

/// Category options for a filter UI: `All` and `Favorites` first, then the
/// union of categories present in the collection and the recognized set,
/// deduplicated and sorted by label.
pub fn category_options(bookmarks: &[Bookmark]) -> Vec<CategoryFilter> {
    let mut set: HashSet<Category> = RECOGNIZED_CATEGORIES.iter().cloned().collect();
    for bookmark in bookmarks {
        set.insert(bookmark.category.clone());
    }

    let mut categories: Vec<Category> = set.into_iter().collect();
    categories.sort_by(|a, b| a.label().cmp(b.label()));

    let mut options = vec![CategoryFilter::All, CategoryFilter::Favorites];
    options.extend(categories.into_iter().map(CategoryFilter::Category));
    options
}
