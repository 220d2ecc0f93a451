//! Unit tests for the Derived View Pipeline.
//!
//! The pipeline is pure: these tests build collections by hand and assert
//! on the ordered, filtered output without any store involvement.

use linkvault::services::view_pipeline::{category_options, derive_view};
use linkvault::types::bookmark::{Bookmark, Category};
use linkvault::types::view::{CategoryFilter, SortOrder};
use rstest::rstest;

fn bookmark(id: &str, url: &str, title: &str, category: Category, created_at: i64) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        url: url.to_string(),
        title: title.to_string(),
        description: None,
        category,
        tags: Vec::new(),
        notes: None,
        image: None,
        favicon: None,
        is_favorite: false,
        created_at,
    }
}

fn sample_collection() -> Vec<Bookmark> {
    let mut rust = bookmark("1", "https://rust-lang.org", "Rust", Category::Dev, 100);
    rust.tags = vec!["devtools".to_string(), "lang".to_string()];
    rust.is_favorite = true;

    let mut news = bookmark("2", "https://news.site", "Daily News", Category::News, 300);
    news.description = Some("Morning headlines".to_string());

    let figma = bookmark("3", "https://figma.com", "Figma", Category::Design, 200);

    vec![rust, news, figma]
}

/// The "all" filter passes every record through in insertion order.
#[test]
fn test_all_filter_passes_through() {
    let collection = sample_collection();
    let view = derive_view(&collection, &CategoryFilter::All, "", SortOrder::Unsorted);
    let ids: Vec<&str> = view.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

/// The "favorites" filter keeps only favorite records.
#[test]
fn test_favorites_filter() {
    let collection = sample_collection();
    let view = derive_view(&collection, &CategoryFilter::Favorites, "", SortOrder::Unsorted);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "1");
}

/// Category matching is exact and case-sensitive: a custom "dev" label is
/// not the recognized Dev category.
#[test]
fn test_category_filter_exact_and_case_sensitive() {
    let mut collection = sample_collection();
    collection.push(bookmark(
        "4",
        "https://lower.dev",
        "Lower",
        Category::Custom("dev".to_string()),
        400,
    ));

    let dev = derive_view(
        &collection,
        &CategoryFilter::Category(Category::Dev),
        "",
        SortOrder::Unsorted,
    );
    assert_eq!(dev.len(), 1);
    assert_eq!(dev[0].id, "1");

    let custom = derive_view(
        &collection,
        &CategoryFilter::Category(Category::Custom("dev".to_string())),
        "",
        SortOrder::Unsorted,
    );
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].id, "4");
}

/// Search is case-insensitive substring matching across title, URL, tags,
/// and description.
#[rstest]
#[case("rust", vec!["1"])] // title
#[case("FIGMA.COM", vec!["3"])] // url, query case ignored
#[case("dev", vec!["1"])] // tag substring: "devtools"
#[case("headlines", vec!["2"])] // description
#[case("xyz", vec![])] // no match anywhere
fn test_search_matches_fields(#[case] query: &str, #[case] expected: Vec<&str>) {
    let collection = sample_collection();
    let view = derive_view(&collection, &CategoryFilter::All, query, SortOrder::Unsorted);
    let ids: Vec<&str> = view.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, expected, "query {:?}", query);
}

/// A blank or whitespace-only query returns the category-filtered set
/// unchanged.
#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_query_is_identity(#[case] query: &str) {
    let collection = sample_collection();
    let filtered = derive_view(&collection, &CategoryFilter::All, query, SortOrder::Unsorted);
    assert_eq!(filtered.len(), collection.len());
}

/// date-desc orders newest first; date-asc oldest first; alpha orders by
/// title, case-insensitively.
#[test]
fn test_sort_orders() {
    let collection = sample_collection();

    let desc = derive_view(&collection, &CategoryFilter::All, "", SortOrder::DateDesc);
    let ids: Vec<&str> = desc.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);

    let asc = derive_view(&collection, &CategoryFilter::All, "", SortOrder::DateAsc);
    let ids: Vec<&str> = asc.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "2"]);

    let alpha = derive_view(&collection, &CategoryFilter::All, "", SortOrder::Alpha);
    let titles: Vec<&str> = alpha.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Daily News", "Figma", "Rust"]);
}

/// Alphabetical ordering ignores letter case.
#[test]
fn test_alpha_sort_case_insensitive() {
    let collection = vec![
        bookmark("1", "https://a.com", "zebra", Category::Uncategorized, 1),
        bookmark("2", "https://b.com", "Apple", Category::Uncategorized, 2),
        bookmark("3", "https://c.com", "mango", Category::Uncategorized, 3),
    ];

    let alpha = derive_view(&collection, &CategoryFilter::All, "", SortOrder::Alpha);
    let titles: Vec<&str> = alpha.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "mango", "zebra"]);
}

/// An unrecognized sort key parses to Unsorted, which leaves the filtered
/// order unchanged.
#[test]
fn test_unrecognized_sort_key_is_identity() {
    assert_eq!(SortOrder::from_key("shuffle"), SortOrder::Unsorted);
    assert_eq!(SortOrder::from_key("date-desc"), SortOrder::DateDesc);
    assert_eq!(SortOrder::from_key("date-asc"), SortOrder::DateAsc);
    assert_eq!(SortOrder::from_key("alpha"), SortOrder::Alpha);

    let collection = sample_collection();
    let view = derive_view(
        &collection,
        &CategoryFilter::All,
        "",
        SortOrder::from_key("shuffle"),
    );
    let ids: Vec<&str> = view.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

/// Filter keys parse to the sentinels first, then category labels.
#[test]
fn test_category_filter_keys() {
    assert_eq!(CategoryFilter::from_key("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_key("favorites"), CategoryFilter::Favorites);
    assert_eq!(
        CategoryFilter::from_key("Dev"),
        CategoryFilter::Category(Category::Dev)
    );
    assert_eq!(
        CategoryFilter::from_key("Zines"),
        CategoryFilter::Category(Category::Custom("Zines".to_string()))
    );

    assert_eq!(CategoryFilter::All.label(), "all");
    assert_eq!(CategoryFilter::Favorites.label(), "favorites");
    assert_eq!(SortOrder::DateDesc.key(), "date-desc");
}

/// Viewing never mutates the source collection.
#[test]
fn test_view_does_not_mutate_source() {
    let collection = sample_collection();
    let before = collection.clone();

    let _ = derive_view(&collection, &CategoryFilter::Favorites, "rust", SortOrder::Alpha);
    let _ = category_options(&collection);

    assert_eq!(collection, before);
}

/// Filter options start with "all" and "favorites", then the union of
/// present and recognized categories, deduplicated and sorted by label.
#[test]
fn test_category_options_shape() {
    let mut collection = sample_collection();
    collection.push(bookmark(
        "4",
        "https://zine.example",
        "Zine",
        Category::Custom("Zines".to_string()),
        400,
    ));

    let options = category_options(&collection);

    assert_eq!(options[0], CategoryFilter::All);
    assert_eq!(options[1], CategoryFilter::Favorites);

    let labels: Vec<&str> = options[2..].iter().map(|o| o.label()).collect();
    // Recognized set plus the one custom label, sorted, no duplicates
    assert_eq!(
        labels,
        vec![
            "Design",
            "Dev",
            "Entertainment",
            "Learning",
            "News",
            "Personal",
            "Social",
            "Uncategorized",
            "Work",
            "Zines",
        ]
    );
}

/// A category already in the recognized set is not duplicated by records
/// using it.
#[test]
fn test_category_options_deduplicates() {
    let collection = sample_collection(); // Dev, News, Design are all recognized
    let options = category_options(&collection);
    assert_eq!(options.len(), 2 + 9);
}
