use crate::types::bookmark::Category;

/// Active category filter for the derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Pass every bookmark through.
    All,
    /// Keep only favorites.
    Favorites,
    /// Keep bookmarks whose category matches exactly.
    Category(Category),
}

impl CategoryFilter {
    /// Parses a filter key as used by a filter UI: the sentinels `"all"`
    /// and `"favorites"`, otherwise a category label.
    pub fn from_key(key: &str) -> Self {
        match key {
            "all" => CategoryFilter::All,
            "favorites" => CategoryFilter::Favorites,
            label => CategoryFilter::Category(Category::parse(label)),
        }
    }

    /// The filter's display label.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Favorites => "favorites",
            CategoryFilter::Category(category) => category.label(),
        }
    }
}

/// Sort order for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest `created_at` first.
    DateDesc,
    /// Oldest `created_at` first.
    DateAsc,
    /// Title ascending, case-insensitive.
    Alpha,
    /// Identity: whatever order filtering produced.
    Unsorted,
}

impl SortOrder {
    /// Parses a sort key. Unrecognized keys leave the order unchanged.
    pub fn from_key(key: &str) -> Self {
        match key {
            "date-desc" => SortOrder::DateDesc,
            "date-asc" => SortOrder::DateAsc,
            "alpha" => SortOrder::Alpha,
            _ => SortOrder::Unsorted,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::Alpha => "alpha",
            SortOrder::Unsorted => "unsorted",
        }
    }
}
