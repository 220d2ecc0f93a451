use serde::{Deserialize, Serialize};
use url::Url;

/// Category for a bookmark: a fixed recognized set plus free-form values.
///
/// Recognized categories carry an icon name and accent color for filter
/// chips; custom categories get a fallback style. Serialized as the plain
/// string label so snapshots and export files stay interoperable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Work,
    Personal,
    Dev,
    Design,
    News,
    Entertainment,
    Learning,
    Social,
    Uncategorized,
    Custom(String),
}

/// The recognized categories, in display order.
pub const RECOGNIZED_CATEGORIES: [Category; 9] = [
    Category::Work,
    Category::Personal,
    Category::Dev,
    Category::Design,
    Category::News,
    Category::Entertainment,
    Category::Learning,
    Category::Social,
    Category::Uncategorized,
];

impl Category {
    /// Parses a label into a category. Recognition is exact (case-sensitive);
    /// anything else becomes `Custom`. A blank label is `Uncategorized`.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        match label {
            "" | "Uncategorized" => Category::Uncategorized,
            "Work" => Category::Work,
            "Personal" => Category::Personal,
            "Dev" => Category::Dev,
            "Design" => Category::Design,
            "News" => Category::News,
            "Entertainment" => Category::Entertainment,
            "Learning" => Category::Learning,
            "Social" => Category::Social,
            other => Category::Custom(other.to_string()),
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Dev => "Dev",
            Category::Design => "Design",
            Category::News => "News",
            Category::Entertainment => "Entertainment",
            Category::Learning => "Learning",
            Category::Social => "Social",
            Category::Uncategorized => "Uncategorized",
            Category::Custom(label) => label,
        }
    }

    /// Icon name for filter chips.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Work => "briefcase",
            Category::Personal => "user",
            Category::Dev => "code",
            Category::Design => "pen-tool",
            Category::News => "newspaper",
            Category::Entertainment => "film",
            Category::Learning => "book-open",
            Category::Social => "message-circle",
            Category::Uncategorized => "folder",
            Category::Custom(_) => "tag",
        }
    }

    /// Accent color for filter chips.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Category::Work => "#2ea44f",
            Category::Personal => "#8957e5",
            Category::Dev => "#1f6feb",
            Category::Design => "#db61a2",
            Category::News => "#d29922",
            Category::Entertainment => "#f85149",
            Category::Learning => "#3fb950",
            Category::Social => "#58a6ff",
            Category::Uncategorized => "#8b949e",
            Category::Custom(_) => "#8b949e",
        }
    }

    /// Whether this category belongs to the fixed recognized set.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Uncategorized
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::parse(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a saved bookmark.
///
/// Serialized with camelCase field names (`isFavorite`, `createdAt`) so
/// snapshots and export files interoperate with prior data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(default)]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub created_at: i64,
}

/// Uncommitted field values for creating or editing a bookmark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkDraft {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub image: Option<String>,
    pub favicon: Option<String>,
}

/// Normalizes a raw URL to carry a scheme: `https://` is prepended when no
/// `http://` or `https://` prefix is present.
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

/// The host component of a URL, if it parses.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

/// Title fallback chain: a non-blank supplied title, else the URL host,
/// else the URL itself.
pub fn resolve_title(supplied: &str, url: &str) -> String {
    let supplied = supplied.trim();
    if !supplied.is_empty() {
        return supplied.to_string();
    }
    host_of(url).unwrap_or_else(|| url.to_string())
}

/// Trims tag entries and drops the empties, preserving order.
pub fn sanitize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
