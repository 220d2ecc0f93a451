//! Import/Export for LinkVault.
//!
//! Export serializes the entire collection to one JSON document, a direct
//! reflection of the in-memory model. Import parses a user-supplied file
//! back into a collection after a shape check and replaces the prior
//! collection wholesale; any failure leaves the collection untouched.

use uuid::Uuid;

use crate::managers::collection_manager::{CollectionManager, CollectionManagerTrait};
use crate::types::bookmark::{normalize_url, resolve_title, sanitize_tags, Bookmark};
use crate::types::errors::{ImportError, StoreError};

/// Suggested file name for the exported collection.
pub const EXPORT_FILE_NAME: &str = "bookmarks.json";

/// Serializes the full collection as a pretty-printed JSON array.
pub fn export_json(bookmarks: &[Bookmark]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(bookmarks).map_err(|e| {
        StoreError::SerializationError(format!("Failed to serialize collection: {}", e))
    })
}

/// Parses an uploaded file's text into a bookmark collection.
///
/// The top-level value must be a JSON array of objects, each with a
/// non-empty `url`. A missing `id` resolves to a fresh one, a missing
/// title resolves through the host fallback, and other absent fields take
/// their defaults.
pub fn parse_import(text: &str) -> Result<Vec<Bookmark>, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ImportError::ParseError(e.to_string()))?;

    let items = value
        .as_array()
        .ok_or_else(|| ImportError::InvalidFormat("top-level value is not an array".to_string()))?;

    let mut bookmarks = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(ImportError::InvalidFormat(format!(
                "entry {} is not an object",
                index
            )));
        }

        let mut bookmark: Bookmark = serde_json::from_value(item.clone())
            .map_err(|e| ImportError::InvalidFormat(format!("entry {}: {}", index, e)))?;

        if bookmark.url.trim().is_empty() {
            return Err(ImportError::InvalidFormat(format!(
                "entry {} is missing a url",
                index
            )));
        }

        bookmark.url = normalize_url(&bookmark.url);
        if bookmark.id.trim().is_empty() {
            bookmark.id = Uuid::new_v4().to_string();
        }
        bookmark.title = resolve_title(&bookmark.title, &bookmark.url);
        bookmark.tags = sanitize_tags(&bookmark.tags);

        bookmarks.push(bookmark);
    }

    Ok(bookmarks)
}

/// Parses the file text and, on success, replaces the collection with the
/// imported records. Returns the number of records imported. On failure
/// the existing collection is left exactly as it was.
pub fn apply_import(
    collection: &mut CollectionManager,
    text: &str,
) -> Result<usize, ImportError> {
    let bookmarks = parse_import(text)?;
    let count = bookmarks.len();
    collection.replace_all(bookmarks);
    Ok(count)
}
