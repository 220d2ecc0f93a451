//! Bookmark Collection Manager for LinkVault.
//!
//! The canonical in-memory bookmark list. Every mutation enforces the
//! collection invariants (unique ids, unique normalized URLs, immutable
//! `created_at`) and writes the snapshot back through the store.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::store::snapshot::{SnapshotStore, SnapshotStoreTrait};
use crate::types::bookmark::{
    normalize_url, resolve_title, sanitize_tags, Bookmark, BookmarkDraft,
};
use crate::types::errors::{BookmarkError, StoreError};

/// Trait defining bookmark collection operations.
pub trait CollectionManagerTrait {
    fn add(&mut self, draft: &BookmarkDraft) -> Result<Bookmark, BookmarkError>;
    fn update(&mut self, id: &str, draft: &BookmarkDraft) -> Result<Bookmark, BookmarkError>;
    /// Removes a bookmark. A missing id is a no-op.
    fn remove(&mut self, id: &str);
    /// Flips the favorite flag. A missing id is a no-op.
    fn toggle_favorite(&mut self, id: &str);
    /// Wholesale replacement of the collection, used by import.
    fn replace_all(&mut self, bookmarks: Vec<Bookmark>);
    fn all(&self) -> &[Bookmark];
    fn get(&self, id: &str) -> Option<&Bookmark>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Bookmark collection backed by the JSON snapshot store.
pub struct CollectionManager {
    store: SnapshotStore,
    bookmarks: Vec<Bookmark>,
    last_persist_error: Option<StoreError>,
}

impl CollectionManager {
    /// Creates a new manager, loading the collection from the store.
    pub fn new(store: SnapshotStore) -> Self {
        let bookmarks = store.load();
        Self {
            store,
            bookmarks,
            last_persist_error: None,
        }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Writes the collection to the store. A failed write does not roll
    /// back the in-memory mutation; it is logged and retained for the
    /// caller to surface as a non-blocking notification.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.bookmarks) {
            tracing::warn!(path = %self.store.path(), error = %e, "Failed to persist collection");
            self.last_persist_error = Some(e);
        }
    }

    /// Takes the most recent persistence failure, if any.
    pub fn take_persist_error(&mut self) -> Option<StoreError> {
        self.last_persist_error.take()
    }

    /// Explicitly writes the collection to the store.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.store.save(&self.bookmarks)
    }

    /// Validates and normalizes a draft URL. Rejects an empty URL and one
    /// that cannot be parsed even after scheme normalization.
    fn normalized_draft_url(draft: &BookmarkDraft) -> Result<String, BookmarkError> {
        if draft.url.trim().is_empty() {
            return Err(BookmarkError::InvalidUrl("URL must not be empty".to_string()));
        }
        let url = normalize_url(&draft.url);
        if url::Url::parse(&url).is_err() {
            return Err(BookmarkError::InvalidUrl(draft.url.clone()));
        }
        Ok(url)
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }
}

impl CollectionManagerTrait for CollectionManager {
    /// Adds a new bookmark from a draft. Assigns a fresh id and creation
    /// timestamp; rejects a URL another record already owns.
    fn add(&mut self, draft: &BookmarkDraft) -> Result<Bookmark, BookmarkError> {
        let url = Self::normalized_draft_url(draft)?;

        if self.bookmarks.iter().any(|b| b.url == url) {
            return Err(BookmarkError::DuplicateUrl(url));
        }

        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: resolve_title(&draft.title, &url),
            url,
            description: draft.description.clone(),
            category: draft.category.clone(),
            tags: sanitize_tags(&draft.tags),
            notes: draft.notes.clone(),
            image: draft.image.clone(),
            favicon: draft.favicon.clone(),
            is_favorite: false,
            created_at: Self::now(),
        };

        self.bookmarks.push(bookmark.clone());
        self.persist();
        Ok(bookmark)
    }

    /// Replaces an existing bookmark's fields with the draft's values.
    /// `created_at` and `is_favorite` are preserved; favorite status only
    /// changes through `toggle_favorite`.
    fn update(&mut self, id: &str, draft: &BookmarkDraft) -> Result<Bookmark, BookmarkError> {
        let url = Self::normalized_draft_url(draft)?;

        let index = self
            .find_index(id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))?;

        if self.bookmarks.iter().any(|b| b.id != id && b.url == url) {
            return Err(BookmarkError::DuplicateUrl(url));
        }

        let existing = &self.bookmarks[index];
        let updated = Bookmark {
            id: existing.id.clone(),
            title: resolve_title(&draft.title, &url),
            url,
            description: draft.description.clone(),
            category: draft.category.clone(),
            tags: sanitize_tags(&draft.tags),
            notes: draft.notes.clone(),
            image: draft.image.clone(),
            favicon: draft.favicon.clone(),
            is_favorite: existing.is_favorite,
            created_at: existing.created_at,
        };

        self.bookmarks[index] = updated.clone();
        self.persist();
        Ok(updated)
    }

    fn remove(&mut self, id: &str) {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        if self.bookmarks.len() != before {
            self.persist();
        }
    }

    fn toggle_favorite(&mut self, id: &str) {
        if let Some(index) = self.find_index(id) {
            self.bookmarks[index].is_favorite = !self.bookmarks[index].is_favorite;
            self.persist();
        }
    }

    fn replace_all(&mut self, bookmarks: Vec<Bookmark>) {
        self.bookmarks = bookmarks;
        self.persist();
    }

    fn all(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn len(&self) -> usize {
        self.bookmarks.len()
    }

    fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
