//! Form/Edit Session for LinkVault.
//!
//! Transient draft state for creating or editing a bookmark, kept apart
//! from the committed collection. Tags are edited as one comma-separated
//! string and re-split on save. A generation counter guards against stale
//! enrichment responses landing in a form that has since been closed,
//! cancelled, or re-opened.

use crate::managers::collection_manager::{CollectionManager, CollectionManagerTrait};
use crate::types::bookmark::{Bookmark, BookmarkDraft, Category};
use crate::types::enrichment::EnrichedMetadata;
use crate::types::errors::BookmarkError;

/// State of the form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Creating,
    Editing { id: String },
}

/// Editable field values held by an open form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub url: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Tags as a single editable string, comma-separated.
    pub tags_input: String,
    pub notes: String,
    pub image: Option<String>,
    pub favicon: Option<String>,
}

impl FormDraft {
    /// Seeds a draft from an existing record's current field values.
    fn from_bookmark(bookmark: &Bookmark) -> Self {
        Self {
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone().unwrap_or_default(),
            category: bookmark.category.clone(),
            tags_input: bookmark.tags.join(", "),
            notes: bookmark.notes.clone().unwrap_or_default(),
            image: bookmark.image.clone(),
            favicon: bookmark.favicon.clone(),
        }
    }

    /// Converts the editable fields into a commit-ready draft: tags are
    /// split on commas, trimmed, and empties dropped; blank description
    /// and notes become absent.
    pub fn to_draft(&self) -> BookmarkDraft {
        let tags = self
            .tags_input
            .split(',')
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();

        let optional = |s: &str| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };

        BookmarkDraft {
            url: self.url.clone(),
            title: self.title.clone(),
            description: optional(&self.description),
            category: self.category.clone(),
            tags,
            notes: optional(&self.notes),
            image: self.image.clone(),
            favicon: self.favicon.clone(),
        }
    }
}

/// Trait defining the form session interface.
pub trait FormManagerTrait {
    fn open_create(&mut self);
    fn open_edit(&mut self, bookmark: &Bookmark);
    fn save(&mut self, collection: &mut CollectionManager) -> Result<Bookmark, BookmarkError>;
    fn cancel(&mut self);
    fn state(&self) -> &FormState;
    fn draft(&self) -> &FormDraft;
    fn draft_mut(&mut self) -> &mut FormDraft;
    /// Arms enrichment for one loss-of-focus event on the URL field.
    /// Returns a generation token while creating; editing an existing
    /// record never auto-triggers enrichment.
    fn on_url_blur(&mut self) -> Option<u64>;
    /// Merges an enrichment result into the draft if the generation is
    /// still current. Returns false when the response was stale.
    fn apply_enrichment(&mut self, generation: u64, metadata: &EnrichedMetadata) -> bool;
    fn enrichment_in_progress(&self) -> bool;
}

/// In-memory form session.
pub struct FormManager {
    state: FormState,
    draft: FormDraft,
    enrichment_generation: u64,
    enrichment_in_progress: bool,
}

impl FormManager {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            draft: FormDraft::default(),
            enrichment_generation: 0,
            enrichment_in_progress: false,
        }
    }

    /// Discards the draft and invalidates any in-flight enrichment.
    fn close(&mut self) {
        self.state = FormState::Closed;
        self.draft = FormDraft::default();
        self.enrichment_generation += 1;
        self.enrichment_in_progress = false;
    }
}

impl Default for FormManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FormManagerTrait for FormManager {
    fn open_create(&mut self) {
        self.close();
        self.state = FormState::Creating;
    }

    fn open_edit(&mut self, bookmark: &Bookmark) {
        self.close();
        self.state = FormState::Editing {
            id: bookmark.id.clone(),
        };
        self.draft = FormDraft::from_bookmark(bookmark);
    }

    /// Validates and commits the draft: add while creating, replace-by-id
    /// while editing. The form closes on success and stays open (draft
    /// intact) on a validation error.
    fn save(&mut self, collection: &mut CollectionManager) -> Result<Bookmark, BookmarkError> {
        let draft = self.draft.to_draft();
        let result = match &self.state {
            FormState::Closed => {
                Err(BookmarkError::InvalidUrl("no open form session".to_string()))
            }
            FormState::Creating => collection.add(&draft),
            FormState::Editing { id } => collection.update(id, &draft),
        };
        if result.is_ok() {
            self.close();
        }
        result
    }

    fn cancel(&mut self) {
        self.close();
    }

    fn state(&self) -> &FormState {
        &self.state
    }

    fn draft(&self) -> &FormDraft {
        &self.draft
    }

    fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    fn on_url_blur(&mut self) -> Option<u64> {
        if self.state != FormState::Creating || self.draft.url.trim().is_empty() {
            return None;
        }
        self.enrichment_generation += 1;
        self.enrichment_in_progress = true;
        Some(self.enrichment_generation)
    }

    fn apply_enrichment(&mut self, generation: u64, metadata: &EnrichedMetadata) -> bool {
        if generation != self.enrichment_generation || self.state != FormState::Creating {
            return false;
        }
        self.draft.url = metadata.url.clone();
        self.draft.title = metadata.title.clone();
        if let Some(description) = &metadata.description {
            self.draft.description = description.clone();
        }
        self.draft.image = metadata.image.clone();
        self.draft.favicon = metadata.favicon.clone();
        self.enrichment_in_progress = false;
        true
    }

    fn enrichment_in_progress(&self) -> bool {
        self.enrichment_in_progress
    }
}
