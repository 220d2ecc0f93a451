use std::fmt;

// === BookmarkError ===

/// Errors related to bookmark collection operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// A bookmark with the same URL already exists.
    DuplicateUrl(String),
    /// The URL is empty or cannot be parsed even after normalization.
    InvalidUrl(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::DuplicateUrl(url) => write!(f, "Duplicate bookmark URL: {}", url),
            BookmarkError::InvalidUrl(msg) => write!(f, "Invalid bookmark URL: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === StoreError ===

/// Errors related to the persistent snapshot store.
#[derive(Debug)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing the snapshot.
    IoError(String),
    /// Failed to serialize or deserialize the snapshot.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(msg) => write!(f, "Snapshot I/O error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Snapshot serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === EnrichError ===

/// Fatal errors from the metadata enrichment client.
///
/// Degraded lookups (timeout, non-2xx, malformed payload, service-reported
/// failure) are not errors: they produce a best-effort partial result.
#[derive(Debug)]
pub enum EnrichError {
    /// The URL cannot be parsed even after normalization.
    InvalidUrl(String),
    /// The HTTP client could not be constructed.
    ClientError(String),
}

impl fmt::Display for EnrichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            EnrichError::ClientError(msg) => write!(f, "Enrichment client error: {}", msg),
        }
    }
}

impl std::error::Error for EnrichError {}

// === ImportError ===

/// Errors related to importing a bookmark collection from a file.
#[derive(Debug)]
pub enum ImportError {
    /// The file content is not valid JSON.
    ParseError(String),
    /// The JSON does not have the expected collection shape.
    InvalidFormat(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::ParseError(msg) => write!(f, "Import parse error: {}", msg),
            ImportError::InvalidFormat(msg) => write!(f, "Invalid import format: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {}
