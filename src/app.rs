//! App Core for LinkVault.
//!
//! Central struct holding the managers and services, managing application
//! lifecycle. The App owns the collection explicitly; nothing is
//! process-global.

use crate::managers::collection_manager::CollectionManager;
use crate::managers::form_manager::FormManager;
use crate::services::enrichment_client::EnrichmentClient;
use crate::store::snapshot::SnapshotStore;
use crate::types::errors::EnrichError;

/// Central application struct holding all managers and services.
pub struct App {
    pub collection: CollectionManager,
    pub form: FormManager,
    pub enrichment: EnrichmentClient,
}

impl App {
    /// Creates a new App: resolves the snapshot store, loads the committed
    /// collection into memory, and constructs the enrichment client and a
    /// closed form session.
    ///
    /// If `store_path_override` is `Some`, the snapshot lives at that path
    /// instead of the platform config directory.
    pub fn new(store_path_override: Option<String>) -> Result<Self, EnrichError> {
        let store = SnapshotStore::new(store_path_override);
        let collection = CollectionManager::new(store);
        let enrichment = EnrichmentClient::new()?;

        Ok(Self {
            collection,
            form: FormManager::new(),
            enrichment,
        })
    }

    /// Shutdown sequence: flush the collection to the snapshot store.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.collection.flush() {
            tracing::warn!(error = %e, "Failed to flush collection on shutdown");
        }
    }
}
