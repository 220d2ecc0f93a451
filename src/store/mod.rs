// LinkVault persistence layer
// A single JSON snapshot of the bookmark collection under a well-known path.

pub mod snapshot;

pub use snapshot::SnapshotStore;
