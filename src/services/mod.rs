// LinkVault services
// Services provide core functionality: metadata enrichment, the derived
// view pipeline, and collection import/export.

pub mod enrichment_client;
pub mod import_export;
pub mod view_pipeline;
