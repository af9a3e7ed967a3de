use std::sync::Arc;

use crate::application::ports::{CollectionRepository, StagingStore};
use crate::application::services::ImportService;

pub struct AppState {
    pub import_service: Arc<ImportService>,
    pub collection_repository: Arc<dyn CollectionRepository>,
    pub staging_store: Arc<dyn StagingStore>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            import_service: Arc::clone(&self.import_service),
            collection_repository: Arc::clone(&self.collection_repository),
            staging_store: Arc::clone(&self.staging_store),
        }
    }
}
