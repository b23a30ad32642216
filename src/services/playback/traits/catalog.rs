use async_trait::async_trait;

use crate::services::playback::{CollaboratorError, ImportedItem, Provider};

/// Items previously imported into the local library
#[async_trait]
pub trait ImportCatalog: Send + Sync {
    /// List every item imported from `provider`
    ///
    /// # Errors
    /// Returns error if the import storage cannot be queried
    async fn imported_items(&self, provider: &Provider)
    -> Result<Vec<ImportedItem>, CollaboratorError>;
}
