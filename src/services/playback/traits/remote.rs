use std::sync::Arc;

use async_trait::async_trait;

use crate::services::playback::{
    CollaboratorError, ItemId, MediaClass, Provider, TimelineUpdate,
};

/// Handle to one item on a remote media server
#[async_trait]
pub trait RemoteItem: Send + Sync {
    /// Report the current position and state of the item
    ///
    /// # Errors
    /// Returns error if the server rejects or never receives the update
    async fn update_timeline(&self, update: TimelineUpdate) -> Result<(), CollaboratorError>;
}

/// Looks up remote items on the server behind a provider
#[async_trait]
pub trait ItemResolver: Send + Sync {
    /// Fetch full details of `item_id` and return a handle to it
    ///
    /// # Errors
    /// Returns error if the server is unreachable or the item does not exist
    async fn resolve(
        &self,
        provider: &Provider,
        item_id: ItemId,
        media_class: MediaClass,
    ) -> Result<Arc<dyn RemoteItem>, CollaboratorError>;
}
