use super::{ItemId, ProviderId};

/// Boxed error returned by external collaborators (catalog, remote server).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during playback reporting operations
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    /// Provider was empty or had no identifier
    #[error("invalid media provider")]
    InvalidProvider,

    /// Provider with the given ID was never registered
    #[error("provider {0} is not registered")]
    ProviderNotFound(ProviderId),

    /// The catalog of a provider could not be read
    #[error("failed to read imported items of provider {provider}: {source}")]
    CatalogUnavailable {
        /// Provider whose catalog failed
        provider: ProviderId,
        /// Underlying collaborator error
        #[source]
        source: CollaboratorError,
    },

    /// The remote item could not be resolved
    #[error("failed to resolve remote item {item_id} on provider {provider}: {source}")]
    ResolutionFailed {
        /// Provider the item was looked up on
        provider: ProviderId,
        /// Remote item id
        item_id: ItemId,
        /// Underlying collaborator error
        #[source]
        source: CollaboratorError,
    },

    /// A timeline update was rejected by the remote item
    #[error("failed to push timeline for item {item_id}: {source}")]
    PushFailed {
        /// Remote item id
        item_id: ItemId,
        /// Underlying collaborator error
        #[source]
        source: CollaboratorError,
    },

    /// The event dispatcher is no longer running
    #[error("playback event dispatcher has shut down")]
    DispatcherClosed,
}
