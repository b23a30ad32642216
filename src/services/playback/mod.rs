mod abort;
mod error;
mod events;
mod handle;
mod matching;
mod monitoring;
mod reporter;
mod session;
/// Interfaces of the host and remote collaborators
pub mod traits;
mod types;

pub use abort::AbortSignal;
pub use error::{CollaboratorError, PlaybackError};
pub use events::PlayerEvent;
pub use handle::ReporterHandle;
pub use reporter::PlaybackReporter;
pub use session::SessionSnapshot;
pub use traits::{ImportCatalog, ItemResolver, PlayerSource, RemoteItem};
pub use types::{
    ImportedItem, ItemId, MediaClass, PlaybackState, Provider, ProviderId, TimelineUpdate,
    VideoInfo, seconds_to_millis,
};

#[cfg(test)]
mod tests;
