/// Shared service building blocks
pub mod common;
/// Playback reporting to remote media servers
pub mod playback;

pub use playback::{
    AbortSignal, PlaybackError, PlaybackReporter, PlayerEvent, Provider, ReporterHandle,
};
