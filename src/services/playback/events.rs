/// Lifecycle events delivered by the host's player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A new file started loading
    PlaybackStarted,

    /// Audio/video output actually began
    AvStarted,

    /// The user seeked within the item
    Seek,

    /// The user jumped to another chapter
    SeekChapter,

    /// Playback was paused
    Paused,

    /// Playback resumed after a pause
    Resumed,

    /// Playback was stopped by the user
    Stopped,

    /// Playback reached the end of the item
    Ended,
}
