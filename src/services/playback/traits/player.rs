use crate::services::playback::VideoInfo;

/// Read access to the host's local player.
///
/// Accessors are called from the reporter's tasks and must return
/// quickly without blocking on I/O.
pub trait PlayerSource: Send + Sync {
    /// Path or URL of the file currently playing
    fn playing_file(&self) -> Option<String>;

    /// Whether the current media is a video
    fn is_playing_video(&self) -> bool;

    /// Metadata of the playing video, if the host has any
    fn video_info(&self) -> Option<VideoInfo>;

    /// Elapsed playback time in fractional seconds
    fn time(&self) -> f64;

    /// Total duration of the playing media in fractional seconds
    fn total_time(&self) -> f64;
}
