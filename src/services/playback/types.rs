use std::collections::HashMap;
use std::fmt;

/// Identifier of a configured remote-server provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderId(String);

impl ProviderId {
    /// Create a ProviderId from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One configured connection to a remote media server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    /// Unique identifier the provider is registered under
    pub id: ProviderId,

    /// Human-readable name of the server
    pub label: String,
}

impl Provider {
    /// Create a provider from an identifier and display label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ProviderId::new(id),
            label: label.into(),
        }
    }

    /// A provider without an identifier cannot be registered
    pub fn is_empty(&self) -> bool {
        self.id.as_str().trim().is_empty()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

/// Numeric id of an item on the remote server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an ItemId from its numeric value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse a unique identifier that must consist of ASCII digits only.
    ///
    /// Returns `None` for empty, signed, fractional or otherwise
    /// non-numeric input, and for values that overflow.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        raw.parse().ok().map(Self)
    }

    /// Get the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playback state reported to the remote server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Item is playing
    Playing,

    /// Item is paused
    Paused,

    /// Playback was stopped
    Stopped,
}

impl PlaybackState {
    /// Wire name of the state as remote servers expect it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media class used by the remote server to look up item details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
    /// Feature film
    Movie,

    /// TV show as a whole
    Show,

    /// Season of a TV show
    Season,

    /// Single TV episode
    Episode,

    /// Media type with no remote counterpart
    Unknown,
}

impl From<&str> for MediaClass {
    fn from(media_type: &str) -> Self {
        match media_type.to_ascii_lowercase().as_str() {
            "movie" => Self::Movie,
            "tvshow" | "show" => Self::Show,
            "season" => Self::Season,
            "episode" => Self::Episode,
            _ => Self::Unknown,
        }
    }
}

/// Per-title metadata of a video, as exposed by the host or the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoInfo {
    /// Host media type (movie, episode, tvshow, ...)
    pub media_type: String,

    /// Unique identifiers keyed by protocol name
    pub unique_ids: HashMap<String, String>,
}

impl VideoInfo {
    /// Create metadata for the given media type without identifiers
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            unique_ids: HashMap::new(),
        }
    }

    /// Add a unique identifier under a protocol name
    pub fn with_unique_id(mut self, protocol: impl Into<String>, id: impl Into<String>) -> Self {
        self.unique_ids.insert(protocol.into(), id.into());
        self
    }

    /// Look up the unique identifier stored under `protocol`
    pub fn unique_id(&self, protocol: &str) -> Option<&str> {
        self.unique_ids.get(protocol).map(String::as_str)
    }

    /// Remote media class derived from the media type
    pub fn media_class(&self) -> MediaClass {
        MediaClass::from(self.media_type.as_str())
    }
}

/// An item previously imported from a provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedItem {
    /// Local title of the item
    pub title: String,

    /// Video metadata, absent for non-video items
    pub video_info: Option<VideoInfo>,
}

impl ImportedItem {
    /// Unique identifier of the item under `protocol`, if it is a video
    pub fn unique_id(&self, protocol: &str) -> Option<&str> {
        self.video_info.as_ref()?.unique_id(protocol)
    }
}

/// A (position, state, duration) triple pushed to a remote item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineUpdate {
    /// Playback position in milliseconds
    pub position_ms: u64,

    /// Playback state
    pub state: PlaybackState,

    /// Total duration of the item in milliseconds
    pub duration_ms: u64,
}

/// Convert host-reported fractional seconds to whole milliseconds.
///
/// Truncates toward zero; negative or NaN input becomes 0.
pub fn seconds_to_millis(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0) as u64
}
