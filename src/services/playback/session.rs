use std::sync::Arc;

use super::{
    ItemId, PlaybackState, ProviderId, TimelineUpdate, monitoring::MonitorHandle,
    traits::RemoteItem,
};

/// Mutable state of the current play-through.
///
/// Every field is unset while idle. `epoch` increases on each reset so
/// work started for an earlier session can detect it was replaced.
#[derive(Default)]
pub(crate) struct PlaybackSession {
    pub epoch: u64,
    pub file: Option<String>,
    pub item: Option<Arc<dyn RemoteItem>>,
    pub item_id: Option<ItemId>,
    pub provider: Option<ProviderId>,
    pub duration_ms: Option<u64>,
    pub last_time_ms: Option<u64>,
    pub last_state: Option<PlaybackState>,
    pub monitor: Option<MonitorHandle>,
}

impl PlaybackSession {
    /// Clear every field and tell the monitor to exit.
    pub fn reset(&mut self) {
        if let Some(monitor) = self.monitor.take() {
            monitor.stop();
        }

        self.epoch = self.epoch.wrapping_add(1);
        self.file = None;
        self.item = None;
        self.item_id = None;
        self.provider = None;
        self.duration_ms = None;
        self.last_time_ms = None;
        self.last_state = None;
    }

    pub fn monitor_running(&self) -> bool {
        self.monitor.as_ref().is_some_and(MonitorHandle::is_running)
    }

    /// The update to push, once both a time and a state are known.
    pub fn timeline(&self) -> Option<TimelineUpdate> {
        Some(TimelineUpdate {
            position_ms: self.last_time_ms?,
            state: self.last_state?,
            duration_ms: self.duration_ms.unwrap_or_default(),
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            file: self.file.clone(),
            item_id: self.item_id,
            provider: self.provider.clone(),
            duration_ms: self.duration_ms,
            last_time_ms: self.last_time_ms,
            last_state: self.last_state,
            has_remote_item: self.item.is_some(),
            monitor_running: self.monitor_running(),
        }
    }
}

/// Point-in-time copy of the reporter's session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// File captured when playback started
    pub file: Option<String>,

    /// Remote id of the matched item
    pub item_id: Option<ItemId>,

    /// Provider the item was matched on
    pub provider: Option<ProviderId>,

    /// Total duration in milliseconds
    pub duration_ms: Option<u64>,

    /// Last reported position in milliseconds
    pub last_time_ms: Option<u64>,

    /// Last reported playback state
    pub last_state: Option<PlaybackState>,

    /// Whether a remote item handle is held
    pub has_remote_item: bool,

    /// Whether the background monitor is still attached
    pub monitor_running: bool,
}

impl SessionSnapshot {
    /// True when nothing about a play-through is held
    pub fn is_idle(&self) -> bool {
        self == &Self::default()
    }
}
