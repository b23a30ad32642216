use std::sync::Arc;

use futures::Stream;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, instrument, warn};

use crate::config::ReportingConfig;
use crate::services::common::Property;

use super::{
    AbortSignal, ItemId, PlaybackError, PlaybackState, PlayerEvent, Provider, SessionSnapshot,
    matching,
    monitoring::PlaybackMonitor,
    seconds_to_millis,
    session::PlaybackSession,
    traits::{ImportCatalog, ItemResolver, PlayerSource},
};

/// Reports local playback of imported items back to their remote server.
///
/// Lifecycle events from the host drive a single session: when audio/video
/// starts, the playing video is matched against the catalogs of the
/// registered providers, and from then on every state change, plus a
/// periodic position report, is pushed to the matched remote item.
/// Failures never interrupt local playback; they only stop reporting.
///
/// Cloning is cheap and clones share the same session.
#[derive(Clone)]
pub struct PlaybackReporter {
    core: Arc<ReporterCore>,
}

pub(crate) struct ReporterCore {
    player: Arc<dyn PlayerSource>,
    catalog: Arc<dyn ImportCatalog>,
    resolver: Arc<dyn ItemResolver>,
    settings: ReportingConfig,
    abort: AbortSignal,
    providers: RwLock<Vec<Provider>>,
    session: Mutex<PlaybackSession>,
    matched_item: Property<Option<ItemId>>,
}

impl PlaybackReporter {
    /// Create a reporter over the host's player and the external collaborators.
    ///
    /// `abort` is the process-wide shutdown flag; background monitors
    /// exit once it is requested.
    pub fn new(
        player: Arc<dyn PlayerSource>,
        catalog: Arc<dyn ImportCatalog>,
        resolver: Arc<dyn ItemResolver>,
        settings: ReportingConfig,
        abort: AbortSignal,
    ) -> Self {
        Self {
            core: Arc::new(ReporterCore {
                player,
                catalog,
                resolver,
                settings,
                abort,
                providers: RwLock::new(Vec::new()),
                session: Mutex::new(PlaybackSession::default()),
                matched_item: Property::new(None),
            }),
        }
    }

    /// Register a provider, replacing any provider with the same identifier.
    ///
    /// A replaced provider keeps its position in the matching order.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::InvalidProvider` if the provider has no identifier.
    #[instrument(skip(self, provider), fields(provider = %provider))]
    pub async fn add_provider(&self, provider: Provider) -> Result<(), PlaybackError> {
        if provider.is_empty() {
            return Err(PlaybackError::InvalidProvider);
        }

        let mut providers = self.core.providers.write().await;
        match providers.iter_mut().find(|p| p.id == provider.id) {
            Some(existing) => *existing = provider,
            None => providers.push(provider),
        }

        debug!("Provider registered");
        Ok(())
    }

    /// Unregister a provider.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::InvalidProvider` if the provider has no identifier,
    /// or `PlaybackError::ProviderNotFound` if it was never registered.
    #[instrument(skip(self, provider), fields(provider = %provider))]
    pub async fn remove_provider(&self, provider: &Provider) -> Result<(), PlaybackError> {
        if provider.is_empty() {
            return Err(PlaybackError::InvalidProvider);
        }

        let mut providers = self.core.providers.write().await;
        let Some(index) = providers.iter().position(|p| p.id == provider.id) else {
            return Err(PlaybackError::ProviderNotFound(provider.id.clone()));
        };
        providers.remove(index);

        debug!("Provider removed");
        Ok(())
    }

    /// Registered providers in matching order.
    pub async fn providers(&self) -> Vec<Provider> {
        self.core.providers.read().await.clone()
    }

    /// Apply one host lifecycle event.
    pub async fn handle_event(&self, event: PlayerEvent) {
        match event {
            PlayerEvent::PlaybackStarted => self.on_playback_started().await,
            PlayerEvent::AvStarted => self.on_av_started().await,
            PlayerEvent::Seek => self.on_playback_seek().await,
            PlayerEvent::SeekChapter => self.on_playback_seek_chapter().await,
            PlayerEvent::Paused => self.on_playback_paused().await,
            PlayerEvent::Resumed => self.on_playback_resumed().await,
            PlayerEvent::Stopped => self.on_playback_stopped().await,
            PlayerEvent::Ended => self.on_playback_ended().await,
        }
    }

    /// A new file started loading: forget the previous session.
    pub async fn on_playback_started(&self) {
        let mut session = self.core.session.lock().await;
        session.reset();
        session.file = self.core.player.playing_file();
        self.core.matched_item.set(None);

        debug!(file = ?session.file, "Playback started");
    }

    /// Audio/video output began: match the item and report it as playing.
    pub async fn on_av_started(&self) {
        self.core.start_playback().await;
        self.sync_playback_state(Some(PlaybackState::Playing), Some(0))
            .await;
    }

    /// Report the new position after a seek.
    pub async fn on_playback_seek(&self) {
        self.sync_playback_state(None, Some(self.core.playing_time_ms()))
            .await;
    }

    /// Report the new position after a chapter jump.
    pub async fn on_playback_seek_chapter(&self) {
        self.sync_playback_state(None, Some(self.core.playing_time_ms()))
            .await;
    }

    /// Report the position and the paused state.
    pub async fn on_playback_paused(&self) {
        self.sync_playback_state(
            Some(PlaybackState::Paused),
            Some(self.core.playing_time_ms()),
        )
        .await;
    }

    /// Report the position and the playing state.
    pub async fn on_playback_resumed(&self) {
        self.sync_playback_state(
            Some(PlaybackState::Playing),
            Some(self.core.playing_time_ms()),
        )
        .await;
    }

    /// Report the stopped state, then end the session.
    pub async fn on_playback_stopped(&self) {
        self.sync_playback_state(Some(PlaybackState::Stopped), None)
            .await;
        self.on_playback_ended().await;
    }

    /// End the session. The background monitor exits on its next wake.
    pub async fn on_playback_ended(&self) {
        self.core.reset_session(None).await;
        debug!("Playback ended");
    }

    /// Record a new state and/or position and push it to the matched item.
    ///
    /// Nothing is sent until both a position and a state are known for the
    /// session, so a state given before any position is kept and sent with
    /// the next position. Does nothing when no item is matched.
    pub async fn sync_playback_state(&self, state: Option<PlaybackState>, time_ms: Option<u64>) {
        self.core.sync_playback_state(state, time_ms).await;
    }

    #[cfg(test)]
    pub(crate) async fn start_playback(&self) {
        self.core.start_playback().await;
    }

    /// Monitor tasks still alive; each holds one weak reference to the core.
    #[cfg(test)]
    pub(crate) fn live_monitors(&self) -> usize {
        Arc::weak_count(&self.core)
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> SessionSnapshot {
        self.core.session.lock().await.snapshot()
    }

    /// Remote id of the item currently being reported, if any.
    pub fn matched_item(&self) -> Option<ItemId> {
        self.core.matched_item.get()
    }

    /// Stream that yields whenever the reported item changes.
    pub fn matched_item_monitored(&self) -> impl Stream<Item = Option<ItemId>> + Send {
        self.core.matched_item.watch()
    }
}

impl ReporterCore {
    fn playing_time_ms(&self) -> u64 {
        seconds_to_millis(self.player.time())
    }

    /// Identify the playing video among the imported items and attach the
    /// matched remote item to the session.
    #[instrument(skip(self))]
    async fn start_playback(self: &Arc<Self>) {
        if !self.settings.enabled {
            debug!("Reporting disabled, not matching playback");
            return;
        }

        let (epoch, file) = {
            let session = self.session.lock().await;
            (session.epoch, session.file.clone())
        };

        let Some(file) = file else {
            return;
        };

        if !self.player.is_playing_video() {
            return;
        }

        let Some(video_info) = self.player.video_info() else {
            return;
        };

        let protocol = self.settings.protocol.as_str();
        let Some(raw_id) = video_info.unique_id(protocol) else {
            return;
        };

        let Some(item_id) = ItemId::parse(raw_id) else {
            error!(
                "invalid item id {} (not an unsigned 64-bit number) playing from {}; \
                 playback state will not be reported",
                raw_id, file
            );
            self.reset_session(Some(epoch)).await;
            return;
        };

        let providers = self.providers.read().await.clone();
        let Some(provider) =
            matching::find_provider(self.catalog.as_ref(), &providers, protocol, item_id, &file)
                .await
        else {
            debug!("No provider has imported item {}", item_id);
            self.reset_session(Some(epoch)).await;
            return;
        };

        let item = match self
            .resolver
            .resolve(&provider, item_id, video_info.media_class())
            .await
        {
            Ok(item) => item,
            Err(source) => {
                let err = PlaybackError::ResolutionFailed {
                    provider: provider.id.clone(),
                    item_id,
                    source,
                };
                warn!("{err}");
                self.reset_session(Some(epoch)).await;
                return;
            }
        };

        let duration_ms = seconds_to_millis(self.player.total_time());

        let mut session = self.session.lock().await;
        if session.epoch != epoch {
            debug!("Session replaced while matching, discarding match");
            return;
        }

        session.item = Some(item);
        session.item_id = Some(item_id);
        session.provider = Some(provider.id.clone());
        session.duration_ms = Some(duration_ms);

        if !session.monitor_running() {
            session.monitor = Some(PlaybackMonitor::start(
                Arc::downgrade(self),
                epoch,
                item_id,
                self.settings.interval(),
                self.abort.clone(),
            ));
        }

        self.matched_item.set(Some(item_id));
        info!("Reporting playback of item {} to {}", item_id, provider);
    }

    /// Reset the session, unless `expected_epoch` names a session that was
    /// already replaced.
    async fn reset_session(&self, expected_epoch: Option<u64>) {
        let mut session = self.session.lock().await;
        if expected_epoch.is_some_and(|epoch| epoch != session.epoch) {
            return;
        }

        session.reset();
        self.matched_item.set(None);
    }

    async fn sync_playback_state(&self, state: Option<PlaybackState>, time_ms: Option<u64>) {
        if state.is_none() && time_ms.is_none() {
            return;
        }

        let mut session = self.session.lock().await;
        if session.item.is_none() {
            return;
        }

        if let Some(state) = state {
            session.last_state = Some(state);
        }

        if let Some(time_ms) = time_ms {
            session.last_time_ms = Some(time_ms);
        }

        Self::push_timeline(&session).await;
    }

    /// Report the current position for the monitor of session `epoch`.
    ///
    /// Returns `false` once that session no longer has a matched item.
    pub(crate) async fn report_position(&self, epoch: u64) -> bool {
        let mut session = self.session.lock().await;
        if session.epoch != epoch || session.item.is_none() {
            return false;
        }

        session.last_time_ms = Some(self.playing_time_ms());
        Self::push_timeline(&session).await;
        true
    }

    async fn push_timeline(session: &PlaybackSession) {
        let (Some(item), Some(item_id), Some(update)) =
            (session.item.as_ref(), session.item_id, session.timeline())
        else {
            return;
        };

        debug!(
            position_ms = update.position_ms,
            state = %update.state,
            duration_ms = update.duration_ms,
            "Pushing timeline update"
        );

        if let Err(source) = item.update_timeline(update).await {
            let err = PlaybackError::PushFailed { item_id, source };
            warn!("{err}");
        }
    }
}
