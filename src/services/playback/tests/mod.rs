//! Unit tests for the playback reporter
//!
//! Collaborators are in-memory fakes; timing tests run on a paused clock.

#![allow(clippy::panic, clippy::unwrap_used)]


use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{Event, Level, Subscriber, field::Field, field::Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::ReportingConfig;

use super::{
    AbortSignal, CollaboratorError, ImportCatalog, ImportedItem, ItemId, ItemResolver,
    MediaClass, PlaybackReporter, PlayerSource, Provider, ProviderId, RemoteItem,
    TimelineUpdate, VideoInfo,
};

#[derive(Debug, Default, Clone)]
pub(super) struct PlayerState {
    pub file: Option<String>,
    pub is_video: bool,
    pub info: Option<VideoInfo>,
    pub time: f64,
    pub total: f64,
}

#[derive(Default)]
pub(super) struct FakePlayer {
    state: Mutex<PlayerState>,
}

impl FakePlayer {
    pub fn playing_video(file: &str, info: VideoInfo, total: f64) -> Self {
        Self {
            state: Mutex::new(PlayerState {
                file: Some(file.to_string()),
                is_video: true,
                info: Some(info),
                time: 0.0,
                total,
            }),
        }
    }

    pub fn set_time(&self, seconds: f64) {
        self.state.lock().unwrap().time = seconds;
    }

    pub fn update(&self, change: impl FnOnce(&mut PlayerState)) {
        change(&mut self.state.lock().unwrap());
    }
}

impl PlayerSource for FakePlayer {
    fn playing_file(&self) -> Option<String> {
        self.state.lock().unwrap().file.clone()
    }

    fn is_playing_video(&self) -> bool {
        self.state.lock().unwrap().is_video
    }

    fn video_info(&self) -> Option<VideoInfo> {
        self.state.lock().unwrap().info.clone()
    }

    fn time(&self) -> f64 {
        self.state.lock().unwrap().time
    }

    fn total_time(&self) -> f64 {
        self.state.lock().unwrap().total
    }
}

#[derive(Default)]
pub(super) struct FakeCatalog {
    items: HashMap<String, Vec<ImportedItem>>,
    offline: HashSet<String>,
}

impl FakeCatalog {
    pub fn with_item(mut self, provider: &str, remote_id: &str) -> Self {
        self.items
            .entry(provider.to_string())
            .or_default()
            .push(ImportedItem {
                title: format!("imported {remote_id}"),
                video_info: Some(movie(remote_id)),
            });
        self
    }

    pub fn offline(mut self, provider: &str) -> Self {
        self.offline.insert(provider.to_string());
        self
    }
}

#[async_trait]
impl ImportCatalog for FakeCatalog {
    async fn imported_items(
        &self,
        provider: &Provider,
    ) -> Result<Vec<ImportedItem>, CollaboratorError> {
        if self.offline.contains(provider.id.as_str()) {
            return Err("import storage unavailable".into());
        }
        Ok(self
            .items
            .get(provider.id.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

struct RecordingItem {
    pushes: Arc<Mutex<Vec<TimelineUpdate>>>,
    fail: bool,
}

#[async_trait]
impl RemoteItem for RecordingItem {
    async fn update_timeline(&self, update: TimelineUpdate) -> Result<(), CollaboratorError> {
        self.pushes.lock().unwrap().push(update);
        if self.fail {
            return Err("server rejected timeline".into());
        }
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct FakeResolver {
    pub pushes: Arc<Mutex<Vec<TimelineUpdate>>>,
    pub resolved: Mutex<Vec<(ProviderId, ItemId, MediaClass)>>,
    pub fail_resolve: bool,
    pub fail_push: bool,
}

#[async_trait]
impl ItemResolver for FakeResolver {
    async fn resolve(
        &self,
        provider: &Provider,
        item_id: ItemId,
        media_class: MediaClass,
    ) -> Result<Arc<dyn RemoteItem>, CollaboratorError> {
        self.resolved
            .lock()
            .unwrap()
            .push((provider.id.clone(), item_id, media_class));
        if self.fail_resolve {
            return Err("server unreachable".into());
        }
        Ok(Arc::new(RecordingItem {
            pushes: Arc::clone(&self.pushes),
            fail: self.fail_push,
        }))
    }
}

pub(super) struct Harness {
    pub reporter: PlaybackReporter,
    pub player: Arc<FakePlayer>,
    pub resolver: Arc<FakeResolver>,
    pub abort: AbortSignal,
}

impl Harness {
    pub fn new(player: FakePlayer, catalog: FakeCatalog) -> Self {
        Self::build(player, catalog, FakeResolver::default(), ReportingConfig::default())
    }

    pub fn build(
        player: FakePlayer,
        catalog: FakeCatalog,
        resolver: FakeResolver,
        settings: ReportingConfig,
    ) -> Self {
        let player = Arc::new(player);
        let resolver = Arc::new(resolver);
        let abort = AbortSignal::new();
        let reporter = PlaybackReporter::new(
            player.clone(),
            Arc::new(catalog),
            resolver.clone(),
            settings,
            abort.clone(),
        );

        Self {
            reporter,
            player,
            resolver,
            abort,
        }
    }

    pub async fn with_providers(self, ids: &[&str]) -> Self {
        for id in ids {
            self.reporter
                .add_provider(Provider::new(*id, format!("server {id}")))
                .await
                .unwrap();
        }
        self
    }

    pub async fn start(&self) {
        self.reporter.on_playback_started().await;
        self.reporter.on_av_started().await;
    }

    pub fn pushes(&self) -> Vec<TimelineUpdate> {
        self.resolver.pushes.lock().unwrap().clone()
    }

    pub fn resolved_providers(&self) -> Vec<String> {
        self.resolver
            .resolved
            .lock()
            .unwrap()
            .iter()
            .map(|(provider, _, _)| provider.as_str().to_string())
            .collect()
    }
}

pub(super) fn movie(remote_id: &str) -> VideoInfo {
    VideoInfo::new("movie").with_unique_id("plex", remote_id)
}

/// Records every event's level and message.
#[derive(Clone, Default)]
pub(super) struct CapturedLogs(Arc<Mutex<Vec<(Level, String)>>>);

impl CapturedLogs {
    pub fn at(&self, level: Level) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Capture logs of the current thread until the guard is dropped.
pub(super) fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    use tracing_subscriber::layer::SubscriberExt;

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(logs.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
