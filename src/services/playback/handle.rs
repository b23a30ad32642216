use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use super::{PlaybackError, PlaybackReporter, PlayerEvent};

/// Adapter between host callbacks and a [`PlaybackReporter`].
///
/// Host threads hand events over with [`ReporterHandle::notify`], which
/// never blocks. A single dispatcher task applies them in arrival order.
pub struct ReporterHandle {
    events: mpsc::UnboundedSender<PlayerEvent>,
    dispatcher: JoinHandle<()>,
}

impl ReporterHandle {
    /// Spawn the dispatcher task for `reporter`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(reporter: PlaybackReporter) -> Self {
        let (events, mut rx) = mpsc::unbounded_channel();

        let dispatcher = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                reporter.handle_event(event).await;
            }

            debug!("Event dispatcher ended");
        });

        Self { events, dispatcher }
    }

    /// Queue a lifecycle event without waiting for it to be handled.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::DispatcherClosed` if the dispatcher task is gone.
    pub fn notify(&self, event: PlayerEvent) -> Result<(), PlaybackError> {
        self.events
            .send(event)
            .map_err(|_| PlaybackError::DispatcherClosed)
    }

    /// Stop accepting events and wait until every queued one is handled.
    pub async fn shutdown(self) {
        let Self { events, dispatcher } = self;
        drop(events);

        if let Err(e) = dispatcher.await {
            debug!("Event dispatcher did not finish cleanly: {e}");
        }
    }
}
