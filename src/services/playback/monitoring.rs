use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::{sync::Notify, task::JoinHandle};
use tracing::{Instrument, debug, info_span, instrument, trace};

use super::{AbortSignal, ItemId, reporter::ReporterCore};

/// Handle the session keeps on its background monitor.
pub(crate) struct MonitorHandle {
    stop: Arc<Notify>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Wake the monitor so it notices its session is gone.
    pub fn stop(&self) {
        self.stop.notify_one();
    }
}

/// Periodically reports the playing position of a matched item.
pub(crate) struct PlaybackMonitor;

impl PlaybackMonitor {
    /// Start a monitor for the session identified by `epoch`.
    ///
    /// The monitor exits on its own once the session is reset, the
    /// reporter is dropped or an abort is requested. Nothing joins it.
    #[instrument(skip(reporter, abort))]
    pub fn start(
        reporter: Weak<ReporterCore>,
        epoch: u64,
        item_id: ItemId,
        interval: Duration,
        abort: AbortSignal,
    ) -> MonitorHandle {
        debug!("Starting playback monitor");

        let stop = Arc::new(Notify::new());
        let span = info_span!("player_monitor", %item_id);
        let task = tokio::spawn(
            Self::run(reporter, epoch, interval, abort, Arc::clone(&stop)).instrument(span),
        );

        MonitorHandle { stop, task }
    }

    async fn run(
        reporter: Weak<ReporterCore>,
        epoch: u64,
        interval: Duration,
        abort: AbortSignal,
        stop: Arc<Notify>,
    ) {
        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = abort.requested() => {}
                _ = stop.notified() => {}
            }

            if abort.is_requested() {
                debug!("Abort requested, stopping monitor");
                break;
            }

            let Some(reporter) = reporter.upgrade() else {
                debug!("Reporter dropped, stopping monitor");
                break;
            };

            trace!("Monitor woke up");
            if !reporter.report_position(epoch).await {
                debug!("Session ended, stopping monitor");
                break;
            }

            drop(reporter);
        }

        debug!("Playback monitor ended");
    }
}
