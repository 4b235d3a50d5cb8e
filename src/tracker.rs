use crate::client::{ClientError, OpenNotifyClient};
use crate::shutdown::ShutdownSignal;
use crate::thread_manager::SteppableTask;
use crate::types::StationFix;

/// Seam between the poller and the network so the polling behavior can be
/// exercised against scripted telemetry.
pub trait TelemetrySource: Send + 'static {
    fn fetch_fix(&self) -> Result<StationFix, ClientError>;
}

impl TelemetrySource for OpenNotifyClient {
    fn fetch_fix(&self) -> Result<StationFix, ClientError> {
        self.current_position()
    }
}

/// Holds the single most recent fix. `writer` and `viewer` hand out the
/// two sides of the lock so the poller thread and the window never share
/// a struct directly.
#[derive(Debug, Default)]
pub struct StationStore {
    inner: std::sync::Arc<std::sync::RwLock<Option<StationFix>>>,
}

impl StationStore {
    #[must_use]
    pub fn new() -> Self {
        StationStore::default()
    }

    #[must_use]
    pub fn writer(&self) -> StationWriter {
        StationWriter {
            inner: self.inner.clone(),
        }
    }

    #[must_use]
    pub fn viewer(&self) -> StationViewer {
        StationViewer {
            inner: self.inner.clone(),
        }
    }
}

pub struct StationWriter {
    inner: std::sync::Arc<std::sync::RwLock<Option<StationFix>>>,
}

impl StationWriter {
    pub fn publish(&self, fix: StationFix) {
        if let Ok(mut latest) = self.inner.write() {
            *latest = Some(fix);
        }
    }
}

#[derive(Clone)]
pub struct StationViewer {
    inner: std::sync::Arc<std::sync::RwLock<Option<StationFix>>>,
}

impl StationViewer {
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn latest(&self) -> Option<StationFix> {
        self.inner.read().expect("Station store lock poisoned").clone()
    }
}

/// The 1 Hz polling task. A successful step publishes the fresh fix; a
/// failed step logs its diagnostic, triggers shutdown, and ends the task.
pub struct PositionPoller<S: TelemetrySource> {
    source: S,
    writer: StationWriter,
    shutdown: ShutdownSignal,
}

impl<S: TelemetrySource> PositionPoller<S> {
    #[must_use]
    pub fn new(source: S, writer: StationWriter, shutdown: ShutdownSignal) -> Self {
        PositionPoller {
            source,
            writer,
            shutdown,
        }
    }
}

impl<S: TelemetrySource> SteppableTask for PositionPoller<S> {
    fn step(&mut self) -> bool {
        if self.shutdown.is_triggered() {
            return false;
        }
        match self.source.fetch_fix() {
            Ok(fix) => {
                log::debug!(
                    "Poller: station at ({0:.4}, {1:.4})",
                    fix.longitude,
                    fix.latitude
                );
                self.writer.publish(fix);
                true
            }
            Err(err) => {
                log::error!("Poller: position fetch failed: {err}");
                self.shutdown.trigger();
                false
            }
        }
    }
}
