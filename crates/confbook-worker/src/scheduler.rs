//! Interval scheduler for the reconciliation sweep.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use confbook_core::config::SweepConfig;
use confbook_core::error::AppError;
use confbook_service::{BookingEngine, SweepReport};

/// Runs the booking sweep on a fixed interval
#[derive(Debug)]
pub struct SweepScheduler {
    /// Engine whose sweep is run
    engine: Arc<BookingEngine>,
    /// Sweep configuration
    config: SweepConfig,
}

/// Handle to a running sweep task
#[derive(Debug)]
pub struct SweepHandle {
    /// Shutdown signal
    shutdown: watch::Sender<bool>,
    /// The spawned loop
    task: JoinHandle<()>,
}

impl SweepScheduler {
    /// Create a new sweep scheduler
    pub fn new(engine: Arc<BookingEngine>, config: SweepConfig) -> Self {
        Self { engine, config }
    }

    /// Spawn the sweep loop. The first pass runs one interval from now.
    pub fn start(self) -> SweepHandle {
        let (shutdown, cancel) = watch::channel(false);
        let task = tokio::spawn(async move { self.run(cancel).await });
        SweepHandle { shutdown, task }
    }

    /// Run one pass, logging instead of propagating failures
    pub async fn run_pass(&self) -> Option<SweepReport> {
        match self.engine.run_sweep().await {
            Ok(report) => {
                tracing::debug!(changed = report.total(), "Sweep pass finished");
                Some(report)
            }
            Err(e) => {
                tracing::error!(error = %e, "Sweep pass failed");
                None
            }
        }
    }

    async fn run(self, mut cancel: watch::Receiver<bool>) {
        let period = self.config.interval();
        tracing::info!(interval_seconds = period.as_secs(), "Booking sweep started");

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        tracing::info!("Booking sweep received shutdown signal");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.run_pass().await;
                }
            }
        }

        tracing::info!("Booking sweep shut down complete");
    }
}

impl SweepHandle {
    /// Signal the loop to stop and wait for it. An in-flight pass is allowed to finish.
    pub async fn stop(self) -> Result<(), AppError> {
        // A send error only means the loop already exited.
        let _ = self.shutdown.send(true);
        self.task
            .await
            .map_err(|e| AppError::internal(format!("Sweep task failed: {e}")))
    }

    /// Whether the loop has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
