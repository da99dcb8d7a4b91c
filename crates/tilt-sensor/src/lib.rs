pub mod permission;
pub mod source;

pub use permission::{PermissionGate, PermissionState, StaticGate};
pub use source::{parse_line, LineSource, OrientationSource, SweepSource};

use anyhow::{bail, Context, Result};
use std::time::Duration;
use tilt_core::OrientationSample;
use tokio::sync::mpsc;

/// Samples buffered between the source task and the consumer.
const CHANNEL_CAPACITY: usize = 64;

/// Streams samples from an [`OrientationSource`] on a background task.
///
/// Checks the source's permission capability first, then reads it on a blocking
/// task and forwards every sample, paced to the configured rate.
pub struct SensorClient {
    sample_rx: mpsc::Receiver<OrientationSample>,
    task: tokio::task::JoinHandle<Result<u64>>,
}

impl SensorClient {
    /// Start streaming. Must be called from within a tokio runtime.
    ///
    /// A `sample_rate_hz` of 0 forwards samples as fast as the source yields them.
    /// Rates too small to have a representable period are an error.
    pub fn start<S>(mut source: S, sample_rate_hz: f32) -> Result<Self>
    where
        S: OrientationSource + 'static,
    {
        if let Some(gate) = source.permission() {
            match gate.request()? {
                PermissionState::Granted => tracing::info!("Orientation permission granted"),
                PermissionState::Denied => bail!("Orientation permission denied"),
            }
        }

        let pacing = if sample_rate_hz > 0.0 {
            let period = Duration::try_from_secs_f32(1.0 / sample_rate_hz)
                .with_context(|| format!("Sample rate {sample_rate_hz} Hz is out of range"))?;
            Some(period)
        } else {
            None
        };
        let (sample_tx, sample_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let task = tokio::task::spawn_blocking(move || read_loop(source, sample_tx, pacing));

        tracing::info!(sample_rate_hz, "Sensor client started");
        Ok(Self { sample_rx, task })
    }

    /// Next sample, or `None` once the source is exhausted or failed.
    pub async fn recv(&mut self) -> Option<OrientationSample> {
        self.sample_rx.recv().await
    }

    /// Wait for the source task and return how many samples it delivered.
    pub async fn finish(self) -> Result<u64> {
        drop(self.sample_rx);
        self.task.await?
    }
}

/// Background task: pull samples from the source and forward them.
fn read_loop<S: OrientationSource>(
    mut source: S,
    sample_tx: mpsc::Sender<OrientationSample>,
    pacing: Option<Duration>,
) -> Result<u64> {
    let mut delivered: u64 = 0;
    loop {
        let Some(sample) = source.next_sample()? else {
            tracing::info!(delivered, "Orientation source exhausted");
            return Ok(delivered);
        };
        if sample_tx.blocking_send(sample).is_err() {
            tracing::debug!(delivered, "Sample receiver dropped");
            return Ok(delivered);
        }
        delivered += 1;
        if delivered % 100 == 0 {
            tracing::debug!(delivered, "Orientation samples forwarded");
        }
        if let Some(interval) = pacing {
            std::thread::sleep(interval);
        }
    }
}
