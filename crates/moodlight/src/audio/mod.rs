pub mod features;
pub mod synth;

pub use features::AudioFeatures;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};

use self::synth::SyntheticSource;

/// Feeds features from a producer thread to the control loop:
/// generate -> bounded channel -> drain on the main thread.
pub struct FeatureFeed {
    receiver: Receiver<AudioFeatures>,
    latest: Option<AudioFeatures>,
    shutdown: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl FeatureFeed {
    /// Spawn a synthetic producer emitting at `tick_hz`.
    pub fn spawn_synthetic(seed: u64, tick_hz: u32) -> Result<Self> {
        let (tx, rx): (Sender<AudioFeatures>, Receiver<AudioFeatures>) =
            crossbeam_channel::bounded(4);
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = shutdown.clone();
        let source = SyntheticSource::new(seed);

        let handle = thread::Builder::new()
            .name("moodlight-features".into())
            .spawn(move || producer_thread(source, tick_hz.max(1), tx, flag))?;

        log::info!("Synthetic feature feed started (seed {seed}, {tick_hz} Hz)");

        Ok(Self {
            receiver: rx,
            latest: None,
            shutdown,
            thread_handle: Some(handle),
        })
    }

    /// Drain the channel and return the most recent features.
    pub fn latest_features(&mut self) -> Option<AudioFeatures> {
        while let Ok(features) = self.receiver.try_recv() {
            self.latest = Some(features);
        }
        self.latest
    }

    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for FeatureFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

fn producer_thread(
    mut source: SyntheticSource,
    tick_hz: u32,
    tx: Sender<AudioFeatures>,
    shutdown: Arc<AtomicBool>,
) {
    let period = Duration::from_secs_f32(1.0 / tick_hz as f32);
    let dt = period.as_secs_f32();

    while !shutdown.load(Ordering::Relaxed) {
        thread::sleep(period);
        let features = source.next_features(dt);

        // Non-blocking send; drop if the control loop is behind
        let _ = tx.try_send(features);
    }
}
